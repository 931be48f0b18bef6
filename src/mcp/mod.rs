//! Model Context Protocol (MCP) server implementation.
//!
//! The server exposes a [`Session`](crate::session::Session) per project to
//! AI assistants: documents can be opened and checked, hovered, closed, and
//! the session can be told about file and configuration changes.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameters and results

mod server;
pub mod types;

pub use server::{LocdiffMcpServer, run_server};
