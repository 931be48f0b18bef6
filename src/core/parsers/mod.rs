//! Parsers for translation documents.
//!
//! - `json`: JSON message files → [`MessageTree`](crate::core::MessageTree) → flat keys

pub mod json;
