//! locdiff - missing-key detection across JSON translation files
//!
//! For one translation document, locdiff loads the equivalent file of every
//! other locale, compares the flattened key sets, and reports the gaps as
//! warnings anchored to key tokens in the document. Results are cached per
//! document so hover queries can be answered without recomputing.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (check, hover, watch, init)
//! - `config`: Configuration file loading and parsing
//! - `core`: Parsing, flattening, layout resolution and key location
//! - `issues`: Issue type definitions and messages
//! - `mcp`: Model Context Protocol server implementation
//! - `report`: Turning reconciliation results into positioned annotations
//! - `rules`: Reconciliation checks
//! - `session`: Passes, hover cache and invalidation hooks
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod report;
pub mod rules;
pub mod session;
pub mod utils;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "LOCDIFF_LOG";

/// Install the global tracing subscriber. Logs go to stderr so they never
/// mix with command output or the MCP stdio transport.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let default_directive = if verbose { "locdiff=debug" } else { "locdiff=error" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false),
        )
        .try_init();
}
