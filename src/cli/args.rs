//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report missing keys for every translation document (or the given ones)
//! - `hover`: Print the hover text at a position of a translation document
//! - `watch`: Re-check translation documents whenever the translations root changes
//! - `init`: Initialize locdiff configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::layout::LayoutMode;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Hover(cmd)) => cmd.common.verbose,
            Some(Command::Watch(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Translations directory (overrides config file)
    #[arg(long, alias = "messages-root", env = "LOCDIFF_TRANSLATIONS_ROOT")]
    pub translations_root: Option<PathBuf>,

    /// Directory layout of the translations root (overrides config file)
    #[arg(long, value_enum)]
    pub mode: Option<LayoutMode>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Translation documents to check (default: every document under the root)
    pub files: Vec<PathBuf>,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct HoverCommand {
    /// Translation document
    pub file: PathBuf,
    /// Line number (1-based)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub line: u32,
    /// Column number (1-based, in characters)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub column: u32,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct WatchCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report keys missing from one locale but present in another
    Check(CheckCommand),
    /// Print the hover text for the key at LINE:COLUMN of FILE
    Hover(HoverCommand),
    /// Watch the translations root and re-check on every change
    Watch(WatchCommand),
    /// Initialize a new .locdiffrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
