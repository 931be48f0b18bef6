use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, hover::hover, init::init, watch::watch},
};

/// Run the parsed command. `serve` owns stdio and is started by the binary.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Hover(cmd)) => hover(cmd),
        Some(Command::Watch(cmd)) => watch(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => bail!("`serve` runs the MCP server and is not a CLI command"),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
