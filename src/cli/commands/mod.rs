pub mod check;
mod command_result;
pub mod helper;
pub mod hover;
pub mod init;
pub mod watch;

pub use command_result::*;
