use std::process::ExitCode;

/// Process exit status of a locdiff command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// No missing keys (or the command does not report any).
    Success,
    /// `check` found at least one missing key.
    Failure,
    /// The command could not run: bad arguments, config or translations root.
    Error,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
