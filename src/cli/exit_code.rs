use super::{commands::CommandResult, exit_status::ExitStatus};

pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    if result.exit_on_warnings && result.warning_count > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
