use anyhow::{Ok, Result};

use super::super::args::CheckCommand;
use super::{
    CommandResult,
    helper::{current_dir, ensure_translations_root, finish_check, open_session, summarize},
};
use crate::{session::DocumentReport, utils::absolutize};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let cwd = current_dir()?;
    let mut session = open_session(&cwd, &cmd.common)?;
    ensure_translations_root(&session)?;

    let reports: Vec<DocumentReport> = if cmd.files.is_empty() {
        session.check_all()
    } else {
        cmd.files
            .iter()
            .map(|file| session.check_document(&absolutize(&cwd, file)))
            .collect()
    };

    Ok(finish_check(summarize(reports, &cwd)))
}
