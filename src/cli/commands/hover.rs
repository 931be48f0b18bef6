use anyhow::Result;

use super::super::args::HoverCommand;
use super::{
    CommandResult, CommandSummary, HoverSummary,
    helper::{current_dir, ensure_translations_root, open_session},
};
use crate::{
    core::Position,
    session::SkipReason,
    utils::{absolutize, display_relative},
};

pub fn hover(cmd: HoverCommand) -> Result<CommandResult> {
    let cwd = current_dir()?;
    let mut session = open_session(&cwd, &cmd.common)?;
    ensure_translations_root(&session)?;

    let document = absolutize(&cwd, &cmd.file);
    let display = display_relative(&cwd, &document);
    let report = session.check_document(&document);

    match report.skipped {
        Some(SkipReason::NotATranslationDocument) => {
            anyhow::bail!("{} is not a translation document", display)
        }
        Some(SkipReason::Unusable) => {
            let reason = report
                .warnings
                .iter()
                .find(|w| Some(&w.locale) == report.locale.as_ref())
                .map(|w| w.error.clone())
                .unwrap_or_else(|| "unreadable document".to_string());
            anyhow::bail!("Cannot check {}: {}", display, reason)
        }
        Some(SkipReason::NoTranslationsRoot) | None => {}
    }

    // The CLI is 1-based, positions are zero-based.
    let position = Position::new(cmd.line as usize - 1, cmd.column as usize - 1);
    let hover = session.hover(&document, position);

    Ok(CommandResult {
        summary: CommandSummary::Hover(HoverSummary {
            location: format!("{}:{}:{}", display, cmd.line, cmd.column),
            hover,
            load_warnings: report.warnings,
        }),
        warning_count: 0,
        exit_on_warnings: false,
    })
}
