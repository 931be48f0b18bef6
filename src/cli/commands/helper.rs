use std::{collections::HashSet, env, fs, path::Path};

use anyhow::{Context, Result};

use super::super::args::CommonArgs;
use super::{CheckSummary, CommandResult, CommandSummary, DocumentOutput};
use crate::{
    config::load_config,
    session::{DocumentReport, Session, SkipReason},
    utils::{absolutize, display_relative},
};

pub fn current_dir() -> Result<std::path::PathBuf> {
    env::current_dir().context("Failed to read the current directory")
}

/// Build a session from the config found above `cwd`, with CLI overrides applied.
pub fn open_session(cwd: &Path, common: &CommonArgs) -> Result<Session> {
    let loaded = load_config(cwd)?;
    let mut config = loaded.config;

    // CLI paths are relative to the working directory, config paths to the project root.
    if let Some(root) = &common.translations_root {
        config.translations_root = absolutize(cwd, root).to_string_lossy().to_string();
    }
    if let Some(mode) = common.mode {
        config.mode = mode;
    }

    tracing::debug!(
        project_root = %loaded.project_root.display(),
        from_file = loaded.from_file,
        "configuration loaded"
    );
    Ok(Session::new(loaded.project_root, config))
}

pub fn ensure_translations_root(session: &Session) -> Result<()> {
    if !session.translations_root().is_dir() {
        anyhow::bail!(
            "Translations root not found: {}",
            session.translations_root().display()
        );
    }
    Ok(())
}

/// Collect pass reports into a printable summary.
pub fn summarize(reports: Vec<DocumentReport>, cwd: &Path) -> CheckSummary {
    let mut summary = CheckSummary::default();
    let mut seen_warnings = HashSet::new();

    for report in reports {
        let path = display_relative(cwd, &report.document);
        match report.skipped {
            Some(SkipReason::NotATranslationDocument) => {
                summary.not_translation_documents.push(path);
                continue;
            }
            Some(SkipReason::NoTranslationsRoot) => continue,
            Some(SkipReason::Unusable) | None => summary.documents_checked += 1,
        }

        for warning in report.warnings {
            if seen_warnings.insert(warning.file_path.clone()) {
                summary.load_warnings.push(warning);
            }
        }

        if !report.annotations.is_empty() {
            summary.documents.push(DocumentOutput {
                path,
                source: fs::read_to_string(&report.document).ok(),
                annotations: report.annotations,
            });
        }
    }

    summary
}

pub fn finish_check(summary: CheckSummary) -> CommandResult {
    let warning_count = summary
        .documents
        .iter()
        .map(|d| d.annotations.len())
        .sum();

    CommandResult {
        summary: CommandSummary::Check(summary),
        warning_count,
        exit_on_warnings: true,
    }
}
