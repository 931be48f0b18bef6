//! `locdiff watch`: re-check the translations root on every change.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use colored::Colorize;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use super::super::{args::WatchCommand, report::print_check};
use super::{
    CommandResult, CommandSummary,
    helper::{current_dir, ensure_translations_root, open_session, summarize},
};
use crate::session::{FileChange, FileChangeKind, Session};

const DEBOUNCE: Duration = Duration::from_millis(100);
const MAX_BATCH: usize = 64;

/// Drops repeated events for the same path inside the debounce window.
#[derive(Debug)]
struct Debouncer {
    window: Duration,
    last_seen: HashMap<PathBuf, Instant>,
}

impl Debouncer {
    fn new(window: Duration) -> Self {
        Self {
            window,
            last_seen: HashMap::new(),
        }
    }

    fn accept(&mut self, path: &Path, now: Instant) -> bool {
        if let Some(last) = self.last_seen.get(path)
            && now.duration_since(*last) < self.window
        {
            return false;
        }
        self.last_seen.insert(path.to_path_buf(), now);
        self.last_seen
            .retain(|_, last| now.duration_since(*last) < Duration::from_secs(60));
        true
    }
}

fn change_kind(kind: &EventKind) -> Option<FileChangeKind> {
    match kind {
        EventKind::Create(_) => Some(FileChangeKind::Created),
        EventKind::Modify(_) => Some(FileChangeKind::Modified),
        EventKind::Remove(_) => Some(FileChangeKind::Deleted),
        EventKind::Access(_) => None,
        _ => Some(FileChangeKind::Modified),
    }
}

/// notify watcher feeding a tokio channel.
struct FileWatcher {
    _watcher: RecommendedWatcher,
    receiver: mpsc::UnboundedReceiver<FileChange>,
    debouncer: Debouncer,
}

impl FileWatcher {
    fn new(root: &Path) -> Result<Self> {
        let (tx, rx) = mpsc::unbounded_channel();

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) => {
                let Some(kind) = change_kind(&event.kind) else {
                    return;
                };
                for path in event.paths {
                    if let Err(e) = tx.send(FileChange::new(path, kind)) {
                        tracing::warn!(error = %e, "failed to forward file change");
                    }
                }
            }
            Err(e) => tracing::warn!(error = %e, "file watcher error"),
        })
        .context("Failed to create file watcher")?;

        watcher
            .watch(root, RecursiveMode::Recursive)
            .with_context(|| format!("Failed to watch {}", root.display()))?;

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
            debouncer: Debouncer::new(DEBOUNCE),
        })
    }

    async fn next_change(&mut self) -> Option<FileChange> {
        loop {
            let change = self.receiver.recv().await?;
            if self.debouncer.accept(&change.path, Instant::now()) {
                return Some(change);
            }
        }
    }

    /// Wait for one change, then collect whatever else arrives shortly after.
    async fn next_batch(&mut self) -> Vec<FileChange> {
        let mut changes = Vec::new();
        let Some(first) = self.next_change().await else {
            return changes;
        };
        changes.push(first);

        while changes.len() < MAX_BATCH {
            match tokio::time::timeout(DEBOUNCE, self.next_change()).await {
                Ok(Some(change)) => changes.push(change),
                _ => break,
            }
        }
        changes
    }
}

fn check_round(session: &mut Session, cwd: &Path) {
    let reports = session.check_all();
    print_check(&summarize(reports, cwd));
}

pub fn watch(cmd: WatchCommand) -> Result<CommandResult> {
    let cwd = current_dir()?;
    let mut session = open_session(&cwd, &cmd.common)?;
    ensure_translations_root(&session)?;
    let root = session.translations_root().to_path_buf();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async move {
            let mut watcher = FileWatcher::new(&root)?;

            check_round(&mut session, &cwd);
            println!(
                "{} {} {}",
                "Watching".cyan().bold(),
                root.display(),
                "(press Ctrl-C to stop)".dimmed()
            );

            let shutdown = tokio::signal::ctrl_c();
            tokio::pin!(shutdown);

            loop {
                tokio::select! {
                    changes = watcher.next_batch() => {
                        if changes.is_empty() {
                            break;
                        }
                        tracing::debug!(changes = changes.len(), "re-checking");
                        session.on_files_changed(&changes);
                        println!();
                        check_round(&mut session, &cwd);
                    }
                    _ = &mut shutdown => break,
                }
            }

            anyhow::Ok(CommandResult {
                summary: CommandSummary::Watch,
                warning_count: 0,
                exit_on_warnings: false,
            })
        })
}
