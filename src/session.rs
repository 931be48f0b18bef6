//! Reconciliation passes and the hover cache.
//!
//! A [`Session`] stands in for the host editor integration: it keeps the text
//! of open documents, runs one pass per trigger, and caches the outcome of
//! the latest pass per document so hover queries can be answered without
//! recomputing. The cache is dropped by the invalidation hooks
//! ([`Session::on_document_closed`], [`Session::on_files_changed`],
//! [`Session::on_config_changed`]).

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;

use crate::{
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        KeyPosition, Position, TextRange, TranslationFamily,
        family::{FamilyRequest, LoadWarning, load_family},
        layout::{Layout, document_identity, resolve_layout, translation_documents},
        locate::{KeyLocator, key_at},
    },
    report::{Annotation, anchor_paths, build_annotations},
    rules::reconcile,
    utils::{absolutize, absolutize_from_cwd, display_relative},
};

/// Kind of a file-system change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileChangeKind {
    Created,
    Modified,
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: PathBuf,
    pub kind: FileChangeKind,
}

impl FileChange {
    pub fn new(path: impl Into<PathBuf>, kind: FileChangeKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Why a pass produced no annotations without running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// The configured translations root does not exist.
    NoTranslationsRoot,
    /// The document is not a locale file under the translations root.
    NotATranslationDocument,
    /// The document itself could not be read or parsed.
    Unusable,
}

/// Outcome of one pass for one document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReport {
    pub document: PathBuf,
    pub locale: Option<String>,
    /// Locales compared in this pass, in load order.
    pub locales: Vec<String>,
    /// Replaces any earlier annotations for `document`.
    pub annotations: Vec<Annotation>,
    pub warnings: Vec<LoadWarning>,
    pub skipped: Option<SkipReason>,
}

impl DocumentReport {
    fn skipped(document: PathBuf, reason: SkipReason) -> Self {
        Self {
            document,
            locale: None,
            locales: Vec::new(),
            annotations: Vec::new(),
            warnings: Vec::new(),
            skipped: Some(reason),
        }
    }
}

/// Hover answer for a cursor position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hover {
    pub key: String,
    pub range: TextRange,
    /// Messages of every annotation under the cursor, one per paragraph.
    pub contents: String,
    /// The key's value in the current locale, if it has one.
    pub value: Option<String>,
}

/// Last good pass of a document.
#[derive(Debug)]
struct CachedPass {
    locale: String,
    family: TranslationFamily,
    positions: Vec<KeyPosition>,
    annotations: Vec<Annotation>,
}

struct PassOutput {
    report: DocumentReport,
    cached: Option<CachedPass>,
}

pub struct Session {
    project_root: PathBuf,
    config: Config,
    translations_root: PathBuf,
    layout: Layout,
    open_documents: HashMap<PathBuf, String>,
    cache: HashMap<PathBuf, CachedPass>,
}

impl Session {
    pub fn new(project_root: impl Into<PathBuf>, config: Config) -> Self {
        let project_root = absolutize_from_cwd(&project_root.into());
        let translations_root = absolutize(&project_root, Path::new(&config.translations_root));
        let layout = resolve_layout(&translations_root, config.mode);
        tracing::debug!(
            root = %translations_root.display(),
            layout = %layout,
            "session created"
        );
        Self {
            project_root,
            config,
            translations_root,
            layout,
            open_documents: HashMap::new(),
            cache: HashMap::new(),
        }
    }

    /// Create a session from the configuration found at or above `start_dir`.
    pub fn load(start_dir: &Path) -> Result<Self> {
        let loaded = load_config(start_dir)?;
        if !loaded.from_file {
            tracing::info!("no {} found, using default configuration", CONFIG_FILE_NAME);
        }
        Ok(Self::new(loaded.project_root, loaded.config))
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn translations_root(&self) -> &Path {
        &self.translations_root
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        absolutize(&self.project_root, path)
    }

    // ============================================================
    // Passes
    // ============================================================

    /// Record the editor text of a document and run a pass with it.
    pub fn open_document(&mut self, path: &Path, text: impl Into<String>) -> DocumentReport {
        let document = self.resolve(path);
        self.open_documents.insert(document.clone(), text.into());
        self.check_document(&document)
    }

    /// Same as [`Session::open_document`]; the new text replaces the old one.
    pub fn update_document(&mut self, path: &Path, text: impl Into<String>) -> DocumentReport {
        self.open_document(path, text)
    }

    /// Run a pass for one document, using its open text or its on-disk content.
    pub fn check_document(&mut self, path: &Path) -> DocumentReport {
        let document = self.resolve(path);
        let output = self.compute_pass(&document);
        self.store(output)
    }

    /// Run a pass for every translation document under the root.
    ///
    /// Documents are independent, so their passes run in parallel.
    pub fn check_all(&mut self) -> Vec<DocumentReport> {
        let documents = self.translation_documents();
        let outputs: Vec<PassOutput> = documents
            .par_iter()
            .map(|document| self.compute_pass(document))
            .collect();
        outputs.into_iter().map(|output| self.store(output)).collect()
    }

    /// Every translation document under the root that is not ignored.
    pub fn translation_documents(&self) -> Vec<PathBuf> {
        if !self.translations_root.is_dir() {
            return Vec::new();
        }
        match translation_documents(&self.translations_root, self.layout) {
            Ok(documents) => documents
                .into_iter()
                .filter(|doc| {
                    !self
                        .config
                        .is_ignored(Path::new(&display_relative(&self.project_root, doc)))
                })
                .collect(),
            Err(e) => {
                tracing::warn!(
                    path = %self.translations_root.display(),
                    error = %e,
                    "cannot enumerate translation documents"
                );
                Vec::new()
            }
        }
    }

    fn store(&mut self, output: PassOutput) -> DocumentReport {
        let document = output.report.document.clone();
        match output.cached {
            Some(cached) => {
                self.cache.insert(document, cached);
            }
            None => {
                self.cache.remove(&document);
            }
        }
        output.report
    }

    fn compute_pass(&self, document: &Path) -> PassOutput {
        let document = document.to_path_buf();

        if !self.translations_root.is_dir() {
            tracing::warn!(
                root = %self.translations_root.display(),
                "translations root not found, skipping"
            );
            return skip(document, SkipReason::NoTranslationsRoot);
        }

        let Some(identity) = document_identity(&self.translations_root, self.layout, &document)
        else {
            tracing::debug!(document = %document.display(), "not a translation document");
            return skip(document, SkipReason::NotATranslationDocument);
        };

        let text = match self.open_documents.get(&document) {
            Some(text) => text.clone(),
            None => match fs::read_to_string(&document) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(
                        document = %document.display(),
                        locale = %identity.locale,
                        error = %e,
                        "cannot read document"
                    );
                    let mut output = skip(document.clone(), SkipReason::Unusable);
                    output.report.locale = Some(identity.locale.clone());
                    output.report.warnings.push(LoadWarning {
                        file_path: document.to_string_lossy().to_string(),
                        locale: identity.locale,
                        error: e.to_string(),
                    });
                    return output;
                }
            },
        };

        let loaded = load_family(&FamilyRequest {
            root: &self.translations_root,
            layout: self.layout,
            document: &document,
            identity: &identity,
            current_text: Some(&text),
            policy: self.config.empty_values,
        });

        let locale = identity.locale;
        let locales: Vec<String> = loaded.family.locales().map(str::to_string).collect();
        if loaded.family.get(&locale).is_none() {
            return PassOutput {
                report: DocumentReport {
                    document,
                    locale: Some(locale),
                    locales,
                    annotations: Vec::new(),
                    warnings: loaded.warnings,
                    skipped: Some(SkipReason::Unusable),
                },
                cached: None,
            };
        }

        let result = reconcile(&locale, &loaded.family);
        let paths = anchor_paths(&result);
        let positions = KeyLocator::new(&text).locate_all(paths.iter().map(String::as_str));
        let mut annotations = build_annotations(&result, &positions);
        annotations.retain(|a| self.config.checks.contains(&a.rule));

        tracing::debug!(
            document = %document.display(),
            locale = %locale,
            locales = locales.len(),
            annotations = annotations.len(),
            "pass complete"
        );

        PassOutput {
            report: DocumentReport {
                document,
                locale: Some(locale.clone()),
                locales,
                annotations: annotations.clone(),
                warnings: loaded.warnings,
                skipped: None,
            },
            cached: Some(CachedPass {
                locale,
                family: loaded.family,
                positions,
                annotations,
            }),
        }
    }

    // ============================================================
    // Queries
    // ============================================================

    /// Annotations of the latest pass for `path`, if one is cached.
    pub fn annotations(&self, path: &Path) -> Option<&[Annotation]> {
        self.cache
            .get(&self.resolve(path))
            .map(|cached| cached.annotations.as_slice())
    }

    /// Hover text at `position`, served from the latest cached pass only.
    pub fn hover(&self, path: &Path, position: Position) -> Option<Hover> {
        let cached = self.cache.get(&self.resolve(path))?;
        let under_cursor: Vec<&Annotation> = cached
            .annotations
            .iter()
            .filter(|a| a.range.contains(position))
            .collect();
        let first = under_cursor.first()?;

        let key = key_at(&cached.positions, position)
            .filter(|p| under_cursor.iter().any(|a| a.key == p.path))
            .map(|p| p.path.clone())
            .unwrap_or_else(|| first.key.clone());
        let value = cached
            .family
            .get(&cached.locale)
            .and_then(|t| t.get(&key))
            .map(str::to_string);

        Some(Hover {
            key,
            range: first.range,
            contents: under_cursor
                .iter()
                .map(|a| a.message.as_str())
                .collect::<Vec<_>>()
                .join("\n\n"),
            value,
        })
    }

    /// Paths of the documents currently open, sorted.
    pub fn open_documents(&self) -> Vec<PathBuf> {
        let mut documents: Vec<PathBuf> = self.open_documents.keys().cloned().collect();
        documents.sort();
        documents
    }

    pub fn is_cached(&self, path: &Path) -> bool {
        self.cache.contains_key(&self.resolve(path))
    }

    // ============================================================
    // Invalidation hooks
    // ============================================================

    pub fn on_document_closed(&mut self, path: &Path) {
        let document = self.resolve(path);
        self.open_documents.remove(&document);
        self.cache.remove(&document);
    }

    /// Handle file-system notifications.
    ///
    /// Any change under the translations root (or to the config file) can
    /// affect every family, so the whole cache is dropped and the open
    /// documents are returned for the caller to refresh.
    pub fn on_files_changed(&mut self, changes: &[FileChange]) -> Vec<PathBuf> {
        let relevant = changes.iter().any(|change| {
            let path = self.resolve(&change.path);
            path.starts_with(&self.translations_root)
                || path.file_name().is_some_and(|n| n == CONFIG_FILE_NAME)
        });
        if !relevant {
            return Vec::new();
        }

        tracing::debug!(changes = changes.len(), "translation files changed");
        self.layout = resolve_layout(&self.translations_root, self.config.mode);
        self.cache.clear();
        self.open_documents()
    }

    /// Replace the configuration; drops the cache and re-resolves the layout.
    pub fn on_config_changed(&mut self, config: Config) -> Vec<PathBuf> {
        self.translations_root =
            absolutize(&self.project_root, Path::new(&config.translations_root));
        self.layout = resolve_layout(&self.translations_root, config.mode);
        self.config = config;
        self.cache.clear();
        self.open_documents()
    }
}

fn skip(document: PathBuf, reason: SkipReason) -> PassOutput {
    PassOutput {
        report: DocumentReport::skipped(document, reason),
        cached: None,
    }
}
