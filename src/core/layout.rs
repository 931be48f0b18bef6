//! Translation directory layout (mode) resolution.
//!
//! Two layouts are supported:
//!
//! - **single-file**: `<root>/<locale>.json`, one document per locale
//! - **folder**: `<root>/<locale>/<relative-path>.json`, several namespace
//!   files per locale, compared only with the file at the same relative path
//!   in the other locales

use std::{
    fmt, fs, io,
    path::{Component, Path, PathBuf},
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::core::parsers::json::{extract_locale, is_json_file};

/// Layout requested by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    /// Inspect the translations root.
    #[default]
    Auto,
    /// One `<locale>.json` per locale.
    SingleFile,
    /// One directory per locale.
    Folder,
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutMode::Auto => write!(f, "auto"),
            LayoutMode::SingleFile => write!(f, "single-file"),
            LayoutMode::Folder => write!(f, "folder"),
        }
    }
}

/// Resolved layout of a translations root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    SingleFile,
    Folder,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::SingleFile => write!(f, "single-file"),
            Layout::Folder => write!(f, "folder"),
        }
    }
}

/// Decide the layout of `root`.
///
/// An explicit mode always wins. In auto mode any subdirectory selects
/// folder mode, even when loose `.json` files sit next to it; everything
/// else, including an unreadable root, falls back to single-file mode.
pub fn resolve_layout(root: &Path, mode: LayoutMode) -> Layout {
    match mode {
        LayoutMode::SingleFile => return Layout::SingleFile,
        LayoutMode::Folder => return Layout::Folder,
        LayoutMode::Auto => {}
    }

    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(
                path = %root.display(),
                error = %e,
                "cannot read translations root, assuming single-file layout"
            );
            return Layout::SingleFile;
        }
    };

    let mut has_json = false;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            return Layout::Folder;
        }
        has_json |= is_json_file(&path);
    }

    if !has_json {
        tracing::debug!(path = %root.display(), "no translation files found in root");
    }
    Layout::SingleFile
}

/// Which locale a document belongs to, and its path inside the locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentIdentity {
    pub locale: String,
    /// `<locale>.json` in single-file mode, the path below the locale
    /// directory in folder mode.
    pub relative_path: PathBuf,
}

/// Map a document path to its locale, or `None` if it is not a
/// translation document of this root.
pub fn document_identity(root: &Path, layout: Layout, document: &Path) -> Option<DocumentIdentity> {
    if !is_json_file(document) {
        return None;
    }
    let relative = document.strip_prefix(root).ok()?;
    let mut components = relative.components();

    match layout {
        Layout::SingleFile => {
            let Some(Component::Normal(file_name)) = components.next() else {
                return None;
            };
            if components.next().is_some() {
                return None;
            }
            Some(DocumentIdentity {
                locale: extract_locale(file_name)?,
                relative_path: PathBuf::from(file_name),
            })
        }
        Layout::Folder => {
            let Some(Component::Normal(locale)) = components.next() else {
                return None;
            };
            let rest = components.as_path();
            if rest.as_os_str().is_empty() {
                return None;
            }
            Some(DocumentIdentity {
                locale: locale.to_str()?.to_string(),
                relative_path: rest.to_path_buf(),
            })
        }
    }
}

/// Path of `locale`'s copy of the document at `relative_path`.
pub fn equivalent_file(root: &Path, layout: Layout, locale: &str, relative_path: &Path) -> PathBuf {
    match layout {
        Layout::SingleFile => root.join(format!("{}.json", locale)),
        Layout::Folder => root.join(locale).join(relative_path),
    }
}

/// Locales present under `root`, sorted by name.
///
/// Single-file mode lists `<locale>.json` files, folder mode lists
/// non-hidden subdirectories.
pub fn discover_locales(root: &Path, layout: Layout) -> io::Result<Vec<String>> {
    let mut locales = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        let locale = match layout {
            Layout::SingleFile if path.is_file() && is_json_file(&path) => extract_locale(&path),
            Layout::Folder if path.is_dir() => path
                .file_name()
                .and_then(|n| n.to_str())
                .filter(|n| !n.starts_with('.'))
                .map(str::to_string),
            _ => None,
        };
        locales.extend(locale);
    }
    locales.sort();
    Ok(locales)
}

/// Every translation document under `root`, sorted by path.
pub fn translation_documents(root: &Path, layout: Layout) -> io::Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    match layout {
        Layout::SingleFile => {
            for locale in discover_locales(root, layout)? {
                documents.push(root.join(format!("{}.json", locale)));
            }
        }
        Layout::Folder => {
            for locale in discover_locales(root, layout)? {
                for entry in WalkDir::new(root.join(&locale)).sort_by_file_name() {
                    let entry = entry.map_err(io::Error::other)?;
                    if entry.file_type().is_file() && is_json_file(entry.path()) {
                        documents.push(entry.into_path());
                    }
                }
            }
        }
    }
    Ok(documents)
}
