//! Error types for loading translation files.
//!
//! None of these abort a reconciliation pass: the loader turns them into
//! [`LoadWarning`](crate::core::LoadWarning)s and drops the affected locale.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed as JSON but is not a tree of string leaves
    /// (root is not an object, or an array appears somewhere).
    #[error("malformed translation tree in {} at \"{key}\": {reason}", path.display())]
    MalformedTranslationTree {
        path: PathBuf,
        key: String,
        reason: String,
    },
}

impl TranslationError {
    pub fn path(&self) -> &PathBuf {
        match self {
            TranslationError::Read { path, .. }
            | TranslationError::Parse { path, .. }
            | TranslationError::MalformedTranslationTree { path, .. } => path,
        }
    }
}

pub type Result<T, E = TranslationError> = std::result::Result<T, E>;
