use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    core::layout::Layout,
    session::{DocumentReport, FileChange, FileChangeKind, Hover},
};

// ============================================================
// Parameters
// ============================================================

/// Parameters for tools that only need the project.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectParams {
    /// Absolute path of the project root (where .locdiffrc.json lives)
    pub project_root_path: String,
}

pub type GetConfigParams = ProjectParams;
pub type GetLocalesParams = ProjectParams;
pub type CheckAllParams = ProjectParams;
pub type ReloadConfigParams = ProjectParams;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckDocumentParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Translation document, absolute or relative to the project root
    pub file_path: String,
    /// Unsaved editor text of the document. When set, the document is
    /// treated as open and this text is used instead of the file content.
    pub text: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HoverParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Translation document, absolute or relative to the project root
    pub file_path: String,
    /// Zero-based line
    pub line: u32,
    /// Zero-based character offset within the line
    pub character: u32,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CloseDocumentParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Translation document, absolute or relative to the project root
    pub file_path: String,
}

#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Created,
    Modified,
    Deleted,
}

impl From<ChangeKind> for FileChangeKind {
    fn from(kind: ChangeKind) -> Self {
        match kind {
            ChangeKind::Created => FileChangeKind::Created,
            ChangeKind::Modified => FileChangeKind::Modified,
            ChangeKind::Deleted => FileChangeKind::Deleted,
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileChangeDto {
    /// Changed path, absolute or relative to the project root
    pub path: String,
    pub kind: ChangeKind,
}

impl From<&FileChangeDto> for FileChange {
    fn from(change: &FileChangeDto) -> Self {
        FileChange::new(&change.path, change.kind.into())
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilesChangedParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    pub changes: Vec<FileChangeDto>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: Config,
}

// ============================================================
// Locales Types (get_locales)
// ============================================================

/// Result of get_locales operation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalesResult {
    pub translations_root: String,
    pub layout: Layout,
    pub locales: Vec<LocaleInfo>,
}

/// Information about a single locale
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleInfo {
    pub locale: String,
    pub file_paths: Vec<String>,
}

// ============================================================
// Pass Types
// ============================================================

/// Result of check_all
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAllResult {
    pub documents_checked: usize,
    pub warning_count: usize,
    /// Only documents with annotations or load warnings.
    pub documents: Vec<DocumentReport>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverResult {
    pub hover: Option<Hover>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseDocumentResult {
    pub closed: bool,
}

/// Result of tools that invalidate the cache.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResult {
    /// Fresh passes for every open document.
    pub refreshed: Vec<DocumentReport>,
}
