use crate::{core::LoadWarning, report::Annotation, session::Hover};

/// Annotations of one document, ready for printing.
#[derive(Debug)]
pub struct DocumentOutput {
    /// Path as shown to the user (relative to the working directory when possible).
    pub path: String,
    /// Document text, used to print the annotated source line.
    pub source: Option<String>,
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Default)]
pub struct CheckSummary {
    /// Documents with at least one annotation, in check order.
    pub documents: Vec<DocumentOutput>,
    pub documents_checked: usize,
    /// Locale files left out of at least one pass, one entry per file.
    pub load_warnings: Vec<LoadWarning>,
    /// Requested files that are not translation documents of the root.
    pub not_translation_documents: Vec<String>,
}

#[derive(Debug)]
pub struct HoverSummary {
    /// `path:line:col`, 1-based.
    pub location: String,
    pub hover: Option<Hover>,
    pub load_warnings: Vec<LoadWarning>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Hover(HoverSummary),
    Init(InitSummary),
    /// Long-running; every round is printed as it completes.
    Watch,
}

/// Result of running locdiff commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when warning_count > 0.
    /// If false, always exit 0 (used for informational commands).
    pub exit_on_warnings: bool,
}
