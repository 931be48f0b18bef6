//! Issue types for translation reconciliation results.
//!
//! Each issue is self-contained: it knows which key anchors it in the
//! current document and how to describe itself. The report builder turns
//! issues into positioned [`Annotation`](crate::report::Annotation)s.

use clap::ValueEnum;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue. Every reconciliation finding is a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    MissingNestedKeys,
    MissingTranslation,
    MissingParent,
}

impl Rule {
    pub fn all() -> Vec<Rule> {
        vec![
            Rule::MissingNestedKeys,
            Rule::MissingTranslation,
            Rule::MissingParent,
        ]
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingNestedKeys => write!(f, "missing-nested-keys"),
            Rule::MissingTranslation => write!(f, "missing-translation"),
            Rule::MissingParent => write!(f, "missing-parent"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Nested keys that other locales have under a namespace the current locale lacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingNestedKeysIssue {
    /// First path segment shared by the missing keys.
    pub namespace: String,
    /// Per locale, the full paths the current locale is missing.
    pub missing: Vec<(String, Vec<String>)>,
}

/// A key present on only one side of one or more locale pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslationIssue {
    pub key: String,
    /// Locale of the document being checked.
    pub current_locale: String,
    /// Locales on the other side of the gap.
    pub locales: Vec<String>,
    /// False when the key exists only in other locales.
    pub in_current: bool,
}

/// A key whose immediate parent path is absent from its own locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingParentIssue {
    pub key: String,
    pub parent: String,
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingNestedKeys(MissingNestedKeysIssue),
    MissingTranslation(MissingTranslationIssue),
    MissingParent(MissingParentIssue),
}

// ============================================================
// Report Trait
// ============================================================

/// Trait for issues that can be anchored and rendered.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Dotted path whose key token anchors the issue in the current document.
    fn anchor(&self) -> &str;

    /// Human-readable message.
    fn message(&self) -> String;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Severity level.
    fn report_severity(&self) -> Severity {
        Severity::Warning
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MissingNestedKeysIssue {
    fn anchor(&self) -> &str {
        &self.namespace
    }

    fn message(&self) -> String {
        let per_locale: Vec<String> = self
            .missing
            .iter()
            .map(|(locale, paths)| format!("{}: {}", locale, paths.join(", ")))
            .collect();
        format!(
            "Namespace \"{}\" is missing keys found in other locales: {}",
            self.namespace,
            per_locale.join("; ")
        )
    }

    fn report_rule(&self) -> Rule {
        Rule::MissingNestedKeys
    }
}

impl Report for MissingTranslationIssue {
    fn anchor(&self) -> &str {
        &self.key
    }

    fn message(&self) -> String {
        if self.in_current {
            format!(
                "Missing translations for \"{}\" in: {}",
                self.key,
                self.locales.join(", ")
            )
        } else {
            format!(
                "\"{}\" exists in {} but is missing from {}",
                self.key,
                self.locales.join(", "),
                self.current_locale
            )
        }
    }

    fn report_rule(&self) -> Rule {
        Rule::MissingTranslation
    }
}

impl Report for MissingParentIssue {
    fn anchor(&self) -> &str {
        &self.key
    }

    fn message(&self) -> String {
        format!(
            "Parent key \"{}\" is missing for \"{}\"",
            self.parent, self.key
        )
    }

    fn report_rule(&self) -> Rule {
        Rule::MissingParent
    }
}
