//! Reconciliation engine: runs every rule for the current locale of a family.

use indexmap::{IndexMap, IndexSet};

use crate::{
    core::TranslationFamily,
    rules::{
        missing_nested::{MissingNestedKeys, check_missing_nested_keys},
        missing_parent::check_missing_parents,
        missing_translation::{MissingTranslations, check_missing_translations},
    },
};

/// Everything one pass found for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationResult {
    pub current_locale: String,
    /// Key → locales on the other side of the gap.
    pub missing_translations_by_key: IndexMap<String, IndexSet<String>>,
    /// Keys of `missing_translations_by_key` the current locale does not have.
    pub absent_from_current: IndexSet<String>,
    /// Namespace → locale → nested paths that locale has and the current one lacks.
    pub missing_nested_keys_by_parent: MissingNestedKeys,
    /// Current-locale keys whose parent path is absent.
    pub missing_parent_findings: Vec<String>,
}

impl ReconciliationResult {
    pub fn is_empty(&self) -> bool {
        self.missing_translations_by_key.is_empty()
            && self.missing_nested_keys_by_parent.is_empty()
            && self.missing_parent_findings.is_empty()
    }
}

/// Reconcile `current_locale` against the rest of the family.
///
/// Returns an empty result when the family has no translation for
/// `current_locale` (e.g., its file failed to parse).
pub fn reconcile(current_locale: &str, family: &TranslationFamily) -> ReconciliationResult {
    let Some(current) = family.get(current_locale) else {
        tracing::debug!(locale = current_locale, "current locale not in family");
        return ReconciliationResult {
            current_locale: current_locale.to_string(),
            ..Default::default()
        };
    };

    let MissingTranslations {
        by_key,
        absent_from_current,
    } = check_missing_translations(current, family);

    ReconciliationResult {
        current_locale: current_locale.to_string(),
        missing_translations_by_key: by_key,
        absent_from_current,
        missing_nested_keys_by_parent: check_missing_nested_keys(current, family),
        missing_parent_findings: check_missing_parents(current),
    }
}
