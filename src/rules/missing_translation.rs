//! Missing translation detection rule.
//!
//! Compares the current locale's keys with every other locale in both
//! directions. Each key is mapped to the locales on the other side of the gap.

use indexmap::{IndexMap, IndexSet};

use crate::core::{LocaleTranslation, TranslationFamily};

/// Result of [`check_missing_translations`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingTranslations {
    /// Key → locales on the other side of the gap, in family order.
    pub by_key: IndexMap<String, IndexSet<String>>,
    /// Keys that some other locale has but the current locale lacks.
    pub absent_from_current: IndexSet<String>,
}

/// Check for keys missing between the current locale and the others.
///
/// For every other locale `L`:
/// - a key of the current locale that `L` lacks is recorded with `L`;
/// - a key of `L` that the current locale lacks is recorded with `L` too,
///   and remembered in `absent_from_current`.
///
/// # Arguments
/// * `current` - Translation of the document being checked
/// * `family` - All translations compared in this pass (may include `current`)
pub fn check_missing_translations(
    current: &LocaleTranslation,
    family: &TranslationFamily,
) -> MissingTranslations {
    let mut result = MissingTranslations::default();

    for other in family.iter().filter(|t| t.locale != current.locale) {
        for key in current.keys().filter(|key| !other.contains_key(key)) {
            result
                .by_key
                .entry(key.clone())
                .or_default()
                .insert(other.locale.clone());
        }

        for key in other.keys().filter(|key| !current.contains_key(key)) {
            result
                .by_key
                .entry(key.clone())
                .or_default()
                .insert(other.locale.clone());
            result.absent_from_current.insert(key.clone());
        }
    }

    result
}
