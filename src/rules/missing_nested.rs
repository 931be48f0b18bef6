//! Missing nested key detection rule.
//!
//! Groups the nested keys other locales have, but the current locale lacks,
//! under their first path segment (the namespace).

use indexmap::{IndexMap, IndexSet};

use crate::core::{LocaleTranslation, TranslationFamily, namespace_of};

/// Namespace → locale → full paths missing from the current locale.
pub type MissingNestedKeys = IndexMap<String, IndexMap<String, IndexSet<String>>>;

/// Check for nested keys missing from the current locale, per namespace.
///
/// Only keys with at least two segments take part. Grouping always uses the
/// first segment, never intermediate ancestors: `a.b.c` and `a.d` both land
/// under `a`. Locales with nothing missing are not recorded.
pub fn check_missing_nested_keys(
    current: &LocaleTranslation,
    family: &TranslationFamily,
) -> MissingNestedKeys {
    let mut result = MissingNestedKeys::new();

    for other in family.iter().filter(|t| t.locale != current.locale) {
        for key in other
            .keys()
            .filter(|key| key.contains('.') && !current.contains_key(key))
        {
            result
                .entry(namespace_of(key).to_string())
                .or_default()
                .entry(other.locale.clone())
                .or_default()
                .insert(key.clone());
        }
    }

    result
}
