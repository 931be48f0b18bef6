//! Missing parent detection rule.
//!
//! Single-locale structural check: a nested key whose immediate parent path
//! is neither a key nor an object in the same translation.

use crate::core::{LocaleTranslation, parent_of};

/// Keys of `translation` whose parent path is absent, in key order.
pub fn check_missing_parents(translation: &LocaleTranslation) -> Vec<String> {
    translation
        .keys()
        .filter(|key| parent_of(key).is_some_and(|parent| !translation.has_path(parent)))
        .cloned()
        .collect()
}
