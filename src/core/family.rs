//! Loading the translation family compared in one pass.

use std::path::Path;

use serde::Serialize;

use crate::core::{
    EmptyValues, TranslationFamily,
    error::TranslationError,
    layout::{DocumentIdentity, Layout, discover_locales, equivalent_file},
    parsers::json::{parse_translation, read_translation},
};

/// A locale file that was left out of the family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadWarning {
    pub file_path: String,
    pub locale: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct FamilyLoad {
    pub family: TranslationFamily,
    pub warnings: Vec<LoadWarning>,
}

/// Inputs for loading the family of one document.
pub struct FamilyRequest<'a> {
    pub root: &'a Path,
    pub layout: Layout,
    pub document: &'a Path,
    pub identity: &'a DocumentIdentity,
    /// In-memory text of the document, used instead of its on-disk content.
    pub current_text: Option<&'a str>,
    pub policy: EmptyValues,
}

/// Load the current document's locale plus every other locale's equivalent file.
///
/// Unreadable or malformed files are skipped with a warning. Locales without
/// an equivalent file contribute nothing.
pub fn load_family(request: &FamilyRequest<'_>) -> FamilyLoad {
    let FamilyRequest {
        root,
        layout,
        document,
        identity,
        current_text,
        policy,
    } = *request;
    let mut result = FamilyLoad::default();

    let mut locales = discover_locales(root, layout).unwrap_or_else(|e| {
        tracing::warn!(path = %root.display(), error = %e, "cannot list locales");
        Vec::new()
    });
    if !locales.contains(&identity.locale) {
        locales.push(identity.locale.clone());
        locales.sort();
    }

    for locale in locales {
        let loaded = if locale == identity.locale {
            match current_text {
                Some(text) => parse_translation(document, &locale, text, policy),
                None => read_translation(document, &locale, policy),
            }
        } else {
            let path = equivalent_file(root, layout, &locale, &identity.relative_path);
            if !path.is_file() {
                tracing::debug!(
                    path = %path.display(),
                    locale = %locale,
                    "no equivalent file for locale"
                );
                continue;
            }
            read_translation(&path, &locale, policy)
        };

        match loaded {
            Ok(translation) => result.family.push(translation),
            Err(e) => result.warnings.push(skip_locale(&locale, e)),
        }
    }

    result
}

fn skip_locale(locale: &str, error: TranslationError) -> LoadWarning {
    tracing::warn!(
        path = %error.path().display(),
        locale = %locale,
        error = %error,
        "skipping locale file"
    );
    LoadWarning {
        file_path: error.path().to_string_lossy().to_string(),
        locale: locale.to_string(),
        error: error.to_string(),
    }
}
