use std::{
    fmt,
    path::{Path, PathBuf},
};

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// A parsed translation document.
///
/// Either a string leaf or an ordered mapping from key segment to subtree.
/// Mapping order is the order keys appear in the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageTree {
    Leaf(String),
    Node(IndexMap<String, MessageTree>),
}

impl MessageTree {
    /// Walk a dotted path through the tree.
    pub fn get_path(&self, path: &str) -> Option<&MessageTree> {
        path.split('.').try_fold(self, |node, segment| match node {
            MessageTree::Node(children) => children.get(segment),
            MessageTree::Leaf(_) => None,
        })
    }

    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            MessageTree::Leaf(value) => Some(value),
            MessageTree::Node(_) => None,
        }
    }
}

/// How leaves holding an empty (or whitespace-only) string are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyValues {
    /// Empty leaves count as missing translations.
    #[default]
    Missing,
    /// Empty leaves count as present.
    Present,
}

impl EmptyValues {
    pub fn keeps(self, value: &str) -> bool {
        match self {
            EmptyValues::Missing => !value.trim().is_empty(),
            EmptyValues::Present => true,
        }
    }
}

impl fmt::Display for EmptyValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyValues::Missing => write!(f, "missing"),
            EmptyValues::Present => write!(f, "present"),
        }
    }
}

/// A leaf of a message tree addressed by its dotted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatKey {
    /// Dotted path (e.g., "Common.submit").
    pub path: String,
    /// The leaf's string value.
    pub value: String,
}

impl FlatKey {
    pub fn new(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
        }
    }
}

/// First segment of a dotted path.
pub fn namespace_of(path: &str) -> &str {
    path.split('.').next().unwrap_or(path)
}

/// Path of the immediate parent, or `None` for single-segment keys.
pub fn parent_of(path: &str) -> Option<&str> {
    path.rsplit_once('.').map(|(parent, _)| parent)
}

/// Last segment of a dotted path.
pub fn leaf_segment(path: &str) -> &str {
    path.rsplit_once('.').map_or(path, |(_, leaf)| leaf)
}

/// Flattened messages of one locale (one file, in folder mode).
///
/// Built once per pass and never patched; a file change rebuilds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTranslation {
    /// Locale code (e.g., "en", "zh-CN").
    pub locale: String,
    /// File the translation was read from.
    pub file_path: PathBuf,
    /// Present keys in flattening order.
    pub entries: IndexMap<String, String>,
    /// Dotted paths of the mapping nodes of the source tree.
    pub nodes: IndexSet<String>,
}

impl LocaleTranslation {
    pub fn new(locale: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        Self {
            locale: locale.into(),
            file_path: file_path.into(),
            entries: IndexMap::new(),
            nodes: IndexSet::new(),
        }
    }

    /// Build from flattened keys, with no node information.
    pub fn from_keys(
        locale: impl Into<String>,
        file_path: impl Into<PathBuf>,
        keys: impl IntoIterator<Item = FlatKey>,
    ) -> Self {
        let mut translation = Self::new(locale, file_path);
        translation.entries = keys.into_iter().map(|k| (k.path, k.value)).collect();
        translation
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// True if `path` is a present key or a mapping node of the tree.
    pub fn has_path(&self, path: &str) -> bool {
        self.entries.contains_key(path) || self.nodes.contains(path)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All locale translations compared together in one pass, in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationFamily {
    translations: Vec<LocaleTranslation>,
}

impl TranslationFamily {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a locale. A second translation for the same locale replaces the first.
    pub fn push(&mut self, translation: LocaleTranslation) {
        match self
            .translations
            .iter_mut()
            .find(|t| t.locale == translation.locale)
        {
            Some(existing) => *existing = translation,
            None => self.translations.push(translation),
        }
    }

    pub fn get(&self, locale: &str) -> Option<&LocaleTranslation> {
        self.translations.iter().find(|t| t.locale == locale)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocaleTranslation> {
        self.translations.iter()
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.translations.iter().map(|t| t.locale.as_str())
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

impl FromIterator<LocaleTranslation> for TranslationFamily {
    fn from_iter<T: IntoIterator<Item = LocaleTranslation>>(iter: T) -> Self {
        let mut family = Self::new();
        for translation in iter {
            family.push(translation);
        }
        family
    }
}
