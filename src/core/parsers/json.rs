use std::{fs, path::Path};

use indexmap::IndexMap;
use serde_json::Value;

use crate::core::{
    EmptyValues, FlatKey, LocaleTranslation, MessageTree,
    error::{Result, TranslationError},
};

/// Read, parse and flatten one locale file.
pub fn read_translation(path: &Path, locale: &str, policy: EmptyValues) -> Result<LocaleTranslation> {
    let content = fs::read_to_string(path).map_err(|source| TranslationError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_translation(path, locale, &content, policy)
}

/// Parse and flatten locale file content that is already in memory
/// (e.g., an unsaved editor buffer).
pub fn parse_translation(
    path: &Path,
    locale: &str,
    content: &str,
    policy: EmptyValues,
) -> Result<LocaleTranslation> {
    let tree = parse_message_tree(path, content)?;
    let mut translation = LocaleTranslation::from_keys(locale, path, flatten(&tree, policy));
    translation.nodes = node_paths(&tree).into_iter().collect();
    Ok(translation)
}

/// Parse JSON text into a [`MessageTree`].
///
/// The root must be an object. Arrays are rejected as malformed; numbers,
/// booleans and null are not leaves and are dropped.
pub fn parse_message_tree(path: &Path, content: &str) -> Result<MessageTree> {
    let json: Value = serde_json::from_str(content).map_err(|source| TranslationError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if !json.is_object() {
        return Err(TranslationError::MalformedTranslationTree {
            path: path.to_path_buf(),
            key: String::new(),
            reason: "root must be an object".to_string(),
        });
    }

    Ok(build_tree(json, "", path)?.unwrap_or_else(|| MessageTree::Node(IndexMap::new())))
}

fn build_tree(value: Value, key_path: &str, file: &Path) -> Result<Option<MessageTree>> {
    match value {
        Value::Object(map) => {
            let mut children = IndexMap::with_capacity(map.len());
            for (key, val) in map {
                let child_path = join_path(key_path, &key);
                if let Some(child) = build_tree(val, &child_path, file)? {
                    children.insert(key, child);
                }
            }
            Ok(Some(MessageTree::Node(children)))
        }
        Value::String(s) => Ok(Some(MessageTree::Leaf(s))),
        Value::Array(_) => Err(TranslationError::MalformedTranslationTree {
            path: file.to_path_buf(),
            key: key_path.to_string(),
            reason: "array values are not supported".to_string(),
        }),
        Value::Number(_) | Value::Bool(_) | Value::Null => {
            tracing::debug!(path = %file.display(), key = key_path, "skipping non-string value");
            Ok(None)
        }
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Flatten a message tree into dotted leaf paths, depth-first in document order.
///
/// Mapping nodes never produce a key of their own. Under
/// [`EmptyValues::Missing`] leaves whose trimmed value is empty are skipped.
pub fn flatten(tree: &MessageTree, policy: EmptyValues) -> Vec<FlatKey> {
    flatten_node(tree, "", policy)
}

fn flatten_node(tree: &MessageTree, prefix: &str, policy: EmptyValues) -> Vec<FlatKey> {
    match tree {
        MessageTree::Leaf(value) if !prefix.is_empty() && policy.keeps(value) => {
            vec![FlatKey::new(prefix, value.clone())]
        }
        MessageTree::Leaf(_) => Vec::new(),
        MessageTree::Node(children) => children
            .iter()
            .flat_map(|(key, child)| flatten_node(child, &join_path(prefix, key), policy))
            .collect(),
    }
}

/// Dotted paths of every mapping node below the root, in document order.
pub fn node_paths(tree: &MessageTree) -> Vec<String> {
    fn walk(tree: &MessageTree, prefix: &str) -> Vec<String> {
        match tree {
            MessageTree::Leaf(_) => Vec::new(),
            MessageTree::Node(children) => children
                .iter()
                .filter(|(_, child)| matches!(child, MessageTree::Node(_)))
                .flat_map(|(key, child)| {
                    let path = join_path(prefix, key);
                    let mut paths = walk(child, &path);
                    paths.insert(0, path);
                    paths
                })
                .collect(),
        }
    }
    walk(tree, "")
}

/// Extracts locale from filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.json" -> Some("zh-CN")
/// - "/path/to/messages/ja.json" -> Some("ja")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// True for files with a `.json` extension.
pub fn is_json_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}
