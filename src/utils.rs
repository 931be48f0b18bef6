//! Common utility functions shared across the codebase.

use std::{
    env,
    path::{Component, Path, PathBuf},
};

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding component. Does not touch the file system or follow symlinks.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use locdiff::utils::normalize_path;
///
/// assert_eq!(
///     normalize_path(Path::new("/p/./messages/../messages/en.json")),
///     PathBuf::from("/p/messages/en.json")
/// );
/// ```
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Resolve `path` against `base` when relative, then normalize.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&base.join(path))
    }
}

/// Resolve `path` against the working directory when relative.
///
/// Falls back to the normalized path as given if the working directory
/// cannot be read.
pub fn absolutize_from_cwd(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return normalize_path(path);
    }
    match env::current_dir() {
        Ok(cwd) => absolutize(&cwd, path),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read working directory");
            normalize_path(path)
        }
    }
}

/// Display `path` relative to `base` when possible.
pub fn display_relative(base: &Path, path: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
