use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::{
    core::{EmptyValues, layout::LayoutMode},
    issues::Rule,
};

pub const CONFIG_FILE_NAME: &str = ".locdiffrc.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_translations_root", alias = "messagesRoot")]
    pub translations_root: String,
    #[serde(default)]
    pub mode: LayoutMode,
    #[serde(default)]
    pub empty_values: EmptyValues,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "Rule::all")]
    pub checks: Vec<Rule>,
}

fn default_translations_root() -> String {
    "./messages".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translations_root: default_translations_root(),
            mode: LayoutMode::default(),
            empty_values: EmptyValues::default(),
            ignores: Vec::new(),
            checks: Rule::all(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        Ok(())
    }

    /// True if `path` (relative to the project root) matches an ignore pattern.
    pub fn is_ignored(&self, relative_path: &Path) -> bool {
        self.ignores.iter().any(|pattern| {
            Pattern::new(pattern).is_ok_and(|p| p.matches_path(relative_path))
        })
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory paths in the config are relative to: the config file's
    /// directory, or the start directory when using defaults.
    pub project_root: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let project_root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                project_root,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            project_root: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
