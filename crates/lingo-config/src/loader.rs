//! Configuration loading with environment variable overrides.

use crate::schema::LangConfig;
use lingo_common::{split_list, LingoError, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Overrides `default_lang`
pub const ENV_DEFAULT_LANG: &str = "LINGO_DEFAULT_LANG";
/// Overrides `detect_var`
pub const ENV_DETECT_VAR: &str = "LINGO_DETECT_VAR";
/// Overrides `cookie_var`
pub const ENV_COOKIE_VAR: &str = "LINGO_COOKIE_VAR";
/// Overrides `allow_lang_list` (comma separated)
pub const ENV_ALLOW_LANG_LIST: &str = "LINGO_ALLOW_LANG_LIST";

/// Loads a [`LangConfig`] from a TOML, YAML or JSON file.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a loader for `path`; the format follows the extension.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Configuration file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file, applies environment overrides, resolves relative
    /// paths against the file's directory and validates the result.
    pub fn load(&self) -> Result<LangConfig> {
        let mut config = self.read()?;
        Self::apply_env_overrides(&mut config);
        self.resolve_paths(&mut config);
        config.validate()?;

        info!(
            path = %self.path.display(),
            default_lang = %config.default_lang,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Parses the file as is, without overrides or validation.
    pub fn read(&self) -> Result<LangConfig> {
        let content = fs::read_to_string(&self.path)?;
        let ext = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("toml") => toml::from_str(&content).map_err(|e| LingoError::parse(&self.path, e)),
            Some("yaml" | "yml") => {
                serde_yaml::from_str(&content).map_err(|e| LingoError::parse(&self.path, e))
            }
            Some("json") => {
                serde_json::from_str(&content).map_err(|e| LingoError::parse(&self.path, e))
            }
            _ => Err(LingoError::UnsupportedFormat {
                path: self.path.clone(),
            }),
        }
    }

    /// Default configuration with environment overrides, validated.
    pub fn from_env() -> Result<LangConfig> {
        let mut config = LangConfig::default();
        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Applies `LINGO_*` environment variables.
    pub fn apply_env_overrides(config: &mut LangConfig) {
        Self::apply_overrides_from(config, |name| env::var(name).ok());
    }

    /// Applies overrides from any variable source.
    pub fn apply_overrides_from<F>(config: &mut LangConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(lang) = lookup(ENV_DEFAULT_LANG) {
            debug!(var = ENV_DEFAULT_LANG, value = %lang, "override");
            config.default_lang = lang;
        }

        if let Some(var) = lookup(ENV_DETECT_VAR) {
            debug!(var = ENV_DETECT_VAR, value = %var, "override");
            config.detect_var = var;
        }

        if let Some(var) = lookup(ENV_COOKIE_VAR) {
            debug!(var = ENV_COOKIE_VAR, value = %var, "override");
            config.cookie_var = var;
        }

        if let Some(list) = lookup(ENV_ALLOW_LANG_LIST) {
            debug!(var = ENV_ALLOW_LANG_LIST, value = %list, "override");
            config.allow_lang_list = split_list(&list);
        }
    }

    fn resolve_paths(&self, config: &mut LangConfig) {
        let Some(base) = self.path.parent() else {
            return;
        };

        if let Some(dir) = config.lang_dir.as_mut() {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }

        for files in config.extend_list.values_mut() {
            for file in files.iter_mut().filter(|f| f.is_relative()) {
                *file = base.join(&*file);
            }
        }
    }
}
