//! Resource file loading.
//!
//! A resource file is anything that evaluates to a flat mapping from message
//! key to string. [`FileResourceLoader`] reads JSON, TOML and YAML files,
//! picking the parser from the extension. Anything it cannot turn into a
//! mapping is reported as `None`, never as an error.

use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Source of key/value pairs for [`ResourceStore::load`](crate::ResourceStore::load).
pub trait ResourceLoader: fmt::Debug + Send + Sync {
    /// Reads `path` into key/value pairs in file order.
    ///
    /// Returns `None` when the path is not a readable resource or does not
    /// evaluate to a mapping.
    fn read(&self, path: &Path) -> Option<Vec<(String, String)>>;
}

/// Supported resource file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceFormat {
    /// `.json`
    Json,
    /// `.toml`
    Toml,
    /// `.yaml` / `.yml`
    Yaml,
}

impl ResourceFormat {
    /// All formats, in the order locale packs are probed.
    pub const ALL: [Self; 3] = [Self::Json, Self::Toml, Self::Yaml];

    /// Detect the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// File extensions recognised for this format
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Json => &["json"],
            Self::Toml => &["toml"],
            Self::Yaml => &["yaml", "yml"],
        }
    }

    /// Parse `content` into key/value pairs.
    ///
    /// Strings are kept as is, numbers and booleans are stringified, and
    /// nulls, arrays and nested mappings are dropped. A top level that is
    /// not a mapping is an error.
    pub fn parse(self, content: &str) -> Result<Vec<(String, String)>, String> {
        match self {
            Self::Json => parse_json(content),
            Self::Toml => parse_toml(content),
            Self::Yaml => parse_yaml(content),
        }
    }
}

impl fmt::Display for ResourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extensions()[0])
    }
}

fn parse_json(content: &str) -> Result<Vec<(String, String)>, String> {
    let value: serde_json::Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    let serde_json::Value::Object(map) = value else {
        return Err("top level is not an object".to_string());
    };

    Ok(map
        .into_iter()
        .filter_map(|(key, value)| {
            let text = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((key, text))
        })
        .collect())
}

fn parse_toml(content: &str) -> Result<Vec<(String, String)>, String> {
    let table: toml::Table = content.parse().map_err(|e: toml::de::Error| e.to_string())?;

    Ok(table
        .into_iter()
        .filter_map(|(key, value)| {
            let text = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                toml::Value::Datetime(d) => d.to_string(),
                toml::Value::Array(_) | toml::Value::Table(_) => return None,
            };
            Some((key, text))
        })
        .collect())
}

fn parse_yaml(content: &str) -> Result<Vec<(String, String)>, String> {
    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
    let serde_yaml::Value::Mapping(map) = value else {
        return Err("top level is not a mapping".to_string());
    };

    Ok(map
        .into_iter()
        .filter_map(|(key, value)| Some((yaml_scalar(key)?, yaml_scalar(value)?)))
        .collect())
}

fn yaml_scalar(value: serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Tagged(tagged) => yaml_scalar(tagged.value),
        _ => None,
    }
}

/// Reads resource files from the local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileResourceLoader;

impl ResourceLoader for FileResourceLoader {
    fn read(&self, path: &Path) -> Option<Vec<(String, String)>> {
        if !path.is_file() {
            debug!(path = %path.display(), "resource file not found, skipping");
            return None;
        }

        let Some(format) = ResourceFormat::from_path(path) else {
            debug!(path = %path.display(), "unrecognised resource extension, skipping");
            return None;
        };

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read resource file");
                return None;
            }
        };

        match format.parse(&content) {
            Ok(entries) => Some(entries),
            Err(message) => {
                warn!(path = %path.display(), %format, error = %message, "ignoring malformed resource file");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_common::test_utils::{create_temp_dir, lang_fixtures, write_fixture};
    use std::collections::HashMap;

    fn as_map(entries: Vec<(String, String)>) -> HashMap<String, String> {
        entries.into_iter().collect()
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ResourceFormat::from_path(Path::new("en.json")),
            Some(ResourceFormat::Json)
        );
        assert_eq!(
            ResourceFormat::from_path(Path::new("zh-cn.TOML")),
            Some(ResourceFormat::Toml)
        );
        assert_eq!(
            ResourceFormat::from_path(Path::new("de.yml")),
            Some(ResourceFormat::Yaml)
        );
        assert_eq!(ResourceFormat::from_path(Path::new("en.php")), None);
        assert_eq!(ResourceFormat::from_path(Path::new("README")), None);
    }

    #[test]
    fn test_parse_json_scalars_only() {
        let map = as_map(ResourceFormat::Json.parse(lang_fixtures::en_us_json()).unwrap());
        assert_eq!(map["Hello"], "Hello!");
        assert_eq!(map["enabled"], "true");
        assert_eq!(map["retries"], "3");
        assert!(!map.contains_key("nested"));
    }

    #[test]
    fn test_parse_toml() {
        let map = as_map(ResourceFormat::Toml.parse(lang_fixtures::zh_cn_toml()).unwrap());
        assert_eq!(map["hello"], "你好！");
        assert_eq!(map["greet2"], "你好，{:name}！");
    }

    #[test]
    fn test_parse_yaml() {
        let map = as_map(ResourceFormat::Yaml.parse(lang_fixtures::de_yaml()).unwrap());
        assert_eq!(map["hello"], "Hallo!");
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_parse_keeps_file_order() {
        let keys = |entries: Vec<(String, String)>| -> Vec<String> {
            entries.into_iter().map(|(k, _)| k).collect()
        };

        let json = ResourceFormat::Json
            .parse(r#"{"zeta": "1", "Alpha": "2", "mid": "3"}"#)
            .unwrap();
        assert_eq!(keys(json), ["zeta", "Alpha", "mid"]);

        let toml = ResourceFormat::Toml
            .parse("zeta = \"1\"\nAlpha = \"2\"\nmid = \"3\"\n")
            .unwrap();
        assert_eq!(keys(toml), ["zeta", "Alpha", "mid"]);

        let yaml = ResourceFormat::Yaml
            .parse("zeta: '1'\nAlpha: '2'\nmid: '3'\n")
            .unwrap();
        assert_eq!(keys(yaml), ["zeta", "Alpha", "mid"]);
    }

    #[test]
    fn test_parse_rejects_non_mapping() {
        assert!(ResourceFormat::Json
            .parse(lang_fixtures::not_a_mapping_json())
            .is_err());
        assert!(ResourceFormat::Yaml.parse("- a\n- b\n").is_err());
        assert!(ResourceFormat::Toml.parse("not = [valid").is_err());
    }

    #[test]
    fn test_file_loader_reads_by_extension() {
        let dir = create_temp_dir();
        let path = write_fixture(dir.path(), "en-us.json", lang_fixtures::en_us_json());

        let entries = FileResourceLoader.read(&path).unwrap();
        assert!(entries.iter().any(|(k, v)| k == "greet" && v == "Hello, %s!"));
    }

    #[test]
    fn test_file_loader_soft_failures() {
        let dir = create_temp_dir();
        let malformed = write_fixture(dir.path(), "broken.json", "{ not json");
        let unknown = write_fixture(dir.path(), "en.php", "<?php return [];");
        let list = write_fixture(dir.path(), "list.json", lang_fixtures::not_a_mapping_json());

        assert!(FileResourceLoader.read(&malformed).is_none());
        assert!(FileResourceLoader.read(&unknown).is_none());
        assert!(FileResourceLoader.read(&list).is_none());
        assert!(FileResourceLoader.read(&dir.path().join("absent.json")).is_none());
        assert!(FileResourceLoader.read(dir.path()).is_none());
    }
}
