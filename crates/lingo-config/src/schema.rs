//! Configuration schema definitions.

use crate::validator::ConfigValidator;
use lingo_common::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Language configuration.
///
/// Every key is optional in a configuration file; missing keys take their
/// [`Default`] value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LangConfig {
    /// Locale active before any detection.
    pub default_lang: String,
    /// Request parameter for explicit locale selection.
    pub detect_var: String,
    /// Cookie consulted when the parameter is absent.
    pub cookie_var: String,
    /// Locales detection may select; empty allows any.
    pub allow_lang_list: Vec<String>,
    /// Extra `Accept-Language` aliases, merged over the built-in ones.
    pub accept_language: HashMap<String, String>,
    /// Directory holding `<locale>.<ext>` packs.
    pub lang_dir: Option<PathBuf>,
    /// Extra resource files per locale, loaded at start-up.
    pub extend_list: HashMap<String, Vec<PathBuf>>,
}

impl LangConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_takes_defaults() {
        let config: LangConfig = toml::from_str(
            r#"
default_lang = "en-us"
allow_lang_list = ["en-us", "zh-cn"]
"#,
        )
        .unwrap();

        assert_eq!(config.default_lang, "en-us");
        assert_eq!(config.detect_var, "lang");
        assert_eq!(config.allow_lang_list, vec!["en-us", "zh-cn"]);
    }

    #[test]
    fn test_yaml_with_maps() {
        let config: LangConfig = serde_yaml::from_str(
            "accept_language:\n  en-gb: en\nextend_list:\n  en:\n    - lang/extra.json\n",
        )
        .unwrap();

        assert_eq!(config.accept_language["en-gb"], "en");
        assert_eq!(
            config.extend_list["en"],
            vec![PathBuf::from("lang/extra.json")]
        );
    }

    #[test]
    fn test_json_round_trip_keeps_fields() {
        let config = LangConfig {
            lang_dir: Some(PathBuf::from("lang")),
            ..LangConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: LangConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
