//! Integration tests for lingo-config crate.

use lingo_common::test_utils::{create_temp_dir, write_fixture};
use lingo_common::LingoError;
use lingo_config::{ConfigLoader, LangConfig};
use std::path::PathBuf;

#[test]
fn test_load_toml_resolves_relative_paths() {
    let dir = create_temp_dir();
    let path = write_fixture(
        dir.path(),
        "lingo.toml",
        r#"
default_lang = "en-us"
allow_lang_list = ["en-us", "zh-cn"]
lang_dir = "lang"

[accept_language]
en-gb = "en-us"

[extend_list]
en-us = ["lang/extra.json", "/abs/other.json"]
"#,
    );

    let config = ConfigLoader::new(&path).read().unwrap();
    assert_eq!(config.lang_dir, Some(PathBuf::from("lang")));

    let config = ConfigLoader::new(&path).load().unwrap();
    assert_eq!(config.default_lang, "en-us");
    assert_eq!(config.lang_dir, Some(dir.path().join("lang")));
    assert_eq!(
        config.extend_list["en-us"],
        vec![dir.path().join("lang/extra.json"), PathBuf::from("/abs/other.json")]
    );
    assert_eq!(config.accept_language["en-gb"], "en-us");
}

#[test]
fn test_load_yaml_and_json() {
    let dir = create_temp_dir();
    let yaml = write_fixture(
        dir.path(),
        "lingo.yml",
        "default_lang: de\ncookie_var: site_lang\n",
    );
    let json = write_fixture(
        dir.path(),
        "lingo.json",
        r#"{"detect_var": "locale", "allow_lang_list": ["zh-cn", "en"]}"#,
    );

    let config = ConfigLoader::new(&yaml).read().unwrap();
    assert_eq!(config.default_lang, "de");
    assert_eq!(config.cookie_var, "site_lang");
    assert_eq!(config.detect_var, "lang");

    let config = ConfigLoader::new(&json).read().unwrap();
    assert_eq!(config.detect_var, "locale");
    assert_eq!(config.allow_lang_list, vec!["zh-cn", "en"]);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_file_is_all_defaults() {
    let dir = create_temp_dir();
    let path = write_fixture(dir.path(), "lingo.toml", "");
    assert_eq!(ConfigLoader::new(&path).read().unwrap(), LangConfig::default());
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = create_temp_dir();
    let path = write_fixture(dir.path(), "lingo.toml", "default_lang = [unclosed");

    let err = ConfigLoader::new(&path).read().unwrap_err();
    assert!(matches!(err, LingoError::Parse { .. }));
    assert!(err.to_string().contains("lingo.toml"));
}

#[test]
fn test_invalid_config_fails_load() {
    let dir = create_temp_dir();
    let path = write_fixture(
        dir.path(),
        "lingo.toml",
        "default_lang = \"zh-cn\"\nallow_lang_list = [\"en\"]\n",
    );

    let err = ConfigLoader::new(&path).load().unwrap_err();
    assert_eq!(err.field(), Some("allow_lang_list"));
}
