//! Integration tests for the translator

use lingo_common::test_utils::{create_temp_dir, init_test_logging, lang_fixtures, write_fixture};
use lingo_config::LangConfig;
use lingo_i18n::{vars, RequestSignals, SharedTranslator, Translator, Vars};
use proptest::prelude::*;
use std::collections::HashMap;
use tempfile::TempDir;

/// One resource file per supported format
fn create_test_resources() -> TempDir {
    let dir = create_temp_dir();
    write_fixture(dir.path(), "en-us.json", lang_fixtures::en_us_json());
    write_fixture(dir.path(), "zh-cn.toml", lang_fixtures::zh_cn_toml());
    write_fixture(dir.path(), "de.yaml", lang_fixtures::de_yaml());
    dir
}

#[test]
fn test_set_then_get_is_case_insensitive() {
    let mut translator = Translator::new();
    translator.set("Page.Title", "Home", None);

    for key in ["page.title", "PAGE.TITLE", "Page.Title", "pAGE.tITLE"] {
        assert!(translator.has(key, None));
        assert_eq!(translator.text(key), "Home");
    }
}

#[test]
fn test_first_file_in_a_batch_wins() {
    let dir = create_temp_dir();
    let a = write_fixture(dir.path(), "a.json", r#"{"hello": "from a"}"#);
    let b = write_fixture(dir.path(), "b.yaml", "hello: from b\nbye: from b\n");
    let mut translator = Translator::new();

    translator.load(&[a, b], Some("en"));
    assert_eq!(translator.get("hello", &Vars::none(), Some("en")), "from a");
    assert_eq!(translator.get("bye", &Vars::none(), Some("en")), "from b");
}

#[test]
fn test_load_keeps_existing_and_set_overwrites() {
    init_test_logging();
    let dir = create_temp_dir();
    let first = write_fixture(dir.path(), "first.json", r#"{"x": "first"}"#);
    let second = write_fixture(dir.path(), "second.json", r#"{"x": "second"}"#);
    let mut translator = Translator::new();

    translator.load_file(&first, None);
    translator.load_file(&second, None);
    assert_eq!(translator.text("x"), "first");

    translator.set("x", "new", None);
    assert_eq!(translator.text("x"), "new");
}

#[test]
fn test_case_collision_in_one_file_keeps_later_key() {
    let dir = create_temp_dir();
    let json = write_fixture(dir.path(), "dup.json", r#"{"hello": "first", "HELLO": "second"}"#);
    let toml = write_fixture(dir.path(), "dup.toml", "HELLO = \"first\"\nhello = \"second\"\n");
    let mut translator = Translator::new();

    translator.load_file(&json, Some("en"));
    translator.load_file(&toml, Some("de"));
    assert_eq!(translator.get("hello", &Vars::none(), Some("en")), "second");
    assert_eq!(translator.get("hello", &Vars::none(), Some("de")), "second");
}

#[test]
fn test_every_format_loads() {
    let dir = create_test_resources();
    let mut translator = Translator::new();

    translator.load_file(dir.path().join("en-us.json"), Some("en-us"));
    translator.load_file(dir.path().join("zh-cn.toml"), None);
    translator.load_file(dir.path().join("de.yaml"), Some("de"));

    assert_eq!(translator.get("hello", &Vars::none(), Some("en-us")), "Hello!");
    assert_eq!(translator.text("hello"), "你好！");
    assert_eq!(translator.get("hello", &Vars::none(), Some("de")), "Hallo!");
    assert_eq!(translator.locales(), vec!["de", "en-us", "zh-cn"]);
}

#[test]
fn test_broken_and_missing_files_are_skipped() {
    let dir = create_temp_dir();
    let broken = write_fixture(dir.path(), "broken.toml", "= nope");
    let good = write_fixture(dir.path(), "good.json", r#"{"ok": "yes"}"#);
    let mut translator = Translator::new();

    let table = translator.load(
        &[broken, dir.path().join("missing.json"), good],
        None,
    );
    assert_eq!(table.len(), 1);
    assert_eq!(translator.text("ok"), "yes");
}

#[test]
fn test_unknown_key_renders_as_itself() {
    let translator = Translator::new();
    assert_eq!(translator.text("unknown_key"), "unknown_key");
    assert!(!translator.has("unknown_key", None));
}

#[test]
fn test_positional_and_named_greetings() {
    let dir = create_test_resources();
    let mut translator = Translator::new();
    translator.set_locale("en-us");
    translator.load_file(dir.path().join("en-us.json"), None);

    assert_eq!(translator.get("greet", &vars!["World"], None), "Hello, World!");
    assert_eq!(
        translator.get("greet2", &vars! {"name" => "World"}, None),
        "Hello, World!"
    );
    assert_eq!(
        translator.get("greet", &vars!["世界"], Some("zh-cn")),
        "greet"
    );
}

#[test]
fn test_param_beats_cookie() {
    let mut translator = Translator::new();
    let request = RequestSignals::new()
        .with_param("lang", "en")
        .with_cookie("think_var", "de")
        .with_accept_language("fr");
    assert_eq!(translator.detect(&request), "en");
}

#[test]
fn test_allow_list_rejects_candidate() {
    let mut translator = Translator::new();
    translator.set_allow_list(["en", "zh-cn"]);

    let request = RequestSignals::new().with_param("lang", "fr");
    assert_eq!(translator.detect(&request), "zh-cn");
    assert_eq!(translator.locale(), "zh-cn");
}

#[test]
fn test_accept_language_alias() {
    let mut translator = Translator::new();
    translator.set_locale("en");
    let request = RequestSignals::new().with_accept_language("zh-Hans-CN,en;q=0.9");
    assert_eq!(translator.detect(&request), "zh-cn");
}

#[test]
fn test_alias_setter_merges() {
    let mut translator = Translator::new();
    translator.set_accept_language([("zh-hant-tw", "zh-tw")]);

    assert_eq!(translator.accept_language().len(), 2);
    let request = RequestSignals::new().with_accept_language("zh-Hans-CN");
    assert_eq!(translator.detect(&request), "zh-cn");
    let request = RequestSignals::new().with_accept_language("zh-Hant-TW");
    assert_eq!(translator.detect(&request), "zh-tw");
}

#[test]
fn test_from_config_loads_extend_list() {
    let dir = create_test_resources();
    let mut extend_list = HashMap::new();
    extend_list.insert(
        "en-us".to_string(),
        vec![dir.path().join("en-us.json")],
    );
    let config = LangConfig {
        default_lang: "en-us".to_string(),
        allow_lang_list: vec!["en-us".to_string(), "de".to_string()],
        lang_dir: Some(dir.path().to_path_buf()),
        extend_list,
        ..LangConfig::default()
    };

    let mut translator = Translator::from_config(&config).unwrap();
    assert_eq!(translator.locale(), "en-us");
    assert_eq!(translator.text("hello"), "Hello!");

    translator.load_locale_pack(Some("de"));
    let request = RequestSignals::new().with_cookie("think_var", "DE");
    assert_eq!(translator.detect(&request), "de");
    assert_eq!(translator.text("hello"), "Hallo!");
}

#[test]
fn test_from_config_mixed_case_locale_survives_detection() {
    let dir = create_test_resources();
    let config = LangConfig {
        default_lang: "en-US".to_string(),
        allow_lang_list: vec!["en-US".to_string()],
        extend_list: HashMap::from([(
            "en-US".to_string(),
            vec![dir.path().join("en-us.json")],
        )]),
        ..LangConfig::default()
    };

    let mut translator = Translator::from_config(&config).unwrap();
    assert_eq!(translator.text("hello"), "Hello!");

    let request = RequestSignals::new().with_param("lang", "en-US");
    assert_eq!(translator.detect(&request), "en-us");
    assert_eq!(translator.text("hello"), "Hello!");
}

#[test]
fn test_from_config_rejects_invalid_config() {
    let config = LangConfig {
        detect_var: String::new(),
        ..LangConfig::default()
    };
    assert!(Translator::from_config(&config).is_err());
}

#[test]
fn test_shared_translator_sees_loads() {
    let dir = create_test_resources();
    let shared = SharedTranslator::new(Translator::new());

    let entries = shared.load(&[dir.path().join("zh-cn.toml")], None);
    assert_eq!(entries, 3);
    assert_eq!(
        shared.get("greet2", &vars! {"name" => "世界"}, None),
        "你好，世界！"
    );
}

proptest! {
    #[test]
    fn prop_keys_are_case_insensitive(key in "[A-Za-z][A-Za-z0-9_.]{0,15}", value in "\\PC{0,20}") {
        let mut translator = Translator::new();
        translator.set(&key, value.clone(), None);

        prop_assert!(translator.has(&key.to_uppercase(), None));
        prop_assert!(translator.has(&key.to_lowercase(), None));
        prop_assert_eq!(translator.get(&key.to_uppercase(), &Vars::none(), None), value);
    }

    #[test]
    fn prop_set_always_beats_load(key in "[a-z]{1,8}", manual in "[a-z]{1,8}", loaded in "[a-z]{1,8}") {
        let dir = create_temp_dir();
        let file = write_fixture(
            dir.path(),
            "x.json",
            &serde_json::json!({ key.clone(): loaded }).to_string(),
        );
        let mut translator = Translator::new();

        translator.set(&key, manual.clone(), None);
        translator.load_file(&file, None);
        prop_assert_eq!(translator.text(&key), manual);
    }
}
