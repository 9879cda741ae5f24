//! Test utilities and shared test helpers for Lingo.
//!
//! This module provides common testing utilities, fixtures, and helper functions
//! that can be used across all crates in the workspace for unit and integration testing.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `content` to `dir/name` and return the full path.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// Resource-file fixtures in each supported format.
pub mod lang_fixtures {
    /// English pack as JSON.
    pub fn en_us_json() -> &'static str {
        r#"{
    "Hello": "Hello!",
    "greet": "Hello, %s!",
    "greet2": "Hello, {:name}!",
    "items": "%d items",
    "enabled": true,
    "retries": 3,
    "nested": { "ignored": "yes" }
}"#
    }

    /// Simplified Chinese pack as TOML.
    pub fn zh_cn_toml() -> &'static str {
        r#"
hello = "你好！"
greet = "你好，%s！"
greet2 = "你好，{:name}！"
"#
    }

    /// German pack as YAML.
    pub fn de_yaml() -> &'static str {
        concat!(
            "hello: \"Hallo!\"\n",
            "greet: \"Hallo, %s!\"\n",
            "greet2: \"Hallo, {:name}!\"\n",
        )
    }

    /// A JSON document whose top level is not a mapping.
    pub fn not_a_mapping_json() -> &'static str {
        r#"["hello", "world"]"#
    }
}

/// Property-based testing utilities using proptest.
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for message keys in mixed ASCII case.
    pub fn key_strategy() -> impl Strategy<Value = String> {
        r"[a-zA-Z][a-zA-Z0-9_.]{0,24}".prop_map(|s| s.to_string())
    }

    /// Strategy for message values free of placeholder syntax.
    pub fn value_strategy() -> impl Strategy<Value = String> {
        r"[a-zA-Z0-9 ,.!?]{0,40}".prop_map(|s| s.to_string())
    }

    /// Strategy for plausible locale identifiers.
    pub fn locale_strategy() -> impl Strategy<Value = String> {
        r"[a-z]{2}(-[a-z]{2})?".prop_map(|s| s.to_string())
    }
}
