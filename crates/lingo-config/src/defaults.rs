//! Default values for the language configuration.

use crate::schema::LangConfig;
use std::collections::HashMap;

/// Locale active when nothing else is configured
pub const DEFAULT_LANG: &str = "zh-cn";

/// Request parameter for explicit locale selection
pub const DEFAULT_DETECT_VAR: &str = "lang";

/// Cookie consulted when the parameter is absent
pub const DEFAULT_COOKIE_VAR: &str = "think_var";

/// Built-in `Accept-Language` aliases.
pub fn default_accept_language() -> HashMap<String, String> {
    HashMap::from([("zh-hans-cn".to_string(), "zh-cn".to_string())])
}

impl Default for LangConfig {
    fn default() -> Self {
        Self {
            default_lang: DEFAULT_LANG.to_string(),
            detect_var: DEFAULT_DETECT_VAR.to_string(),
            cookie_var: DEFAULT_COOKIE_VAR.to_string(),
            allow_lang_list: Vec::new(),
            accept_language: HashMap::new(),
            lang_dir: None,
            extend_list: HashMap::new(),
        }
    }
}
