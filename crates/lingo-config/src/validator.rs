//! Runtime validation of the language configuration.

use crate::schema::LangConfig;
use lingo_common::{LingoError, Result};
use unic_langid::LanguageIdentifier;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, reporting the first offending field.
    pub fn validate(config: &LangConfig) -> Result<()> {
        Self::require_locale(&config.default_lang, "default_lang")?;
        Self::require_name(&config.detect_var, "detect_var")?;
        Self::require_name(&config.cookie_var, "cookie_var")?;

        for locale in &config.allow_lang_list {
            Self::require_locale(locale, "allow_lang_list")?;
        }

        let default_lang = config.default_lang.to_lowercase();
        if !config.allow_lang_list.is_empty()
            && !config
                .allow_lang_list
                .iter()
                .any(|l| l.to_lowercase() == default_lang)
        {
            return Err(LingoError::config_field(
                format!(
                    "default_lang '{}' is not in allow_lang_list",
                    config.default_lang
                ),
                "allow_lang_list",
            ));
        }

        for (token, locale) in &config.accept_language {
            if token.is_empty() {
                return Err(LingoError::config_field(
                    "alias token cannot be empty",
                    "accept_language",
                ));
            }
            Self::require_locale(locale, "accept_language")?;
        }

        for locale in config.extend_list.keys() {
            Self::require_locale(locale, "extend_list")?;
        }

        Ok(())
    }

    /// Whether `locale` parses as a language identifier.
    pub fn is_valid_locale(locale: &str) -> bool {
        locale.parse::<LanguageIdentifier>().is_ok()
    }

    fn require_name(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(LingoError::config_field(
                format!("{field} cannot be empty"),
                field,
            ));
        }
        Ok(())
    }

    fn require_locale(value: &str, field: &str) -> Result<()> {
        Self::require_name(value, field)?;
        if !Self::is_valid_locale(value) {
            return Err(LingoError::config_field(
                format!("'{value}' is not a valid language identifier"),
                field,
            ));
        }
        Ok(())
    }
}
