//! Locale detection signals.
//!
//! Signals are consulted in a fixed order and the first non-empty one
//! provides the candidate locale:
//!
//! 1. the request parameter named by [`DetectionConfig::detect_var`]
//! 2. the cookie named by [`DetectionConfig::cookie_var`]
//! 3. the leading ASCII `[A-Za-z0-9-]+` token of `Accept-Language`, rewritten
//!    through the alias table

use crate::request::{LocaleRequest, ACCEPT_LANGUAGE};
use lingo_common::non_empty;
use lingo_config::{default_accept_language, DEFAULT_COOKIE_VAR, DEFAULT_DETECT_VAR};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

static LEADING_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]+").expect("leading language tag pattern is valid"));

/// Which signal produced a candidate locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// Request parameter
    Param,
    /// Cookie
    Cookie,
    /// `Accept-Language` header
    AcceptLanguage,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Param => "param",
            Self::Cookie => "cookie",
            Self::AcceptLanguage => "accept-language",
        })
    }
}

/// Names and aliases used to pull a candidate locale out of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionConfig {
    /// Request parameter for explicit selection
    pub detect_var: String,
    /// Cookie consulted when the parameter is absent
    pub cookie_var: String,
    /// Raw `Accept-Language` token → canonical locale
    pub aliases: HashMap<String, String>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            detect_var: DEFAULT_DETECT_VAR.to_string(),
            cookie_var: DEFAULT_COOKIE_VAR.to_string(),
            aliases: default_accept_language(),
        }
    }
}

impl DetectionConfig {
    /// Merges aliases into the table; later entries replace earlier ones
    /// with the same (lower-cased) token, other aliases are kept.
    pub fn merge_aliases<I, K, V>(&mut self, aliases: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (token, locale) in aliases {
            self.aliases
                .insert(token.as_ref().to_lowercase(), locale.into());
        }
    }

    /// Candidate locale from the first signal that carries a value.
    ///
    /// The result is lower-cased. `None` when no signal yields anything,
    /// including an `Accept-Language` value that does not start with a
    /// language tag.
    pub fn candidate<R>(&self, request: &R) -> Option<(Signal, String)>
    where
        R: LocaleRequest + ?Sized,
    {
        if let Some(value) = non_empty(request.param(&self.detect_var)) {
            return Some((Signal::Param, value.to_lowercase()));
        }

        if let Some(value) = non_empty(request.cookie(&self.cookie_var)) {
            return Some((Signal::Cookie, value.to_lowercase()));
        }

        let header = non_empty(request.header(ACCEPT_LANGUAGE))?;
        let token = accept_language_token(header)?;
        let locale = self.aliases.get(&token).cloned().unwrap_or(token);
        Some((Signal::AcceptLanguage, locale))
    }
}

/// Leading language tag of an `Accept-Language` value, lower-cased.
///
/// ```rust
/// use lingo_i18n::accept_language_token;
///
/// assert_eq!(accept_language_token("zh-Hans-CN,en;q=0.9").as_deref(), Some("zh-hans-cn"));
/// assert_eq!(accept_language_token(";q=0.9"), None);
/// ```
pub fn accept_language_token(header: &str) -> Option<String> {
    LEADING_TAG
        .find(header)
        .map(|m| m.as_str().to_ascii_lowercase())
}
