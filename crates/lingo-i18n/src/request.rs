//! The slice of an inbound request that locale detection reads.

use std::collections::HashMap;

/// Header carrying the client's language preferences.
pub const ACCEPT_LANGUAGE: &str = "accept-language";

/// Read access to the signals an inbound request carries.
///
/// Implement this over whatever request type the embedding HTTP stack uses.
pub trait LocaleRequest {
    /// Query or body parameter
    fn param(&self, name: &str) -> Option<&str>;

    /// Cookie value
    fn cookie(&self, name: &str) -> Option<&str>;

    /// Header value; `name` is lower-case
    fn header(&self, name: &str) -> Option<&str>;
}

/// Owned set of request signals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSignals {
    params: HashMap<String, String>,
    cookies: HashMap<String, String>,
    headers: HashMap<String, String>,
}

impl RequestSignals {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query/body parameter
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Add a cookie
    #[must_use]
    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    /// Add a header; names are case-insensitive
    #[must_use]
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    /// Add an `Accept-Language` header
    #[must_use]
    pub fn with_accept_language(self, value: impl Into<String>) -> Self {
        self.with_header(ACCEPT_LANGUAGE, value)
    }
}

impl LocaleRequest for RequestSignals {
    fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}
