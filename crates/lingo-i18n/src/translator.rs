//! The translator: active locale, message catalogs and detection settings.

use crate::detect::DetectionConfig;
use crate::request::LocaleRequest;
use crate::resource::{FileResourceLoader, ResourceFormat, ResourceLoader};
use crate::store::{MessageTable, ResourceStore};
use crate::vars::Vars;
use lingo_common::{non_empty, Result};
use lingo_config::LangConfig;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Locale active until something else is selected
pub const DEFAULT_LOCALE: &str = lingo_config::DEFAULT_LANG;

static EMPTY_TABLE: Lazy<MessageTable> = Lazy::new(MessageTable::new);

/// Runtime localization for one application, tenant or request scope.
///
/// Every operation that takes an optional locale falls back to the active
/// locale when given `None` or an empty string.
#[derive(Debug)]
pub struct Translator {
    /// Active locale; never empty
    range: String,
    store: ResourceStore,
    detection: DetectionConfig,
    allow_list: Vec<String>,
    lang_dir: Option<PathBuf>,
    loader: Box<dyn ResourceLoader>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    /// Create a translator with the default locale and detection settings
    pub fn new() -> Self {
        Self {
            range: DEFAULT_LOCALE.to_string(),
            store: ResourceStore::new(),
            detection: DetectionConfig::default(),
            allow_list: Vec::new(),
            lang_dir: None,
            loader: Box::new(FileResourceLoader),
        }
    }

    /// Build a translator from a validated configuration, loading its
    /// `extend_list` files.
    ///
    /// Locale identifiers from the configuration are lower-cased, matching
    /// the candidates [`detect`](Self::detect) produces.
    pub fn from_config(config: &LangConfig) -> Result<Self> {
        config.validate()?;

        let mut translator = Self::new();
        translator.set_locale(config.default_lang.to_lowercase());
        translator.set_detect_var(config.detect_var.as_str());
        translator.set_cookie_var(config.cookie_var.as_str());
        translator.set_allow_list(&config.allow_lang_list);
        translator.set_accept_language(&config.accept_language);
        translator.lang_dir.clone_from(&config.lang_dir);

        let mut extend: Vec<_> = config
            .extend_list
            .iter()
            .map(|(locale, files)| (locale.to_lowercase(), files))
            .collect();
        extend.sort_by(|a, b| a.0.cmp(&b.0));
        for (locale, files) in extend {
            let entries = translator.load(files.as_slice(), Some(locale.as_str())).len();
            debug!(locale = %locale, files = files.len(), entries, "loaded extend_list");
        }

        info!(
            locale = %translator.range,
            allow_list = ?translator.allow_list,
            "translator initialised from config"
        );
        Ok(translator)
    }

    /// Replace the resource loader
    #[must_use]
    pub fn with_loader(mut self, loader: impl ResourceLoader + 'static) -> Self {
        self.loader = Box::new(loader);
        self
    }

    /// Select the active locale; an empty identifier is ignored.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        let locale = locale.into();
        if locale.is_empty() {
            debug!("ignoring empty locale");
            return;
        }
        self.range = locale;
    }

    /// The active locale
    pub fn locale(&self) -> &str {
        &self.range
    }

    /// Define one message, overwriting any previous definition.
    pub fn set(&mut self, name: &str, value: impl Into<String>, locale: Option<&str>) -> &str {
        let locale = self.scope_owned(locale);
        self.store.set(&locale, name, value)
    }

    /// Define many messages; they overwrite existing definitions.
    pub fn set_many<I, K, V>(&mut self, entries: I, locale: Option<&str>) -> &MessageTable
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let locale = self.scope_owned(locale);
        self.store.set_many(&locale, entries)
    }

    /// Load resource files; existing definitions are never overwritten and
    /// earlier files win over later ones.
    pub fn load<P: AsRef<Path>>(&mut self, files: &[P], locale: Option<&str>) -> &MessageTable {
        let locale = self.scope_owned(locale);
        self.store.load(&locale, self.loader.as_ref(), files)
    }

    /// Load a single resource file
    pub fn load_file(&mut self, file: impl AsRef<Path>, locale: Option<&str>) -> &MessageTable {
        self.load(&[file.as_ref()], locale)
    }

    /// Load `<lang_dir>/<locale>.<ext>` for every supported extension.
    ///
    /// Extensions are probed as json, toml, yaml, yml; the first file that
    /// defines a key wins. Without a `lang_dir` nothing is read.
    pub fn load_locale_pack(&mut self, locale: Option<&str>) -> &MessageTable {
        let locale = self.scope_owned(locale);
        let files: Vec<PathBuf> = match &self.lang_dir {
            Some(dir) => ResourceFormat::ALL
                .iter()
                .flat_map(|format| format.extensions())
                .map(|ext| dir.join(format!("{locale}.{ext}")))
                .collect(),
            None => Vec::new(),
        };

        let table = self.store.load(&locale, self.loader.as_ref(), files.as_slice());
        info!(locale = %locale, entries = table.len(), "locale pack loaded");
        table
    }

    /// Whether `name` is defined
    pub fn has(&self, name: &str, locale: Option<&str>) -> bool {
        self.store.contains(self.scope(locale), name)
    }

    /// Render a message.
    ///
    /// An undefined key is used as its own template, so a missing
    /// translation shows up as the key rather than failing.
    pub fn get(&self, name: &str, vars: &Vars, locale: Option<&str>) -> String {
        let template = self.store.lookup(self.scope(locale), name).unwrap_or(name);
        vars.render(template)
    }

    /// Render a message in the active locale without variables
    pub fn text(&self, name: &str) -> String {
        self.get(name, &Vars::none(), None)
    }

    /// Every message of a locale; empty if nothing was defined for it.
    pub fn all(&self, locale: Option<&str>) -> &MessageTable {
        self.store
            .table(self.scope(locale))
            .unwrap_or_else(|| &*EMPTY_TABLE)
    }

    /// Locales that have messages, sorted
    pub fn locales(&self) -> Vec<&str> {
        self.store.locales()
    }

    /// The underlying message store
    pub fn store(&self) -> &ResourceStore {
        &self.store
    }

    /// Pick the active locale from a request.
    ///
    /// The first non-empty signal provides a candidate. It becomes the
    /// active locale when the allow list is empty or contains it;
    /// otherwise, and when there is no candidate, the active locale stays
    /// as it was. Returns the active locale.
    pub fn detect<R>(&mut self, request: &R) -> &str
    where
        R: LocaleRequest + ?Sized,
    {
        match self.detection.candidate(request) {
            Some((signal, candidate)) if !candidate.is_empty() && self.is_allowed(&candidate) => {
                debug!(%signal, locale = %candidate, "locale detected");
                self.range = candidate;
            }
            Some((signal, candidate)) if candidate.is_empty() => {
                debug!(
                    %signal,
                    locale = %self.range,
                    "signal resolved to an empty locale, keeping current"
                );
            }
            Some((signal, candidate)) => {
                debug!(
                    %signal,
                    candidate = %candidate,
                    locale = %self.range,
                    "detected locale not allowed, keeping current"
                );
            }
            None => debug!(locale = %self.range, "no locale signal in request"),
        }
        &self.range
    }

    /// Set the request parameter used for explicit locale selection
    pub fn set_detect_var(&mut self, var: impl Into<String>) {
        self.detection.detect_var = var.into();
    }

    /// Request parameter used for explicit locale selection
    pub fn detect_var(&self) -> &str {
        &self.detection.detect_var
    }

    /// Set the cookie consulted when no parameter is present
    pub fn set_cookie_var(&mut self, var: impl Into<String>) {
        self.detection.cookie_var = var.into();
    }

    /// Cookie consulted when no parameter is present
    pub fn cookie_var(&self) -> &str {
        &self.detection.cookie_var
    }

    /// Restrict detection to these locales; empty allows everything.
    ///
    /// Entries are lower-cased to match detected candidates.
    pub fn set_allow_list<I, S>(&mut self, locales: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allow_list = locales
            .into_iter()
            .map(|l| l.as_ref().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
    }

    /// Locales detection may select; empty means any
    pub fn allow_list(&self) -> &[String] {
        &self.allow_list
    }

    /// Merge `Accept-Language` aliases into the existing table
    pub fn set_accept_language<I, K, V>(&mut self, aliases: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.detection.merge_aliases(aliases);
    }

    /// `Accept-Language` alias table
    pub fn accept_language(&self) -> &HashMap<String, String> {
        &self.detection.aliases
    }

    /// Set the directory holding locale packs
    pub fn set_lang_dir(&mut self, dir: impl Into<PathBuf>) {
        self.lang_dir = Some(dir.into());
    }

    /// Directory holding locale packs
    pub fn lang_dir(&self) -> Option<&Path> {
        self.lang_dir.as_deref()
    }

    fn is_allowed(&self, candidate: &str) -> bool {
        self.allow_list.is_empty() || self.allow_list.iter().any(|l| l == candidate)
    }

    fn scope<'a>(&'a self, locale: Option<&'a str>) -> &'a str {
        non_empty(locale).unwrap_or(&self.range)
    }

    fn scope_owned(&self, locale: Option<&str>) -> String {
        self.scope(locale).to_string()
    }
}
