//! A translator that can be shared across threads.

use crate::request::LocaleRequest;
use crate::translator::Translator;
use crate::vars::Vars;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::path::Path;
use std::sync::Arc;

/// Cheaply cloneable handle to one [`Translator`].
///
/// Reads take a shared lock, writes an exclusive one. Locale detection
/// changes the active locale for every holder of the handle, so
/// per-request detection belongs on a per-request [`Translator`].
#[derive(Debug, Clone, Default)]
pub struct SharedTranslator {
    inner: Arc<RwLock<Translator>>,
}

impl From<Translator> for SharedTranslator {
    fn from(translator: Translator) -> Self {
        Self::new(translator)
    }
}

impl SharedTranslator {
    /// Wrap a translator
    pub fn new(translator: Translator) -> Self {
        Self {
            inner: Arc::new(RwLock::new(translator)),
        }
    }

    /// Render a message
    pub fn get(&self, name: &str, vars: &Vars, locale: Option<&str>) -> String {
        self.inner.read().get(name, vars, locale)
    }

    /// Whether `name` is defined
    pub fn has(&self, name: &str, locale: Option<&str>) -> bool {
        self.inner.read().has(name, locale)
    }

    /// The active locale
    pub fn locale(&self) -> String {
        self.inner.read().locale().to_string()
    }

    /// Select the active locale
    pub fn set_locale(&self, locale: impl Into<String>) {
        self.inner.write().set_locale(locale);
    }

    /// Define one message
    pub fn set(&self, name: &str, value: impl Into<String>, locale: Option<&str>) {
        self.inner.write().set(name, value, locale);
    }

    /// Define many messages
    pub fn set_many<I, K, V>(&self, entries: I, locale: Option<&str>)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.inner.write().set_many(entries, locale);
    }

    /// Load resource files; returns the size of the resulting table.
    pub fn load<P: AsRef<Path>>(&self, files: &[P], locale: Option<&str>) -> usize {
        self.inner.write().load(files, locale).len()
    }

    /// Detect and commit the active locale from a request
    pub fn detect<R>(&self, request: &R) -> String
    where
        R: LocaleRequest + ?Sized,
    {
        self.inner.write().detect(request).to_string()
    }

    /// Shared access to the translator
    pub fn read(&self) -> RwLockReadGuard<'_, Translator> {
        self.inner.read()
    }

    /// Exclusive access to the translator
    pub fn write(&self) -> RwLockWriteGuard<'_, Translator> {
        self.inner.write()
    }
}
