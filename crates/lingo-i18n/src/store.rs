//! Per-locale message catalogs with case-insensitive keys.

use crate::resource::ResourceLoader;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Lower-cased message key → template.
pub type MessageTable = HashMap<String, String>;

/// Normalizes a message key for storage and lookup.
pub fn normalize_key(key: &str) -> String {
    key.to_lowercase()
}

/// Holds one [`MessageTable`] per locale.
///
/// Tables are created on first write and never removed. Direct writes
/// ([`set`](Self::set), [`set_many`](Self::set_many)) overwrite existing
/// keys; [`load`](Self::load) only fills in keys that are still missing.
#[derive(Debug, Default, Clone)]
pub struct ResourceStore {
    catalog: HashMap<String, MessageTable>,
}

impl ResourceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores one entry, overwriting any previous value, and returns it.
    pub fn set(&mut self, locale: &str, name: &str, value: impl Into<String>) -> &str {
        let table = self.table_mut(locale);
        match table.entry(normalize_key(name)) {
            Entry::Occupied(mut slot) => {
                slot.insert(value.into());
                slot.into_mut().as_str()
            }
            Entry::Vacant(slot) => slot.insert(value.into()).as_str(),
        }
    }

    /// Stores many entries; they take precedence over existing keys.
    pub fn set_many<I, K, V>(&mut self, locale: &str, entries: I) -> &MessageTable
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let table = self.table_mut(locale);
        for (key, value) in entries {
            table.insert(normalize_key(key.as_ref()), value.into());
        }
        table
    }

    /// Loads resource files into `locale`.
    ///
    /// Inside one file a later key replaces an earlier one that folds to
    /// the same lower-cased key. Within the batch, the first file to define
    /// a key wins. The batch is
    /// then merged under the existing table, so keys already present are
    /// kept. Files the loader cannot read are skipped.
    pub fn load<P: AsRef<Path>>(
        &mut self,
        locale: &str,
        loader: &dyn ResourceLoader,
        files: &[P],
    ) -> &MessageTable {
        let mut batch = MessageTable::new();
        for file in files {
            let path = file.as_ref();
            let Some(entries) = loader.read(path) else {
                continue;
            };

            let mut from_file = MessageTable::new();
            for (key, value) in entries {
                from_file.insert(normalize_key(&key), value);
            }
            debug!(path = %path.display(), locale, entries = from_file.len(), "read resource file");

            for (key, value) in from_file {
                batch.entry(key).or_insert(value);
            }
        }

        self.merge_missing(locale, batch)
    }

    /// Adds entries whose keys are not yet present in `locale`.
    pub fn merge_missing(&mut self, locale: &str, entries: MessageTable) -> &MessageTable {
        let table = self.table_mut(locale);
        for (key, value) in entries {
            table.entry(key).or_insert(value);
        }
        table
    }

    /// Looks up a template.
    pub fn lookup(&self, locale: &str, name: &str) -> Option<&str> {
        self.catalog
            .get(locale)
            .and_then(|table| table.get(&normalize_key(name)))
            .map(String::as_str)
    }

    /// Whether `name` is defined for `locale`.
    pub fn contains(&self, locale: &str, name: &str) -> bool {
        self.lookup(locale, name).is_some()
    }

    /// The table for `locale`, if anything has been written to it.
    pub fn table(&self, locale: &str) -> Option<&MessageTable> {
        self.catalog.get(locale)
    }

    /// Locales that have a table, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.catalog.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    fn table_mut(&mut self, locale: &str) -> &mut MessageTable {
        self.catalog.entry(locale.to_string()).or_default()
    }
}
