//! Locale registry: the lookup the calendar widget reads its strings from.
//!
//! The registry is an explicit value. Build it once at start-up (usually
//! with [`LocaleRegistry::with_builtin_locales`], then any extra record
//! files), and pass it by reference to whatever renders the calendar.
//!
//! Lookups never fail. An unknown code resolves to the default locale's
//! record, and an unknown tooltip key reads as `""`.

use crate::error::{LocaleError, Result};
use crate::i18n::metrics::LookupMetrics;
use crate::i18n::record::LocaleRecord;
use crate::i18n::tables::{BUILTIN_TABLES, ENGLISH};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Locale code used when none is configured.
pub const DEFAULT_LOCALE: &str = "en";

/// Registry of locale records keyed by code.
#[derive(Debug)]
pub struct LocaleRegistry {
    records: HashMap<String, LocaleRecord>,

    /// Code whose record answers lookups for unknown codes
    default_code: String,

    /// Answers lookups when even the default code is unregistered
    fallback: LocaleRecord,

    metrics: LookupMetrics,
}

impl LocaleRegistry {
    /// Create an empty registry.
    ///
    /// # Arguments
    /// * `default_code` - Locale whose record is returned for unknown codes.
    ///   Until a record with this code is registered, the built-in English
    ///   record is used instead.
    pub fn new(default_code: impl Into<String>) -> Self {
        Self {
            records: HashMap::new(),
            default_code: default_code.into(),
            fallback: LocaleRecord::from(&ENGLISH),
            metrics: LookupMetrics::new(),
        }
    }

    /// Create a registry holding every built-in locale table.
    ///
    /// Tables are registered in [`BUILTIN_TABLES`] order, so of the two
    /// German tables the later one is the one that resolves.
    pub fn with_builtin_locales(default_code: impl Into<String>) -> Self {
        let mut registry = Self::new(default_code);
        for table in BUILTIN_TABLES {
            registry.insert(LocaleRecord::from(table));
        }
        debug!(
            "Registered {} built-in locales: {:?}",
            registry.len(),
            registry.codes()
        );
        registry
    }

    /// Register a record, replacing any record with the same code.
    ///
    /// The last registration wins; records are never merged.
    ///
    /// # Returns
    /// * `Ok(Some(previous))` if a record with this code was replaced
    /// * `Ok(None)` if the code was new
    /// * `Err(LocaleError::EmptyCode)` if the record has no code
    pub fn register(&mut self, record: LocaleRecord) -> Result<Option<LocaleRecord>> {
        if record.code.is_empty() {
            return Err(LocaleError::EmptyCode);
        }
        Ok(self.insert(record))
    }

    fn insert(&mut self, record: LocaleRecord) -> Option<LocaleRecord> {
        let code = record.code.clone();
        let previous = self.records.insert(code, record);
        if let Some(previous) = &previous {
            warn!(
                "Locale '{}' registered again, replacing the earlier record",
                previous.code
            );
        }
        previous
    }

    /// Resolve a locale code to its record.
    ///
    /// # Returns
    /// The record for `code` if registered; otherwise the default locale's
    /// record; otherwise the built-in English record. The same input always
    /// yields the same record.
    pub fn resolve(&self, code: &str) -> &LocaleRecord {
        if let Some(record) = self.records.get(code) {
            self.metrics.record_resolve_hit();
            return record;
        }

        self.metrics.record_resolve_fallback();
        debug!(
            "Unknown locale '{}', falling back to '{}'",
            code, self.default_code
        );
        self.default_record()
    }

    /// Get the registered record for `code`, without falling back.
    pub fn get(&self, code: &str) -> Option<&LocaleRecord> {
        self.records.get(code)
    }

    /// Look up a tooltip in `record`, counting the hit or miss.
    ///
    /// Same result as [`tooltip`]; this variant feeds [`Self::metrics`].
    pub fn tooltip<'a>(&self, record: &'a LocaleRecord, key: &str) -> &'a str {
        let text = record.tooltip(key);
        if text.is_empty() {
            self.metrics.record_tooltip_miss();
        } else {
            self.metrics.record_tooltip_hit();
        }
        text
    }

    /// The record that answers lookups for unknown codes.
    pub fn default_record(&self) -> &LocaleRecord {
        self.records.get(&self.default_code).unwrap_or(&self.fallback)
    }

    /// The configured default locale code.
    pub fn default_code(&self) -> &str {
        &self.default_code
    }

    /// Check if a locale code is registered.
    pub fn contains(&self, code: &str) -> bool {
        self.records.contains_key(code)
    }

    /// All registered codes, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.records.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// All registered records, sorted by code.
    pub fn records(&self) -> Vec<&LocaleRecord> {
        let mut records: Vec<&LocaleRecord> = self.records.values().collect();
        records.sort_by(|a, b| a.code.cmp(&b.code));
        records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lookup counters for this registry.
    pub fn metrics(&self) -> &LookupMetrics {
        &self.metrics
    }

    /// Register every `*.json` record file in `dir`.
    ///
    /// Files are loaded in file-name order, so when two files carry the
    /// same code the one that sorts last wins.
    ///
    /// Every file is read and checked before any record is registered; on
    /// error the registry is left unchanged.
    ///
    /// # Returns
    /// The number of records registered.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        let entries = fs::read_dir(dir).map_err(|source| LocaleError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let paths = json_files(dir, entries.map(|entry| entry.map(|e| e.path())))?;

        let mut records = Vec::with_capacity(paths.len());
        for path in &paths {
            let record = load_record(path)?;
            if record.code.is_empty() {
                return Err(LocaleError::EmptyCode);
            }
            debug!("Loaded locale '{}' from {}", record.code, path.display());
            records.push(record);
        }

        let count = records.len();
        for record in records {
            self.insert(record);
        }

        info!("Loaded {} locale files from {}", count, dir.display());
        Ok(count)
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::with_builtin_locales(DEFAULT_LOCALE)
    }
}

/// Look up a tooltip by wire name; unknown or missing keys yield `""`.
pub fn tooltip<'a>(record: &'a LocaleRecord, key: &str) -> &'a str {
    record.tooltip(key)
}

/// Sorted `*.json` files among directory listing results.
///
/// A failed entry fails the whole listing.
fn json_files(
    dir: &Path,
    entries: impl IntoIterator<Item = io::Result<PathBuf>>,
) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|source| LocaleError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Read a single JSON locale record.
pub fn load_record(path: &Path) -> Result<LocaleRecord> {
    let contents = fs::read_to_string(path).map_err(|source| LocaleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| LocaleError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
