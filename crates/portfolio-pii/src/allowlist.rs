//! Allowlist of user-approved values that are never reported as PII.
//!
//! Values are stored normalized (trimmed and lowercased) so lookups are
//! case-insensitive. The store persists to a JSON document at a
//! configured path; see [`document`] for the format.
//!
//! # Example
//!
//! ```rust
//! use portfolio_pii::allowlist::AllowlistStore;
//! use portfolio_pii::PiiCategory;
//!
//! let mut store = AllowlistStore::new();
//! store.add(" Public@Company.com ", Some(PiiCategory::Email), Some("support inbox"));
//! assert!(store.is_allowlisted("PUBLIC@company.com"));
//! ```

pub mod document;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub use document::{AllowlistDocument, AllowlistEntry, DOCUMENT_VERSION};

use crate::error::{PiiError, Result};
use crate::types::PiiCategory;

/// Normalize a value for allowlist storage and lookup.
#[must_use]
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Read access to an allowlist.
///
/// The detector only ever queries through this trait.
pub trait AllowlistLookup {
    /// Whether `value` (normalized) is allowlisted.
    fn is_allowlisted(&self, value: &str) -> bool;
}

/// An allowlist that approves nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAllowlist;

impl AllowlistLookup for NoAllowlist {
    fn is_allowlisted(&self, _value: &str) -> bool {
        false
    }
}

/// In-memory allowlist with JSON persistence.
///
/// Not synchronized: callers sharing a store across threads must serialize
/// mutations themselves.
#[derive(Debug, Clone, Default)]
pub struct AllowlistStore {
    /// Entries keyed by normalized value.
    entries: BTreeMap<String, AllowlistEntry>,
    /// Default document path for save and load.
    path: Option<PathBuf>,
}

impl AllowlistLookup for AllowlistStore {
    fn is_allowlisted(&self, value: &str) -> bool {
        self.entries.contains_key(&normalize(value))
    }
}

impl AllowlistStore {
    /// Create an empty store with no default path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that persists to `path` by default.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            entries: BTreeMap::new(),
            path: Some(path.into()),
        }
    }

    /// Add or replace a value.
    ///
    /// Values that are empty after trimming are ignored.
    pub fn add(&mut self, value: &str, category: Option<PiiCategory>, reason: Option<&str>) {
        let mut entry = AllowlistEntry::new(value);
        entry.category = category;
        entry.reason = reason.map(str::to_string);
        self.insert(entry);
    }

    /// Add or replace a fully specified entry, normalizing its value.
    pub fn insert(&mut self, mut entry: AllowlistEntry) {
        let key = normalize(&entry.value);
        if key.is_empty() {
            return;
        }
        entry.value.clone_from(&key);
        self.entries.insert(key, entry);
    }

    /// Remove a value. Returns whether it was present.
    pub fn remove(&mut self, value: &str) -> bool {
        self.entries.remove(&normalize(value)).is_some()
    }

    /// Remove every value.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether `value` is allowlisted.
    #[must_use]
    pub fn is_allowlisted(&self, value: &str) -> bool {
        AllowlistLookup::is_allowlisted(self, value)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Normalized values, in ascending order.
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Entries, in ascending order of value.
    #[must_use]
    pub fn entries(&self) -> Vec<AllowlistEntry> {
        self.entries.values().cloned().collect()
    }

    /// Look up the entry for a value.
    #[must_use]
    pub fn entry(&self, value: &str) -> Option<&AllowlistEntry> {
        self.entries.get(&normalize(value))
    }

    /// Replace the contents with bare values stamped now.
    pub fn set_values<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_entries(
            values
                .into_iter()
                .map(|value| AllowlistEntry::new(value.as_ref())),
        );
    }

    /// Replace the contents with fully specified entries.
    ///
    /// Values are re-normalized; a later entry wins over an earlier one
    /// with the same normalized value.
    pub fn set_entries(&mut self, entries: impl IntoIterator<Item = AllowlistEntry>) {
        self.entries.clear();
        for entry in entries {
            self.insert(entry);
        }
    }

    /// The default document path.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Set the default document path.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    /// Snapshot the store as a document stamped now.
    #[must_use]
    pub fn to_document(&self) -> AllowlistDocument {
        AllowlistDocument::new(self.entries())
    }

    fn resolve_path(&self, path: Option<&Path>) -> Result<PathBuf> {
        path.or(self.path.as_deref())
            .map(Path::to_path_buf)
            .ok_or_else(|| PiiError::config("no allowlist path given and none configured"))
    }

    /// Write the store to `path`, or the default path.
    ///
    /// Missing parent directories are created.
    pub async fn save(&self, path: Option<&Path>) -> Result<()> {
        let path = self.resolve_path(path)?;
        let json = self.to_document().to_json()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            PiiError::with_path_context(
                tokio::fs::create_dir_all(parent).await,
                "creating directory",
                parent,
            )?;
        }
        PiiError::with_path_context(tokio::fs::write(&path, json).await, "writing", &path)?;

        tracing::info!(path = %path.display(), entries = self.len(), "saved allowlist");
        Ok(())
    }

    /// Replace the store with the document at `path`, or the default path.
    ///
    /// Returns `Ok(false)` when no file exists. On a format error the store
    /// is left unchanged.
    pub async fn load(&mut self, path: Option<&Path>) -> Result<bool> {
        let path = self.resolve_path(path)?;
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no allowlist file to load");
                return Ok(false);
            }
            Err(e) => return Err(PiiError::io_context(format!("reading {}", path.display()), e)),
        };
        self.apply_loaded(&path, &text)?;
        Ok(true)
    }

    /// Blocking variant of [`save`](Self::save).
    pub fn save_blocking(&self, path: Option<&Path>) -> Result<()> {
        let path = self.resolve_path(path)?;
        let json = self.to_document().to_json()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            PiiError::with_path_context(
                std::fs::create_dir_all(parent),
                "creating directory",
                parent,
            )?;
        }
        PiiError::with_path_context(std::fs::write(&path, json), "writing", &path)?;

        tracing::info!(path = %path.display(), entries = self.len(), "saved allowlist");
        Ok(())
    }

    /// Blocking variant of [`load`](Self::load).
    pub fn load_blocking(&mut self, path: Option<&Path>) -> Result<bool> {
        let path = self.resolve_path(path)?;
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no allowlist file to load");
                return Ok(false);
            }
            Err(e) => return Err(PiiError::io_context(format!("reading {}", path.display()), e)),
        };
        self.apply_loaded(&path, &text)?;
        Ok(true)
    }

    fn apply_loaded(&mut self, path: &Path, text: &str) -> Result<()> {
        let document = AllowlistDocument::parse(text)?;
        self.set_entries(document.entries);
        tracing::info!(
            path = %path.display(),
            entries = self.len(),
            version = %document.version,
            "loaded allowlist"
        );
        Ok(())
    }
}
