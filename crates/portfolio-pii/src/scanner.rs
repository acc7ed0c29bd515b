//! The scanner facade.
//!
//! [`PiiScanner`] ties a configured detector and redactor to one
//! [`AllowlistStore`]. Construct as many as you need; there is no shared
//! instance.
//!
//! # Example
//!
//! ```rust
//! use portfolio_pii::{PiiScanner, RiskLevel};
//!
//! let mut scanner = PiiScanner::new();
//! let out = scanner.scan_and_redact("Call (555) 123-4567 or mail jane@example.com");
//! assert_eq!(out.redacted_content, "Call [PHONE REDACTED] or mail [EMAIL REDACTED]");
//! assert_eq!(out.scan_result.risk_level, RiskLevel::Low);
//!
//! scanner.add_to_allowlist("jane@example.com", None, Some("public contact"));
//! assert_eq!(scanner.scan("jane@example.com").items.len(), 0);
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::allowlist::{AllowlistEntry, AllowlistStore};
use crate::config::ScannerConfig;
use crate::error::Result;
use crate::pii::{PiiDetector, Redactor};
use crate::types::{DetectedItem, PiiCategory, ScanResult};

/// Output of [`PiiScanner::scan_and_redact`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanAndRedact {
    /// The content with every detected item replaced.
    pub redacted_content: String,
    /// The scan the redaction was based on.
    pub scan_result: ScanResult,
}

/// PII scanner with its own allowlist.
#[derive(Debug, Clone)]
pub struct PiiScanner {
    config: ScannerConfig,
    detector: PiiDetector,
    redactor: Redactor,
    allowlist: AllowlistStore,
}

impl Default for PiiScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl PiiScanner {
    /// Create a scanner with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(ScannerConfig::default())
    }

    /// Create a scanner from a validated configuration.
    pub fn with_config(config: ScannerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: ScannerConfig) -> Self {
        let allowlist = match &config.allowlist_path {
            Some(path) => AllowlistStore::with_path(path),
            None => AllowlistStore::new(),
        };
        Self {
            detector: config.detector(),
            redactor: config.redactor(),
            config,
            allowlist,
        }
    }

    /// The configuration this scanner was built from.
    #[must_use]
    pub const fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// The allowlist.
    #[must_use]
    pub const fn allowlist(&self) -> &AllowlistStore {
        &self.allowlist
    }

    /// Mutable access to the allowlist.
    pub fn allowlist_mut(&mut self) -> &mut AllowlistStore {
        &mut self.allowlist
    }

    // Scanning

    /// Scan content for PII.
    #[must_use]
    pub fn scan(&self, content: &str) -> ScanResult {
        self.detector.scan(content, &self.allowlist)
    }

    /// Scan each input independently, preserving order.
    #[must_use]
    pub fn scan_batch<S: AsRef<str>>(&self, contents: &[S]) -> Vec<ScanResult> {
        contents
            .iter()
            .map(|content| self.scan(content.as_ref()))
            .collect()
    }

    /// Redact previously detected items from content.
    #[must_use]
    pub fn redact(&self, content: &str, items: &[DetectedItem]) -> String {
        self.redactor.redact(content, items)
    }

    /// Scan content and redact whatever was found.
    #[must_use]
    pub fn scan_and_redact(&self, content: &str) -> ScanAndRedact {
        let scan_result = self.scan(content);
        let redacted_content = self.redact(content, &scan_result.items);
        ScanAndRedact {
            redacted_content,
            scan_result,
        }
    }

    /// Check if content contains any non-allowlisted PII.
    #[must_use]
    pub fn contains_pii(&self, content: &str) -> bool {
        self.detector.contains_pii(content, &self.allowlist)
    }

    // Allowlist

    /// Allowlist a value.
    pub fn add_to_allowlist(
        &mut self,
        value: &str,
        category: Option<PiiCategory>,
        reason: Option<&str>,
    ) {
        self.allowlist.add(value, category, reason);
    }

    /// Remove a value from the allowlist. Returns whether it was present.
    pub fn remove_from_allowlist(&mut self, value: &str) -> bool {
        self.allowlist.remove(value)
    }

    /// Remove every allowlisted value.
    pub fn clear_allowlist(&mut self) {
        self.allowlist.clear();
    }

    /// Allowlisted values, normalized and sorted.
    #[must_use]
    pub fn get_allowlist(&self) -> Vec<String> {
        self.allowlist.values()
    }

    /// Allowlist entries with their metadata.
    #[must_use]
    pub fn get_allowlist_entries(&self) -> Vec<AllowlistEntry> {
        self.allowlist.entries()
    }

    /// The allowlist entry for a value, if any.
    #[must_use]
    pub fn get_allowlist_entry(&self, value: &str) -> Option<AllowlistEntry> {
        self.allowlist.entry(value).cloned()
    }

    /// Replace the allowlist with bare values.
    pub fn set_allowlist<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowlist.set_values(values);
    }

    /// Replace the allowlist with full entries.
    pub fn set_allowlist_entries(&mut self, entries: impl IntoIterator<Item = AllowlistEntry>) {
        self.allowlist.set_entries(entries);
    }

    /// Whether a value is allowlisted.
    #[must_use]
    pub fn is_allowlisted(&self, value: &str) -> bool {
        self.allowlist.is_allowlisted(value)
    }

    /// Save the allowlist to `path`, or the configured path.
    pub async fn save_allowlist(&self, path: Option<&Path>) -> Result<()> {
        self.allowlist.save(path).await
    }

    /// Load the allowlist from `path`, or the configured path.
    ///
    /// Returns `Ok(false)` when there is no file.
    pub async fn load_allowlist(&mut self, path: Option<&Path>) -> Result<bool> {
        self.allowlist.load(path).await
    }

    /// The configured allowlist path.
    #[must_use]
    pub fn get_allowlist_path(&self) -> Option<&Path> {
        self.allowlist.path()
    }

    /// Set the configured allowlist path.
    pub fn set_allowlist_path(&mut self, path: impl Into<PathBuf>) {
        self.allowlist.set_path(path);
    }
}
