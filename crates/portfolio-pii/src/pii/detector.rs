//! PII detection over the pattern catalog.
//!
//! The detector runs every enabled rule over the content, drops hits whose
//! value is allowlisted, and hands the rest to the overlap resolver.

use super::{catalog, resolver};
use crate::allowlist::AllowlistLookup;
use crate::types::{DetectedItem, PiiCategory, ScanResult};

/// A PII detector.
#[derive(Debug, Clone)]
pub struct PiiDetector {
    /// Categories to detect.
    enabled_categories: Vec<PiiCategory>,
    /// Rules below this confidence are skipped.
    min_confidence: f32,
}

impl Default for PiiDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl PiiDetector {
    /// Create a detector with every category enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled_categories: PiiCategory::ALL.to_vec(),
            min_confidence: 0.0,
        }
    }

    /// Create a detector for a specific set of categories.
    #[must_use]
    pub fn with_categories(categories: impl IntoIterator<Item = PiiCategory>) -> Self {
        Self::new().only(categories)
    }

    /// Enable detection of a category.
    #[must_use]
    pub fn enable(mut self, category: PiiCategory) -> Self {
        if !self.enabled_categories.contains(&category) {
            self.enabled_categories.push(category);
        }
        self
    }

    /// Disable detection of a category.
    #[must_use]
    pub fn disable(mut self, category: PiiCategory) -> Self {
        self.enabled_categories.retain(|c| c != &category);
        self
    }

    /// Restrict detection to the given categories.
    #[must_use]
    pub fn only(mut self, categories: impl IntoIterator<Item = PiiCategory>) -> Self {
        self.enabled_categories.clear();
        for category in categories {
            self = self.enable(category);
        }
        self
    }

    /// Set the minimum rule confidence.
    #[must_use]
    pub const fn min_confidence(mut self, threshold: f32) -> Self {
        self.min_confidence = threshold;
        self
    }

    /// Whether a category is enabled.
    #[must_use]
    pub fn is_enabled(&self, category: PiiCategory) -> bool {
        self.enabled_categories.contains(&category)
    }

    /// The enabled categories.
    #[must_use]
    pub fn enabled_categories(&self) -> &[PiiCategory] {
        &self.enabled_categories
    }

    /// Collect raw hits in discovery order, before overlap resolution.
    ///
    /// Hits whose normalized value is allowlisted are dropped here.
    #[must_use]
    pub fn raw_hits(&self, content: &str, allowlist: &impl AllowlistLookup) -> Vec<DetectedItem> {
        if content.trim().is_empty() {
            return Vec::new();
        }

        let mut hits = Vec::new();
        for rule in catalog::rules() {
            if !self.is_enabled(rule.category()) || rule.confidence() < self.min_confidence {
                continue;
            }

            for span in rule.find_spans(content) {
                let value = &content[span.start..span.end];
                if allowlist.is_allowlisted(value) {
                    tracing::debug!(
                        rule = rule.name(),
                        category = %rule.category(),
                        start = span.start,
                        end = span.end,
                        "skipping allowlisted match"
                    );
                    continue;
                }
                hits.push(DetectedItem::new(
                    rule.category(),
                    value,
                    span,
                    rule.confidence(),
                ));
            }
        }
        hits
    }

    /// Detect PII, resolving overlaps.
    ///
    /// Items are sorted by start offset and never overlap.
    #[must_use]
    pub fn detect(&self, content: &str, allowlist: &impl AllowlistLookup) -> Vec<DetectedItem> {
        resolver::resolve(self.raw_hits(content, allowlist))
    }

    /// Scan content into a full result.
    #[must_use]
    pub fn scan(&self, content: &str, allowlist: &impl AllowlistLookup) -> ScanResult {
        let hits = self.raw_hits(content, allowlist);
        let raw_count = hits.len();
        let result = ScanResult::from_items(resolver::resolve(hits));

        tracing::debug!(
            content_len = content.len(),
            raw_hits = raw_count,
            items = result.items.len(),
            risk = %result.risk_level,
            "scanned content"
        );
        result
    }

    /// Check if content contains any PII.
    #[must_use]
    pub fn contains_pii(&self, content: &str, allowlist: &impl AllowlistLookup) -> bool {
        !self.detect(content, allowlist).is_empty()
    }
}
