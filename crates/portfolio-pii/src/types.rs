//! Core types for PII scanning.
//!
//! These are the values that flow between the scanner and its collaborators:
//! categories, spans, detected items, risk levels and scan results.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PiiError;

/// Category of PII a pattern detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PiiCategory {
    /// Telephone number.
    Phone,
    /// Postal address.
    Address,
    /// US Social Security Number.
    Ssn,
    /// Email address.
    Email,
    /// Date of birth.
    #[serde(alias = "date_of_birth")]
    Dob,
    /// Card, account or routing number.
    Financial,
}

impl PiiCategory {
    /// Every category, in catalog order.
    pub const ALL: [Self; 6] = [
        Self::Phone,
        Self::Address,
        Self::Ssn,
        Self::Email,
        Self::Dob,
        Self::Financial,
    ];

    /// Get a human-readable name for this category.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Phone => "Phone",
            Self::Address => "Address",
            Self::Ssn => "SSN",
            Self::Email => "Email",
            Self::Dob => "Date of Birth",
            Self::Financial => "Financial",
        }
    }

    /// The lowercase identifier used in persisted documents.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Address => "address",
            Self::Ssn => "ssn",
            Self::Email => "email",
            Self::Dob => "dob",
            Self::Financial => "financial",
        }
    }

    /// Get the redaction placeholder for this category.
    #[must_use]
    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::Phone => "[PHONE REDACTED]",
            Self::Address => "[ADDRESS REDACTED]",
            Self::Ssn => "[SSN REDACTED]",
            Self::Email => "[EMAIL REDACTED]",
            Self::Dob => "[DOB REDACTED]",
            Self::Financial => "[FINANCIAL INFO REDACTED]",
        }
    }

    /// Whether a single item of this category makes a result high risk.
    #[must_use]
    pub const fn is_high_risk(&self) -> bool {
        matches!(self, Self::Ssn | Self::Financial)
    }

    /// Whether a single item of this category makes a result at least medium risk.
    #[must_use]
    pub const fn is_medium_risk(&self) -> bool {
        matches!(self, Self::Address | Self::Dob)
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PiiCategory {
    type Err = PiiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "phone" => Ok(Self::Phone),
            "address" => Ok(Self::Address),
            "ssn" => Ok(Self::Ssn),
            "email" => Ok(Self::Email),
            "dob" | "date_of_birth" => Ok(Self::Dob),
            "financial" => Ok(Self::Financial),
            _ => Err(PiiError::invalid_category(s)),
        }
    }
}

/// A half-open `[start, end)` byte range into a scanned string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Get the length of the span. An inverted span has length zero.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the span covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether two spans share at least one offset.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A single resolved PII finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedItem {
    /// Category of PII.
    pub category: PiiCategory,
    /// The matched text, exactly `content[span.start..span.end]`.
    pub value: String,
    /// Location of the match in the scanned content.
    pub span: Span,
    /// Confidence of the rule that produced the match (0.0 - 1.0).
    pub confidence: f32,
}

impl DetectedItem {
    /// Create a new detected item.
    pub fn new(category: PiiCategory, value: impl Into<String>, span: Span, confidence: f32) -> Self {
        Self {
            category,
            value: value.into(),
            span,
            confidence,
        }
    }
}

/// Coarse severity of a scan result.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Nothing detected.
    #[default]
    None,
    /// Only low-risk categories, fewer than three items.
    Low,
    /// Address or date of birth, or three or more items.
    Medium,
    /// SSN or financial data present.
    High,
}

impl RiskLevel {
    /// The lowercase identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of scanning one string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Whether any PII was found.
    #[serde(rename = "hasPII")]
    pub has_pii: bool,
    /// Resolved items, ascending by `span.start`, never overlapping.
    pub items: Vec<DetectedItem>,
    /// Risk tier derived from `items`.
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
    /// Whether a human needs to look at the content.
    #[serde(rename = "requiresReview")]
    pub requires_review: bool,
}

impl Default for ScanResult {
    fn default() -> Self {
        Self::from_items(Vec::new())
    }
}

impl ScanResult {
    /// Build a result from resolved, sorted, non-overlapping items.
    #[must_use]
    pub fn from_items(items: Vec<DetectedItem>) -> Self {
        let has_pii = !items.is_empty();
        let risk_level = crate::pii::risk::classify(&items);
        Self {
            has_pii,
            items,
            risk_level,
            requires_review: has_pii,
        }
    }

    /// Number of items found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item count per category.
    #[must_use]
    pub fn count_by_category(&self) -> BTreeMap<PiiCategory, usize> {
        let mut counts = BTreeMap::new();
        for item in &self.items {
            *counts.entry(item.category).or_insert(0) += 1;
        }
        counts
    }

    /// Distinct categories present, in category order.
    #[must_use]
    pub fn categories(&self) -> Vec<PiiCategory> {
        self.count_by_category().into_keys().collect()
    }

    /// The highest confidence among the items.
    #[must_use]
    pub fn highest_confidence(&self) -> Option<f32> {
        self.items
            .iter()
            .map(|item| item.confidence)
            .reduce(f32::max)
    }
}
