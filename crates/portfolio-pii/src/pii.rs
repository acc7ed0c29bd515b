//! PII (Personally Identifiable Information) detection and redaction.
//!
//! This module provides the scanning pipeline behind [`crate::PiiScanner`]:
//!
//! - [`catalog`]: the fixed table of detection rules
//! - [`detector`]: runs the rules and filters allowlisted values
//! - [`resolver`]: keeps the most confident hit per contested span
//! - [`risk`]: maps resolved items to a risk tier
//! - [`redactor`]: splices placeholders over detected spans
//!
//! # Example
//!
//! ```rust
//! use portfolio_pii::pii;
//!
//! let result = pii::scan("SSN: 123-45-6789");
//! assert!(result.has_pii);
//! assert_eq!(pii::redact("SSN: 123-45-6789", &result.items), "SSN: [SSN REDACTED]");
//! ```

pub mod catalog;
pub mod detector;
pub mod redactor;
pub mod resolver;
pub mod risk;
pub mod ssn;

pub use detector::PiiDetector;
pub use redactor::{RedactionStyle, Redactor, redact};

use crate::allowlist::NoAllowlist;
use crate::types::ScanResult;

/// Quick scan with every category and no allowlist.
#[must_use]
pub fn scan(content: &str) -> ScanResult {
    PiiDetector::new().scan(content, &NoAllowlist)
}

/// Quick check if content contains any PII.
#[must_use]
pub fn contains_pii(content: &str) -> bool {
    PiiDetector::new().contains_pii(content, &NoAllowlist)
}
