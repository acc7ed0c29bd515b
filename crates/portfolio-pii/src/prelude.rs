//! Convenient re-exports for common portfolio-pii usage.
//!
//! # Example
//!
//! ```rust
//! use portfolio_pii::prelude::*;
//!
//! let mut scanner = PiiScanner::new();
//! scanner.add_to_allowlist("support@company.com", Some(PiiCategory::Email), None);
//! let out = scanner.scan_and_redact("Write to support@company.com or jane@example.com");
//! assert_eq!(out.redacted_content, "Write to support@company.com or [EMAIL REDACTED]");
//! ```

// Scanner
pub use crate::scanner::{PiiScanner, ScanAndRedact};

// Configuration
pub use crate::config::{EnvConfig, ScannerConfig};

// Error handling
pub use crate::error::{PiiError, Result};

// Common types
pub use crate::types::{DetectedItem, PiiCategory, RiskLevel, ScanResult, Span};

// Pipeline pieces
pub use crate::pii::{PiiDetector, RedactionStyle, Redactor};

// Allowlist
pub use crate::allowlist::{AllowlistEntry, AllowlistLookup, AllowlistStore};
