//! portfolio-pii: PII detection and redaction for user-supplied text
//!
//! This crate scans free-form text for personally identifiable information,
//! classifies how sensitive the findings are, and replaces them with fixed
//! placeholders. Values the user has approved can be kept in an allowlist
//! that persists to a small JSON document.
//!
//! # Features
//!
//! - **Six categories**: phone numbers, postal addresses, SSNs, email
//!   addresses, dates of birth, and financial identifiers
//! - **Overlap resolution** keeping the most confident match per region
//! - **Risk tiers** (`none`, `low`, `medium`, `high`) with a review flag
//! - **Byte-exact redaction**: text outside matched spans is never touched
//! - **Persistent allowlist** with async and blocking save/load
//! - **Configuration** from code, TOML, or `PORTFOLIO_PII_*` variables
//!
//! # Example
//!
//! ```rust
//! use portfolio_pii::prelude::*;
//!
//! let scanner = PiiScanner::new();
//! let result = scanner.scan("My SSN is 123-45-6789");
//! assert!(result.has_pii);
//! assert_eq!(result.risk_level, RiskLevel::High);
//!
//! let redacted = scanner.redact("My SSN is 123-45-6789", &result.items);
//! assert_eq!(redacted, "My SSN is [SSN REDACTED]");
//! ```

// Core types
pub mod config;
pub mod error;
pub mod prelude;
pub mod types;

// Detection pipeline
pub mod allowlist;
pub mod pii;
pub mod scanner;

pub use allowlist::{AllowlistEntry, AllowlistLookup, AllowlistStore};
pub use config::{EnvConfig, ScannerConfig};
pub use error::{PiiError, Result};
pub use pii::{PiiDetector, RedactionStyle, Redactor};
pub use scanner::{PiiScanner, ScanAndRedact};
pub use types::{DetectedItem, PiiCategory, RiskLevel, ScanResult, Span};
