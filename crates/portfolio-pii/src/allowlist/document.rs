//! The persisted allowlist document.
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "lastModified": "2026-01-01T00:00:00Z",
//!   "entries": [
//!     { "value": "public@company.com", "type": "email", "reason": "support inbox", "addedAt": "..." }
//!   ]
//! }
//! ```
//!
//! Unknown fields are ignored. A document without `version`, or whose
//! `entries` is not an array, is rejected.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{PiiError, Result};
use crate::types::PiiCategory;

/// Current document version.
pub const DOCUMENT_VERSION: &str = "1.0";

/// One allowlisted value with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowlistEntry {
    /// Normalized value (trimmed, lowercased).
    pub value: String,
    /// Category the value was approved for, if recorded.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<PiiCategory>,
    /// Why the value was approved, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// When the value was added.
    #[serde(
        rename = "addedAt",
        default = "Utc::now",
        deserialize_with = "deserialize_timestamp"
    )]
    pub added_at: DateTime<Utc>,
}

impl AllowlistEntry {
    /// Create an entry stamped with the current time.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            category: None,
            reason: None,
            added_at: Utc::now(),
        }
    }

    /// Set the category.
    #[must_use]
    pub const fn with_category(mut self, category: PiiCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the reason.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Set the time the entry was added.
    #[must_use]
    pub const fn with_added_at(mut self, added_at: DateTime<Utc>) -> Self {
        self.added_at = added_at;
        self
    }
}

/// The `{version, lastModified, entries}` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllowlistDocument {
    /// Document format version.
    pub version: String,
    /// When the document was last saved.
    #[serde(rename = "lastModified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    /// The allowlisted values.
    pub entries: Vec<AllowlistEntry>,
}

impl AllowlistDocument {
    /// Build a current-version document stamped now.
    #[must_use]
    pub fn new(entries: Vec<AllowlistEntry>) -> Self {
        Self {
            version: DOCUMENT_VERSION.to_string(),
            last_modified: Some(Utc::now()),
            entries,
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a document.
    pub fn parse(text: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(text)?;
        let object = root
            .as_object()
            .ok_or_else(|| PiiError::format("allowlist document is not an object"))?;

        let version = match object.get("version") {
            Some(Value::String(version)) => version.clone(),
            Some(Value::Number(version)) => version.to_string(),
            Some(_) => return Err(PiiError::format("allowlist version is not a string")),
            None => return Err(PiiError::format("allowlist document has no version")),
        };

        let entries = match object.get("entries") {
            Some(entries @ Value::Array(_)) => {
                Vec::<AllowlistEntry>::deserialize(entries.clone())
                    .map_err(|e| PiiError::format(format!("invalid allowlist entry: {e}")))?
            }
            Some(_) => return Err(PiiError::format("allowlist entries is not an array")),
            None => return Err(PiiError::format("allowlist document has no entries")),
        };

        let last_modified = object
            .get("lastModified")
            .map(|value| timestamp_from_value(value.clone()))
            .transpose()
            .map_err(|e| PiiError::format(format!("invalid lastModified: {e}")))?;

        if version != DOCUMENT_VERSION {
            tracing::warn!(
                version = %version,
                expected = DOCUMENT_VERSION,
                "loading allowlist with unrecognised version"
            );
        }

        Ok(Self {
            version,
            last_modified,
            entries,
        })
    }
}

/// A timestamp as it may appear in a document.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Millis(i64),
}

impl RawTimestamp {
    fn into_datetime(self) -> std::result::Result<DateTime<Utc>, String> {
        match self {
            Self::Text(text) => DateTime::parse_from_rfc3339(&text)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| format!("`{text}` is not an RFC 3339 timestamp: {e}")),
            Self::Millis(millis) => Utc
                .timestamp_millis_opt(millis)
                .single()
                .ok_or_else(|| format!("{millis} is out of range for a timestamp")),
        }
    }
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    RawTimestamp::deserialize(deserializer)?
        .into_datetime()
        .map_err(serde::de::Error::custom)
}

fn timestamp_from_value(value: Value) -> std::result::Result<DateTime<Utc>, String> {
    RawTimestamp::deserialize(value)
        .map_err(|e| e.to_string())?
        .into_datetime()
}
