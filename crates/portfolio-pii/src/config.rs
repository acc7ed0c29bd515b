//! Configuration types for portfolio-pii.
//!
//! [`ScannerConfig`] controls which categories are scanned, the minimum rule
//! confidence, the redaction style and the default allowlist path. It can be
//! built in code, read from a TOML file, and overridden from the
//! environment. The defaults reproduce the engine's documented behaviour.

pub mod env;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use env::EnvConfig;

use crate::error::{PiiError, Result};
use crate::pii::{PiiDetector, RedactionStyle, Redactor};
use crate::types::PiiCategory;

/// Configuration for a scanner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Default allowlist document path.
    pub allowlist_path: Option<PathBuf>,

    /// Categories to detect.
    pub enabled_categories: Vec<PiiCategory>,

    /// Rules below this confidence are skipped.
    pub min_confidence: f32,

    /// Style used by the scanner's redaction.
    pub redaction_style: RedactionStyle,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            allowlist_path: None,
            enabled_categories: PiiCategory::ALL.to_vec(),
            min_confidence: 0.0,
            redaction_style: RedactionStyle::Placeholder,
        }
    }
}

impl ScannerConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default allowlist path.
    #[must_use]
    pub fn allowlist_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.allowlist_path = Some(path.into());
        self
    }

    /// Restrict detection to the given categories.
    #[must_use]
    pub fn categories(mut self, categories: impl IntoIterator<Item = PiiCategory>) -> Self {
        self.enabled_categories = categories.into_iter().collect();
        self
    }

    /// Set the minimum rule confidence.
    #[must_use]
    pub const fn min_confidence(mut self, threshold: f32) -> Self {
        self.min_confidence = threshold;
        self
    }

    /// Set the redaction style.
    #[must_use]
    pub const fn redaction_style(mut self, style: RedactionStyle) -> Self {
        self.redaction_style = style;
        self
    }

    /// Check the configuration for out-of-range values.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(PiiError::config(format!(
                "min_confidence must be within [0, 1], got {}",
                self.min_confidence
            )));
        }
        Ok(())
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = PiiError::with_path_context(std::fs::read_to_string(path), "reading", path)?;
        Self::from_toml_str(&content)
    }

    /// Apply overrides from the environment.
    pub fn merge_env(mut self, env: &EnvConfig) -> Result<Self> {
        if let Some(path) = env.get_non_empty(env::vars::ALLOWLIST_PATH) {
            self.allowlist_path = Some(PathBuf::from(path));
        }

        if let Some(raw) = env.get(env::vars::MIN_CONFIDENCE) {
            self.min_confidence = raw.trim().parse().map_err(|_| {
                PiiError::config(format!("{} is not a number: {raw}", env::vars::MIN_CONFIDENCE))
            })?;
        }

        if let Some(names) = env.list(env::vars::CATEGORIES) {
            self.enabled_categories = names
                .iter()
                .map(|name| name.parse())
                .collect::<Result<Vec<PiiCategory>>>()?;
        }

        self.validate()?;
        Ok(self)
    }

    /// Load defaults, then an optional TOML file, then the process environment.
    pub fn resolve(file: Option<&Path>) -> Result<Self> {
        let base = match file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        base.merge_env(&EnvConfig::default())
    }

    /// Build the detector this configuration describes.
    #[must_use]
    pub fn detector(&self) -> PiiDetector {
        PiiDetector::with_categories(self.enabled_categories.iter().copied())
            .min_confidence(self.min_confidence)
    }

    /// Build the redactor this configuration describes.
    #[must_use]
    pub const fn redactor(&self) -> Redactor {
        Redactor::new().style(self.redaction_style)
    }
}
