//! Environment-based configuration.

use std::collections::HashMap;

/// Environment configuration prefix.
pub const DEFAULT_PREFIX: &str = "PORTFOLIO_PII";

/// Environment variable reader.
///
/// Values set with [`EnvConfig::set`] shadow the process environment, so
/// tests can exercise overrides without touching global state.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Prefix for environment variables.
    prefix: String,
    /// Values that shadow the process environment.
    overrides: HashMap<String, String>,
    /// Whether to fall back to the process environment.
    read_process_env: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl EnvConfig {
    /// Create a reader for the process environment.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            overrides: HashMap::new(),
            read_process_env: true,
        }
    }

    /// Create a reader that only sees explicitly set values.
    #[must_use]
    pub fn isolated(prefix: impl Into<String>) -> Self {
        Self {
            read_process_env: false,
            ..Self::new(prefix)
        }
    }

    /// Build the full environment variable name.
    fn var_name(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_uppercase()
        } else {
            format!("{}_{}", self.prefix, name.to_uppercase())
        }
    }

    /// Get a string value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        let var_name = self.var_name(name);
        if let Some(value) = self.overrides.get(&var_name) {
            return Some(value.clone());
        }
        if self.read_process_env {
            std::env::var(&var_name).ok()
        } else {
            None
        }
    }

    /// Get a non-blank string value.
    #[must_use]
    pub fn get_non_empty(&self, name: &str) -> Option<String> {
        self.get(name).filter(|value| !value.trim().is_empty())
    }

    /// Get a parsed value.
    #[must_use]
    pub fn parse<T: std::str::FromStr>(&self, name: &str) -> Option<T> {
        self.get(name).and_then(|v| v.trim().parse().ok())
    }

    /// Get a comma-separated list, skipping blank items.
    #[must_use]
    pub fn list(&self, name: &str) -> Option<Vec<String>> {
        self.get(name).map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
    }

    /// Check if a variable is set.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Shadow a value without touching the process environment.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let var_name = self.var_name(name);
        self.overrides.insert(var_name, value.into());
    }

    /// Remove a shadowed value.
    pub fn unset(&mut self, name: &str) {
        let var_name = self.var_name(name);
        self.overrides.remove(&var_name);
    }
}

/// Environment variables read by the scanner configuration.
pub mod vars {
    /// Default allowlist document path.
    pub const ALLOWLIST_PATH: &str = "ALLOWLIST_PATH";
    /// Minimum rule confidence.
    pub const MIN_CONFIDENCE: &str = "MIN_CONFIDENCE";
    /// Comma-separated enabled categories.
    pub const CATEGORIES: &str = "CATEGORIES";
}
