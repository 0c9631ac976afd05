//! Workspace configuration.
//!
//! Resolution order (highest priority first):
//! 1. Environment variables (`RENO_*`)
//! 2. TOML file passed by the caller
//! 3. Compiled defaults
//!
//! Configuration covers collaborators only. Scoring weights and tier
//! thresholds are constants and cannot be overridden here.

pub mod defaults;
pub mod observability_config;
pub mod report_config;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use report_config::ReportConfig;

use crate::errors::ConfigError;
use crate::models::JobTemplate;

/// Top-level configuration aggregating all sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenoConfig {
    pub observability: ObservabilityConfig,
    pub report: ReportConfig,
    /// Reference templates per job category. A file that lists any
    /// `[[templates]]` replaces the built-in set.
    pub templates: Vec<JobTemplate>,
}

impl Default for RenoConfig {
    fn default() -> Self {
        Self {
            observability: ObservabilityConfig::default(),
            report: ReportConfig::default(),
            templates: defaults::default_templates(),
        }
    }
}

impl RenoConfig {
    /// Load configuration: defaults, then `path` if given, then env overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file. Missing sections keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `RENO_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup(defaults::ENV_LOG_LEVEL) {
            if !level.trim().is_empty() {
                self.observability.log_level = level.trim().to_string();
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.observability.log_level.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        let currency = &self.report.currency;
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::ValidationFailed {
                field: "report.currency".to_string(),
                message: format!("'{currency}' is not a three-letter uppercase code"),
            });
        }

        let mut seen = HashSet::new();
        for template in &self.templates {
            let key = template.category.trim().to_ascii_lowercase();
            if key.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "templates.category".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
            if !seen.insert(key) {
                return Err(ConfigError::ValidationFailed {
                    field: "templates.category".to_string(),
                    message: format!("duplicate category '{}'", template.category),
                });
            }
        }
        Ok(())
    }

    /// Look up the template for a job category (case-insensitive).
    pub fn template(&self, category: &str) -> Option<&JobTemplate> {
        let category = category.trim();
        self.templates
            .iter()
            .find(|t| t.category.trim().eq_ignore_ascii_case(category))
    }
}
