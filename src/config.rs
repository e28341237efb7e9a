/*!
# Provider Configuration

Configuration for reading issues from ESLint logs.
Supports TOML and YAML files.
*/

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::issues::IssuePriority;

/// Documentation root for ESLint core rules
pub const DEFAULT_RULE_URL_BASE: &str = "https://eslint.org/docs/rules/";

/// Repository the log was produced for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySettings {
    /// Absolute repository root; issue paths are reported relative to it
    pub root: PathBuf,
}

impl RepositorySettings {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Issue reading configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsLintIssuesConfig {
    /// Issues below this priority are dropped
    #[serde(default)]
    pub min_priority: IssuePriority,

    /// Base URL for core rule documentation
    #[serde(default = "default_rule_url_base")]
    pub rule_url_base: String,

    /// Drop issues for files outside the repository root instead of keeping absolute paths
    #[serde(default = "default_true")]
    pub skip_files_outside_repository: bool,
}

fn default_rule_url_base() -> String {
    DEFAULT_RULE_URL_BASE.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for EsLintIssuesConfig {
    fn default() -> Self {
        Self {
            min_priority: IssuePriority::Undefined,
            rule_url_base: default_rule_url_base(),
            skip_files_outside_repository: true,
        }
    }
}

impl EsLintIssuesConfig {
    /// Load configuration choosing the parser by file extension (`.yaml`/`.yml` or TOML)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let is_yaml = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
            .unwrap_or(false);

        if is_yaml {
            Self::load_from_yaml(path)
        } else {
            Self::load_from_file(path)
        }
    }

    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).with_context(|| {
            format!("Failed to read config from {}", path.as_ref().display())
        })?;

        let config: Self = toml::from_str(&content).with_context(|| {
            format!("Failed to parse TOML config from {}", path.as_ref().display())
        })?;

        config.log_warnings();
        Ok(config)
    }

    /// Load configuration from YAML file
    pub fn load_from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).with_context(|| {
            format!("Failed to read config from {}", path.as_ref().display())
        })?;

        let config: Self = serde_yaml::from_str(&content).with_context(|| {
            format!("Failed to parse YAML config from {}", path.as_ref().display())
        })?;

        config.log_warnings();
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        std::fs::write(&path, content).with_context(|| {
            format!("Failed to write config to {}", path.as_ref().display())
        })?;

        Ok(())
    }

    /// Validate configuration, returning human readable warnings
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.rule_url_base.trim().is_empty() {
            warnings.push("rule_url_base is empty; rule URLs will not be resolved".to_string());
        } else if !self.rule_url_base.ends_with('/') {
            warnings.push(format!(
                "rule_url_base '{}' does not end with '/'",
                self.rule_url_base
            ));
        }

        if self.min_priority == IssuePriority::Error {
            warnings.push("min_priority 'error' drops all ESLint warnings".to_string());
        }

        warnings
    }

    fn log_warnings(&self) {
        for warning in self.validate() {
            tracing::warn!("{}", warning);
        }
    }
}
