//! Структуры для нормализованных замечаний линтера

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Provider type identifier attached to every issue read from ESLint logs
pub const PROVIDER_TYPE: &str = "EsLint";

/// Human readable provider name
pub const PROVIDER_NAME: &str = "ESLint";

/// Priority of an issue
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum IssuePriority {
    #[default]
    Undefined = 0,
    Hint = 100,
    Suggestion = 200,
    Warning = 300,
    Error = 400,
}

impl IssuePriority {
    /// Maps an ESLint severity (`1` warning, `2` error) to a priority
    pub fn from_eslint_severity(severity: u8) -> Self {
        match severity {
            1 => IssuePriority::Warning,
            2 => IssuePriority::Error,
            _ => IssuePriority::Undefined,
        }
    }

    pub fn value(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for IssuePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssuePriority::Undefined => write!(f, "undefined"),
            IssuePriority::Hint => write!(f, "hint"),
            IssuePriority::Suggestion => write!(f, "suggestion"),
            IssuePriority::Warning => write!(f, "warning"),
            IssuePriority::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for IssuePriority {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "undefined" => Ok(IssuePriority::Undefined),
            "hint" => Ok(IssuePriority::Hint),
            "suggestion" => Ok(IssuePriority::Suggestion),
            "warning" => Ok(IssuePriority::Warning),
            "error" => Ok(IssuePriority::Error),
            _ => Err(anyhow::anyhow!("Unknown issue priority: {}", s)),
        }
    }
}

/// A single finding extracted from a lint log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Path relative to the repository root, `None` for project-wide issues
    pub affected_file_relative_path: Option<PathBuf>,
    pub line: Option<u32>,
    pub column: Option<u32>,
    pub end_line: Option<u32>,
    pub end_column: Option<u32>,
    pub message: String,
    pub priority: IssuePriority,
    pub rule: Option<String>,
    pub rule_url: Option<String>,
    pub provider_type: String,
    pub provider_name: String,
}

impl Issue {
    /// Creates an issue with the ESLint provider identity and no location
    pub fn new(message: impl Into<String>, priority: IssuePriority) -> Self {
        Self {
            affected_file_relative_path: None,
            line: None,
            column: None,
            end_line: None,
            end_column: None,
            message: message.into(),
            priority,
            rule: None,
            rule_url: None,
            provider_type: PROVIDER_TYPE.to_string(),
            provider_name: PROVIDER_NAME.to_string(),
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.affected_file_relative_path = Some(path.into());
        self
    }

    pub fn with_location(mut self, line: Option<u32>, column: Option<u32>) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    pub fn with_end_location(mut self, end_line: Option<u32>, end_column: Option<u32>) -> Self {
        self.end_line = end_line;
        self.end_column = end_column;
        self
    }

    pub fn with_rule(mut self, rule: Option<String>) -> Self {
        self.rule = rule.filter(|r| !r.is_empty());
        self
    }

    pub fn with_rule_url(mut self, url: Option<String>) -> Self {
        self.rule_url = url;
        self
    }

    pub fn file(&self) -> Option<&Path> {
        self.affected_file_relative_path.as_deref()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.priority)?;

        if let Some(path) = &self.affected_file_relative_path {
            write!(f, "{}", path.display())?;
            if let Some(line) = self.line {
                write!(f, ":{}", line)?;
                if let Some(column) = self.column {
                    write!(f, ":{}", column)?;
                }
            }
            write!(f, ": ")?;
        }

        write!(f, "{}", self.message)?;

        if let Some(rule) = &self.rule {
            write!(f, " ({})", rule)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_from_severity() {
        assert_eq!(IssuePriority::from_eslint_severity(1), IssuePriority::Warning);
        assert_eq!(IssuePriority::from_eslint_severity(2), IssuePriority::Error);
        assert_eq!(IssuePriority::from_eslint_severity(0), IssuePriority::Undefined);
        assert_eq!(IssuePriority::from_eslint_severity(7), IssuePriority::Undefined);
    }

    #[test]
    fn test_priority_ordering() {
        assert!(IssuePriority::Undefined < IssuePriority::Hint);
        assert!(IssuePriority::Suggestion < IssuePriority::Warning);
        assert!(IssuePriority::Warning < IssuePriority::Error);
        assert_eq!(IssuePriority::Error.value(), 400);
    }

    #[test]
    fn test_priority_parsing() {
        assert_eq!("Warning".parse::<IssuePriority>().unwrap(), IssuePriority::Warning);
        assert_eq!("error".parse::<IssuePriority>().unwrap(), IssuePriority::Error);
        assert!("critical".parse::<IssuePriority>().is_err());
    }

    #[test]
    fn test_issue_display() {
        let issue = Issue::new("Unexpected console statement.", IssuePriority::Warning)
            .with_file("src/app.js")
            .with_location(Some(3), Some(5))
            .with_rule(Some("no-console".to_string()));

        assert_eq!(
            issue.to_string(),
            "[warning] src/app.js:3:5: Unexpected console statement. (no-console)"
        );
        assert_eq!(issue.provider_type, PROVIDER_TYPE);
    }

    #[test]
    fn test_empty_rule_is_dropped() {
        let issue = Issue::new("Parsing error", IssuePriority::Error).with_rule(Some(String::new()));
        assert_eq!(issue.rule, None);
    }
}
