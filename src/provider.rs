/*!
# ESLint Issues Provider

Runs the format held by [`EsLintIssuesSettings`] and post-processes the
result: resolves rule documentation links and applies the priority filter
from [`EsLintIssuesConfig`].
*/

use anyhow::{Context, Result};

use crate::config::{EsLintIssuesConfig, RepositorySettings};
use crate::issues::{Issue, PROVIDER_NAME};
use crate::rule_url::RuleUrlResolver;
use crate::settings::EsLintIssuesSettings;

/// Reads issues from an ESLint log
#[derive(Debug, Clone)]
pub struct EsLintIssuesProvider {
    settings: EsLintIssuesSettings,
    repository: RepositorySettings,
    config: EsLintIssuesConfig,
    resolver: RuleUrlResolver,
}

impl EsLintIssuesProvider {
    pub fn new(
        settings: EsLintIssuesSettings,
        repository: RepositorySettings,
        config: EsLintIssuesConfig,
    ) -> Self {
        let resolver = RuleUrlResolver::new(config.rule_url_base.clone());
        Self {
            settings,
            repository,
            config,
            resolver,
        }
    }

    pub fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    pub fn settings(&self) -> &EsLintIssuesSettings {
        &self.settings
    }

    pub fn config(&self) -> &EsLintIssuesConfig {
        &self.config
    }

    /// Parses the log and returns the issues at or above the configured priority
    pub fn read_issues(&self) -> Result<Vec<Issue>> {
        let format = self.settings.format();
        let issues = format
            .read_issues(&self.settings, &self.repository, &self.config)
            .with_context(|| format!("{} failed to read issues", PROVIDER_NAME))?;

        let total = issues.len();
        let issues: Vec<Issue> = issues
            .into_iter()
            .filter(|issue| issue.priority >= self.config.min_priority)
            .map(|issue| self.attach_rule_url(issue))
            .collect();

        tracing::info!(
            format = format.name(),
            total,
            reported = issues.len(),
            "Read {} issues from ESLint log",
            issues.len()
        );

        Ok(issues)
    }

    fn attach_rule_url(&self, issue: Issue) -> Issue {
        if issue.rule_url.is_some() {
            return issue;
        }
        let url = issue.rule.as_deref().and_then(|rule| self.resolver.resolve(rule));
        issue.with_rule_url(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::{JsonFormat, LogFileFormat};
    use crate::issues::IssuePriority;
    use std::sync::Arc;

    const LOG: &str = r#"[{
        "filePath": "/repo/index.js",
        "messages": [
            {"ruleId": "no-unused-vars", "severity": 1, "message": "'x' is assigned a value but never used.", "line": 1, "column": 5},
            {"ruleId": "react/jsx-key", "severity": 2, "message": "Missing \"key\" prop.", "line": 9, "column": 3}
        ]
    }]"#;

    fn provider(config: EsLintIssuesConfig) -> EsLintIssuesProvider {
        let settings = EsLintIssuesSettings::from_content(LOG, Arc::new(JsonFormat::new())).unwrap();
        EsLintIssuesProvider::new(settings, RepositorySettings::new("/repo"), config)
    }

    #[test]
    fn test_rule_urls_are_attached() {
        let issues = provider(EsLintIssuesConfig::default()).read_issues().unwrap();

        assert_eq!(issues.len(), 2);
        assert_eq!(
            issues[0].rule_url.as_deref(),
            Some("https://eslint.org/docs/rules/no-unused-vars")
        );
        assert_eq!(issues[1].rule_url, None);
    }

    #[test]
    fn test_min_priority_filter() {
        let config = EsLintIssuesConfig {
            min_priority: IssuePriority::Error,
            ..Default::default()
        };
        let issues = provider(config).read_issues().unwrap();

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule.as_deref(), Some("react/jsx-key"));
    }

    #[test]
    fn test_custom_rule_url_base() {
        let config = EsLintIssuesConfig {
            rule_url_base: "https://docs.example.org/eslint/".to_string(),
            ..Default::default()
        };
        let issues = provider(config).read_issues().unwrap();
        assert_eq!(
            issues[0].rule_url.as_deref(),
            Some("https://docs.example.org/eslint/no-unused-vars")
        );
    }

    struct FailingFormat;

    impl LogFileFormat for FailingFormat {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn read_issues(
            &self,
            _settings: &EsLintIssuesSettings,
            _repository: &RepositorySettings,
            _config: &EsLintIssuesConfig,
        ) -> Result<Vec<Issue>> {
            anyhow::bail!("boom")
        }
    }

    #[test]
    fn test_format_errors_are_wrapped() {
        let settings = EsLintIssuesSettings::from_content("[]", Arc::new(FailingFormat)).unwrap();
        let provider = EsLintIssuesProvider::new(
            settings,
            RepositorySettings::new("/repo"),
            EsLintIssuesConfig::default(),
        );

        let err = provider.read_issues().unwrap_err();
        assert_eq!(format!("{:#}", err), "ESLint failed to read issues: boom");
    }
}
