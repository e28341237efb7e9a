/*!
# Log Formats

Parsers that turn the raw text of an ESLint log into [`Issue`]s.
The text is held by [`EsLintIssuesSettings`]; a format only reads it.

## Supported formats:
- **JSON** - output of `eslint --format json`
*/

pub mod json;

pub use json::JsonFormat;

use anyhow::Result;

use crate::config::{EsLintIssuesConfig, RepositorySettings};
use crate::issues::Issue;
use crate::settings::EsLintIssuesSettings;

/// Parser for one shape of ESLint log.
///
/// Implementations are shared through `Arc` and may be invoked from
/// several threads at once, so they must not rely on interior mutation.
pub trait LogFileFormat: Send + Sync {
    /// Display name of the format
    fn name(&self) -> &'static str;

    /// Parses the log content held by `settings` into issues
    fn read_issues(
        &self,
        settings: &EsLintIssuesSettings,
        repository: &RepositorySettings,
        config: &EsLintIssuesConfig,
    ) -> Result<Vec<Issue>>;
}
