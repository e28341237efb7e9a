/*!
# ESLint Issues

Loads ESLint logs and normalizes them into [`Issue`]s for downstream
reporting.

## Architecture

```text
ESLint Issues
├── Core       - BOM-aware log reader, error types
├── Settings   - immutable (log content, format) pair
├── Formats    - pluggable log parsers (JSON)
├── Issues     - normalized issue model and priorities
├── Provider   - runs the format, resolves rule links, filters
└── Config     - TOML/YAML provider configuration
```

## Usage

```rust,ignore
use std::sync::Arc;
use eslint_issues::{
    EsLintIssuesConfig, EsLintIssuesProvider, EsLintIssuesSettings, JsonFormat,
    RepositorySettings,
};

let settings = EsLintIssuesSettings::from_file_path("eslint.json", Arc::new(JsonFormat::new()))?;
let provider = EsLintIssuesProvider::new(
    settings,
    RepositorySettings::new("/work/repo"),
    EsLintIssuesConfig::default(),
);

for issue in provider.read_issues()? {
    println!("{}", issue);
}
```
*/

pub mod config;
pub mod core;
pub mod formats;
pub mod issues;
pub mod logging;
pub mod provider;
pub mod rule_url;
pub mod settings;

pub use config::{EsLintIssuesConfig, RepositorySettings};
pub use self::core::{read_log_file, IssuesError, IssuesResult};
pub use formats::{JsonFormat, LogFileFormat};
pub use issues::{Issue, IssuePriority};
pub use logging::init_logging;
pub use provider::EsLintIssuesProvider;
pub use rule_url::RuleUrlResolver;
pub use settings::{EsLintIssuesSettings, SettingsBuilder};

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

/// Read issues from an ESLint JSON log on disk with default configuration
pub fn read_json_log<P: AsRef<Path>, R: AsRef<Path>>(
    log_path: P,
    repository_root: R,
) -> Result<Vec<Issue>> {
    let settings = EsLintIssuesSettings::from_file_path(log_path, Arc::new(JsonFormat::new()))?;
    let provider = EsLintIssuesProvider::new(
        settings,
        RepositorySettings::new(repository_root.as_ref()),
        EsLintIssuesConfig::default(),
    );
    provider.read_issues()
}
