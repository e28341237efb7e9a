/*!
# ESLint Issues Settings

Immutable pairing of decoded log text with the format that will parse it.

Two entry points produce the same value:

```rust,ignore
use std::sync::Arc;
use eslint_issues::{EsLintIssuesSettings, JsonFormat};

let from_disk = EsLintIssuesSettings::from_file_path("eslint.json", Arc::new(JsonFormat::new()))?;
let from_text = EsLintIssuesSettings::from_content("[]", Arc::new(JsonFormat::new()))?;
```

Validation runs before any field is stored; a failed call never yields a
partially built value. Settings compare by identity only, so no
`PartialEq` is provided; use [`EsLintIssuesSettings::has_format`] to check
which format a value carries.
*/

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::{read_log_file, IssuesError, IssuesResult};
use crate::formats::LogFileFormat;

/// Decoded ESLint log together with its format
#[derive(Clone)]
pub struct EsLintIssuesSettings {
    log_content: String,
    format: Arc<dyn LogFileFormat>,
}

impl EsLintIssuesSettings {
    /// Reads the log at `path` and pairs it with `format`.
    ///
    /// An empty path is rejected as a missing argument. Read failures are
    /// returned as [`IssuesError::Io`] with the original error kind.
    pub fn from_file_path<P: AsRef<Path>>(
        path: P,
        format: Arc<dyn LogFileFormat>,
    ) -> IssuesResult<Self> {
        Self::load(Some(path.as_ref()), Some(format))
    }

    /// Pairs already decoded log text with `format`.
    ///
    /// The text is stored as supplied; only the emptiness check trims it.
    pub fn from_content<S: Into<String>>(
        content: S,
        format: Arc<dyn LogFileFormat>,
    ) -> IssuesResult<Self> {
        Self::validate(Some(content.into()), Some(format))
    }

    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    pub fn log_content(&self) -> &str {
        &self.log_content
    }

    pub fn format(&self) -> &Arc<dyn LogFileFormat> {
        &self.format
    }

    /// Whether this value holds exactly the given format instance
    pub fn has_format(&self, format: &Arc<dyn LogFileFormat>) -> bool {
        Arc::ptr_eq(&self.format, format)
    }

    fn load(path: Option<&Path>, format: Option<Arc<dyn LogFileFormat>>) -> IssuesResult<Self> {
        let path = path
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| IssuesError::invalid_argument("path"))?;
        let format = format.ok_or_else(|| IssuesError::invalid_argument("format"))?;

        let content = read_log_file(path)?;
        Self::validate(Some(content), Some(format))
    }

    fn validate(
        content: Option<String>,
        format: Option<Arc<dyn LogFileFormat>>,
    ) -> IssuesResult<Self> {
        let content = content.ok_or_else(|| IssuesError::invalid_argument("content"))?;
        if content.trim().is_empty() {
            return Err(IssuesError::out_of_range("content"));
        }
        let format = format.ok_or_else(|| IssuesError::invalid_argument("format"))?;

        Ok(Self {
            log_content: content,
            format,
        })
    }
}

impl fmt::Debug for EsLintIssuesSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EsLintIssuesSettings")
            .field("log_content_len", &self.log_content.len())
            .field("format", &self.format.name())
            .finish()
    }
}

/// Where the log text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
enum LogSource {
    FilePath(PathBuf),
    Content(String),
}

/// Builder for settings whose inputs may be missing at the call site.
///
/// The last of [`path`](Self::path) / [`content`](Self::content) wins.
/// With neither set, `build` reports the content as missing.
#[derive(Default)]
pub struct SettingsBuilder {
    source: Option<LogSource>,
    format: Option<Arc<dyn LogFileFormat>>,
}

impl SettingsBuilder {
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(LogSource::FilePath(path.into()));
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.source = Some(LogSource::Content(content.into()));
        self
    }

    pub fn format(mut self, format: Arc<dyn LogFileFormat>) -> Self {
        self.format = Some(format);
        self
    }

    /// Like [`format`](Self::format) but accepts an absent value
    pub fn maybe_format(mut self, format: Option<Arc<dyn LogFileFormat>>) -> Self {
        self.format = format;
        self
    }

    pub fn build(self) -> IssuesResult<EsLintIssuesSettings> {
        match self.source {
            Some(LogSource::FilePath(path)) => {
                EsLintIssuesSettings::load(Some(path.as_path()), self.format)
            }
            Some(LogSource::Content(content)) => {
                EsLintIssuesSettings::validate(Some(content), self.format)
            }
            None => EsLintIssuesSettings::validate(None, self.format),
        }
    }
}
