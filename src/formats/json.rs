/*!
# JSON Format

Reads logs written by `eslint --format json`: an array with one entry per
linted file, each carrying its messages.

```json
[{
  "filePath": "C:\\repo\\src\\app.js",
  "messages": [{ "ruleId": "no-console", "severity": 1, "message": "...", "line": 3, "column": 5 }],
  "errorCount": 0,
  "warningCount": 1
}]
```
*/

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use super::LogFileFormat;
use crate::config::{EsLintIssuesConfig, RepositorySettings};
use crate::issues::{Issue, IssuePriority};
use crate::settings::EsLintIssuesSettings;

/// Result for one linted file
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileResult {
    #[serde(default)]
    file_path: String,
    #[serde(default)]
    messages: Vec<LintMessage>,
}

/// One ESLint message
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LintMessage {
    rule_id: Option<String>,
    #[serde(default)]
    severity: u8,
    message: String,
    line: Option<u32>,
    column: Option<u32>,
    end_line: Option<u32>,
    end_column: Option<u32>,
    #[serde(default)]
    fatal: bool,
}

/// Parser for ESLint JSON output
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl JsonFormat {
    pub fn new() -> Self {
        Self
    }
}

impl LogFileFormat for JsonFormat {
    fn name(&self) -> &'static str {
        "json"
    }

    fn read_issues(
        &self,
        settings: &EsLintIssuesSettings,
        repository: &RepositorySettings,
        config: &EsLintIssuesConfig,
    ) -> Result<Vec<Issue>> {
        let files: Vec<FileResult> = serde_json::from_str(settings.log_content())
            .context("Failed to parse ESLint log as JSON format")?;

        let root = normalize_separators(&repository.root.to_string_lossy());
        let mut issues = Vec::new();

        for file in files {
            let affected_file = match resolve_file_path(&file.file_path, &root, config) {
                FileLocation::Project => None,
                FileLocation::File(path) => Some(path),
                FileLocation::Outside => {
                    tracing::warn!(
                        file = %file.file_path,
                        skipped = file.messages.len(),
                        "Ignored issues for file outside the repository root"
                    );
                    continue;
                }
            };

            tracing::debug!(file = %file.file_path, messages = file.messages.len(), "Reading file result");

            for message in file.messages {
                let priority = if message.fatal {
                    IssuePriority::Error
                } else {
                    IssuePriority::from_eslint_severity(message.severity)
                };

                let mut issue = Issue::new(message.message, priority)
                    .with_location(message.line, message.column)
                    .with_end_location(message.end_line, message.end_column)
                    .with_rule(message.rule_id);

                if let Some(path) = &affected_file {
                    issue = issue.with_file(path.clone());
                }

                issues.push(issue);
            }
        }

        Ok(issues)
    }
}

enum FileLocation {
    Project,
    File(PathBuf),
    Outside,
}

fn resolve_file_path(file_path: &str, root: &str, config: &EsLintIssuesConfig) -> FileLocation {
    let file_path = normalize_separators(file_path.trim());
    if file_path.is_empty() {
        return FileLocation::Project;
    }

    let relative = if is_absolute(&file_path) {
        strip_root(&file_path, root).and_then(collapse_relative)
    } else {
        collapse_relative(&file_path)
    };

    match relative {
        Some(relative) => FileLocation::File(PathBuf::from(relative)),
        None if config.skip_files_outside_repository => FileLocation::Outside,
        None => FileLocation::File(PathBuf::from(file_path)),
    }
}

/// Resolves `.` and `..` segments of a root-relative path.
/// Returns `None` when the path climbs above the root or names the root itself.
fn collapse_relative(path: &str) -> Option<String> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}

/// Converts Windows separators to `/` and drops a trailing separator
fn normalize_separators(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    match normalized.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => normalized,
    }
}

fn is_absolute(path: &str) -> bool {
    path.starts_with('/') || has_drive_letter(path)
}

fn has_drive_letter(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Strips `root` from `path`; drive-letter paths are compared case-insensitively
fn strip_root<'a>(path: &'a str, root: &str) -> Option<&'a str> {
    if root.is_empty() {
        return None;
    }

    let head = path.get(..root.len())?;
    let tail = &path[root.len()..];
    let matches = if has_drive_letter(root) {
        head.eq_ignore_ascii_case(root)
    } else {
        head == root
    };

    if !matches {
        return None;
    }

    let rest = if root.ends_with('/') {
        Some(tail)
    } else {
        tail.strip_prefix('/')
    };
    rest.filter(|rest| !rest.is_empty())
}
