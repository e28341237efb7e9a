/*!
# Core Module

Core functionality for loading ESLint logs: error types and the
BOM-aware file reader.
*/

pub mod errors;
pub mod fs_utils;

pub use errors::{IssuesError, IssuesResult};
pub use fs_utils::{read_log_file, strip_utf8_bom, UTF8_BOM};
