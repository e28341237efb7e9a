/*!
# Error System for ESLint Issues

Precondition and I/O failures raised while building settings.
Parsing and configuration layers report through `anyhow` instead.
*/

use thiserror::Error;

/// Result of settings construction
pub type IssuesResult<T> = Result<T, IssuesError>;

/// Errors raised while constructing settings
#[derive(Error, Debug)]
pub enum IssuesError {
    /// A required argument was not supplied
    #[error("Required argument is missing: {param}")]
    InvalidArgument { param: &'static str },

    /// An argument was supplied but carries no usable value
    #[error("Argument is out of range: {param} must not be empty or whitespace")]
    OutOfRange { param: &'static str },

    /// The log file could not be read
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IssuesError {
    pub fn invalid_argument(param: &'static str) -> Self {
        Self::InvalidArgument { param }
    }

    pub fn out_of_range(param: &'static str) -> Self {
        Self::OutOfRange { param }
    }

    /// Name of the offending parameter, if the error is a precondition failure
    pub fn param(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { param } | Self::OutOfRange { param } => Some(param),
            Self::Io(_) => None,
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_names() {
        assert_eq!(IssuesError::invalid_argument("path").param(), Some("path"));
        assert_eq!(IssuesError::out_of_range("content").param(), Some("content"));

        let io = IssuesError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(io.param(), None);
        assert!(io.is_io());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            IssuesError::invalid_argument("format").to_string(),
            "Required argument is missing: format"
        );
        assert!(IssuesError::out_of_range("content")
            .to_string()
            .contains("content"));
    }

    #[test]
    fn test_io_error_is_transparent() {
        let inner = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = IssuesError::from(inner);
        assert_eq!(err.to_string(), "denied");
    }
}
