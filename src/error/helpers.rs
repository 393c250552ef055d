use super::{ArraylabError, ErrorCode};
use std::path::PathBuf;

/// Extension trait for convenient error conversion
pub trait ErrorExt<T> {
    /// Convert to ArraylabError with context
    fn to_arraylab(self, context: impl Into<String>) -> Result<T, ArraylabError>;

    /// Convert to a configuration error, remembering the file it came from
    fn to_config_error(
        self,
        message: impl Into<String>,
        path: Option<PathBuf>,
    ) -> Result<T, ArraylabError>;
}

impl<T, E> ErrorExt<T> for Result<T, E>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn to_arraylab(self, context: impl Into<String>) -> Result<T, ArraylabError> {
        self.map_err(|e| ArraylabError::other(context).with_source(e))
    }

    fn to_config_error(
        self,
        message: impl Into<String>,
        path: Option<PathBuf>,
    ) -> Result<T, ArraylabError> {
        self.map_err(|e| {
            ArraylabError::config_with_code(ErrorCode::CONFIG_PARSE_ERROR, message, path)
                .with_source(e)
        })
    }
}

/// Helper functions for common error scenarios
pub mod common {
    use super::*;

    /// A function was called with the wrong number of arguments
    pub fn arity_mismatch(function: &str, expected: usize, found: usize) -> ArraylabError {
        ArraylabError::invalid_argument_with_code(
            ErrorCode::INVALID_ARITY,
            format!(
                "{} takes {} argument(s) but {} were given",
                function, expected, found
            ),
            None,
        )
    }

    /// An argument had the wrong JSON shape
    pub fn type_mismatch(argument: &str, expected: &str) -> ArraylabError {
        ArraylabError::invalid_argument_with_code(
            ErrorCode::INVALID_TYPE,
            format!("expected {}", expected),
            Some(argument.to_string()),
        )
    }

    /// An operation needs at least one element
    pub fn empty_sequence(operation: &str) -> ArraylabError {
        ArraylabError::empty_input_with_code(
            ErrorCode::EMPTY_SEQUENCE,
            format!("{} requires at least one element", operation),
        )
    }

    /// A configuration file named explicitly does not exist
    pub fn config_not_found(path: impl AsRef<std::path::Path>) -> ArraylabError {
        ArraylabError::config_with_code(
            ErrorCode::CONFIG_NOT_FOUND,
            format!("Configuration file not found: {}", path.as_ref().display()),
            Some(path.as_ref().to_path_buf()),
        )
    }

    /// A 1-based catalog entry id is out of range
    pub fn entry_out_of_range(id: usize, len: usize) -> ArraylabError {
        ArraylabError::invalid_argument_with_code(
            ErrorCode::INVALID_INDEX,
            format!("entry {} does not exist (catalog has {} entries)", id, len),
            Some("entry".to_string()),
        )
    }
}
