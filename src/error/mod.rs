use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;
pub mod helpers;

#[cfg(test)]
mod tests;

pub use codes::{describe_error_code, ErrorCode};
pub use helpers::{common, ErrorExt};

/// The unified error type for arraylab
#[derive(Error, Debug)]
pub enum ArraylabError {
    #[error("[E{code:04}] Invalid argument: {message}")]
    InvalidArgument {
        code: u16,
        message: String,
        argument: Option<String>,
    },

    #[error("[E{code:04}] Empty input: {message}")]
    EmptyInput { code: u16, message: String },

    #[error("[E{code:04}] Insufficient data: {message}")]
    InsufficientData {
        code: u16,
        message: String,
        required: usize,
        found: usize,
    },

    #[error("[E{code:04}] Unknown function: {name}")]
    UnknownFunction { code: u16, name: String },

    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] {message}")]
    Other {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ArraylabError {
    /// Create an invalid argument error with default code
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            code: ErrorCode::INVALID_ARGUMENT_GENERIC,
            message: message.into(),
            argument: None,
        }
    }

    /// Create an invalid argument error with specific code and argument name
    pub fn invalid_argument_with_code(
        code: u16,
        message: impl Into<String>,
        argument: Option<String>,
    ) -> Self {
        Self::InvalidArgument {
            code,
            message: message.into(),
            argument,
        }
    }

    /// Create an empty input error with default code
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            code: ErrorCode::EMPTY_INPUT_GENERIC,
            message: message.into(),
        }
    }

    /// Create an empty input error with specific code
    pub fn empty_input_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::EmptyInput {
            code,
            message: message.into(),
        }
    }

    /// Create an insufficient data error recording how many values were needed
    pub fn insufficient_data(message: impl Into<String>, required: usize, found: usize) -> Self {
        Self::InsufficientData {
            code: ErrorCode::INSUFFICIENT_DATA_GENERIC,
            message: message.into(),
            required,
            found,
        }
    }

    /// Create an insufficient data error with specific code
    pub fn insufficient_data_with_code(
        code: u16,
        message: impl Into<String>,
        required: usize,
        found: usize,
    ) -> Self {
        Self::InsufficientData {
            code,
            message: message.into(),
            required,
            found,
        }
    }

    /// Create an unknown function error
    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::UnknownFunction {
            code: ErrorCode::UNKNOWN_FUNCTION,
            name: name.into(),
        }
    }

    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_GENERIC,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create a configuration error with specific code and path
    pub fn config_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            code: ErrorCode::OTHER_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Attach an underlying cause. Only variants that carry a source keep it.
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Config { source: s, .. } | Self::Other { source: s, .. } => {
                *s = Some(source.into());
            }
            _ => {}
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::InvalidArgument { message, .. }
            | Self::EmptyInput { message, .. }
            | Self::InsufficientData { message, .. }
            | Self::Config { message, .. }
            | Self::Other { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
            Self::UnknownFunction { .. } => {}
        }
        self
    }

    /// Name the argument an invalid argument error refers to
    pub fn with_argument(mut self, name: impl Into<String>) -> Self {
        if let Self::InvalidArgument {
            argument: ref mut a,
            ..
        } = self
        {
            *a = Some(name.into());
        }
        self
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } => 2,
            Self::EmptyInput { .. } => 3,
            Self::InsufficientData { .. } => 4,
            Self::UnknownFunction { .. } => 5,
            Self::Config { .. } => 6,
            Self::Other { .. } => 1,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::InvalidArgument { code, .. }
            | Self::EmptyInput { code, .. }
            | Self::InsufficientData { code, .. }
            | Self::UnknownFunction { code, .. }
            | Self::Config { code, .. }
            | Self::Other { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidArgument {
                message, argument, ..
            } => match argument {
                Some(arg) => format!("Invalid argument '{}': {}", arg, message),
                None => format!("Invalid argument: {}", message),
            },
            Self::EmptyInput { message, .. } => format!("Empty input: {}", message),
            Self::InsufficientData {
                message,
                required,
                found,
                ..
            } => format!(
                "{} (needs at least {}, found {})",
                message, required, found
            ),
            Self::UnknownFunction { name, .. } => {
                format!("No function named '{}'. Run `arraylab functions` to list them.", name)
            }
            Self::Config { message, path, .. } => match path {
                Some(p) => format!("Configuration problem in {}: {}", p.display(), message),
                None => format!("Configuration problem: {}", message),
            },
            Self::Other { message, .. } => message.clone(),
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        let mut message = format!("{} ({})", self, describe_error_code(self.code()));
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        message
    }
}

/// Type alias for Results using ArraylabError
pub type Result<T> = std::result::Result<T, ArraylabError>;

impl From<serde_json::Error> for ArraylabError {
    fn from(err: serde_json::Error) -> Self {
        Self::Other {
            code: ErrorCode::OTHER_SERIALIZATION,
            message: format!("JSON error: {}", err),
            source: Some(Box::new(err)),
        }
    }
}

impl From<std::io::Error> for ArraylabError {
    fn from(err: std::io::Error) -> Self {
        Self::Other {
            code: ErrorCode::OTHER_IO,
            message: format!("I/O error: {}", err),
            source: Some(Box::new(err)),
        }
    }
}
