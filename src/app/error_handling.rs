//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use crate::error::ArraylabError;
use tracing::error;

/// Handle fatal errors and exit with appropriate status code
///
/// - For `ArraylabError`: shows the user message, plus the full message in verbose mode
/// - For other errors: shows the error chain in verbose mode and exits with 1
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    std::process::exit(report_error(&error, verbose))
}

/// Print `error` to stderr and return the exit code it maps to
pub fn report_error(error: &anyhow::Error, verbose: u8) -> i32 {
    error!("Fatal error: {}", error);

    if let Some(arraylab_err) = error.downcast_ref::<ArraylabError>() {
        eprintln!("Error: {}", arraylab_err.user_message());

        if verbose >= 1 {
            eprintln!("\nDetails: {}", arraylab_err.developer_message());
        }

        arraylab_err.exit_code()
    } else {
        eprintln!("Error: {error}");

        if verbose >= 1 {
            eprintln!("\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                eprintln!("  {}: {}", i, cause);
            }
        }

        1
    }
}
