//! Run command implementation
//!
//! Calls a utility function by name with arguments given as JSON literals.

use crate::catalog::invoke;
use crate::config::OutputStyle;
use crate::error::{ArraylabError, ErrorCode, Result as ArraylabResult};
use anyhow::Result;
use serde_json::Value;
use std::io::Write;
use tracing::debug;

/// Parse each argument as a JSON literal
pub fn parse_json_args(args: &[String]) -> ArraylabResult<Vec<Value>> {
    args.iter()
        .enumerate()
        .map(|(i, raw)| {
            serde_json::from_str(raw).map_err(|e| {
                ArraylabError::invalid_argument_with_code(
                    ErrorCode::INVALID_TYPE,
                    format!("not valid JSON ({}): {}", e, raw),
                    None,
                )
                .with_argument(format!("#{}", i + 1))
            })
        })
        .collect()
}

/// Invoke `function` and print its JSON result
pub fn run_function_command(
    function: &str,
    args: &[String],
    style: OutputStyle,
    out: &mut impl Write,
) -> Result<()> {
    let values = parse_json_args(args)?;
    debug!("Invoking {} with {} argument(s)", function, values.len());

    let result = invoke(function, &values)?;
    writeln!(out, "{}", style.render(&result)?)?;
    Ok(())
}
