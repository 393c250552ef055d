//! Functions command implementation

use crate::catalog::FUNCTIONS;
use anyhow::Result;
use std::io::Write;

/// Print every function signature with a one-line summary
pub fn run_functions_command(out: &mut impl Write) -> Result<()> {
    let width = FUNCTIONS
        .iter()
        .map(|spec| spec.signature().len())
        .max()
        .unwrap_or(0);

    for spec in FUNCTIONS {
        writeln!(out, "{:<width$}  {}", spec.signature(), spec.summary, width = width)?;
    }
    Ok(())
}
