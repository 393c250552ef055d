//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use crate::app::AppConfig;
use crate::catalog::Catalog;
use crate::cli::args::Commands;
use crate::cli::commands::*;
use anyhow::Result;
use std::io::{self, Write};
use tracing::debug;

/// Execute a CLI command based on the parsed arguments
pub fn execute_command(command: Option<Commands>, app: &AppConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Some(Commands::List) => run_list_command(&load_catalog(), &mut out),
        Some(Commands::Show { entry }) => run_show_command(&load_catalog(), entry, &mut out),
        Some(Commands::Browse) => {
            let stdin = io::stdin();
            run_browse_command(&load_catalog(), stdin.lock(), &mut out)
        }
        Some(Commands::Run { function, args }) => {
            run_function_command(&function, &args, app.settings.output, &mut out)
        }
        Some(Commands::Functions) => run_functions_command(&mut out),
        None => {
            // Default to the collapsed catalog, as the page looks on first load
            run_overview_command(&load_catalog(), &mut out)
        }
    }?;

    out.flush()?;
    Ok(())
}

fn load_catalog() -> Catalog {
    let catalog = Catalog::load();
    debug!("Loaded catalog with {} entries", catalog.len());
    catalog
}
