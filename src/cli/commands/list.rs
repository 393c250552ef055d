//! List command implementation

use crate::catalog::{Catalog, CatalogView};
use anyhow::Result;
use std::io::Write;

/// Print one question per line
pub fn run_list_command(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    for entry in catalog.entries() {
        writeln!(out, "{}", entry.question)?;
    }
    Ok(())
}

/// Print the catalog with every entry collapsed
pub fn run_overview_command(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    write!(out, "{}", CatalogView::new().render(catalog))?;
    Ok(())
}
