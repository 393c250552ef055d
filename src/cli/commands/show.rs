//! Show command implementation

use crate::catalog::{Catalog, CatalogView};
use crate::error::common;
use anyhow::Result;
use std::io::Write;

/// Print the catalog with the entry numbered `entry` (1-based) expanded
pub fn run_show_command(catalog: &Catalog, entry: usize, out: &mut impl Write) -> Result<()> {
    let index = entry
        .checked_sub(1)
        .ok_or_else(|| common::entry_out_of_range(entry, catalog.len()))?;
    let view = CatalogView::with_open(catalog, index)?;

    write!(out, "{}", view.render(catalog))?;
    Ok(())
}
