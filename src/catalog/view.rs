//! Expandable list view over the catalog
//!
//! The view owns exactly one piece of state: which entry, if any, is open.
//! Selecting an entry opens it, selecting the open entry closes it, and at
//! most one entry is open at a time.

use super::Catalog;
use crate::error::{common, Result};

pub const TITLE: &str = "Array & Object Processing Problems";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CatalogView {
    selected: Option<usize>,
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    /// View with the entry at `index` (0-based) already open
    pub fn with_open(catalog: &Catalog, index: usize) -> Result<Self> {
        let mut view = Self::new();
        view.toggle(catalog, index)?;
        Ok(view)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Open the entry at `index`, or close it if it is already open
    pub fn toggle(&mut self, catalog: &Catalog, index: usize) -> Result<()> {
        if index >= catalog.len() {
            return Err(common::entry_out_of_range(index + 1, catalog.len()));
        }

        self.selected = if self.is_open(index) {
            None
        } else {
            Some(index)
        };
        Ok(())
    }

    pub fn collapse(&mut self) {
        self.selected = None;
    }

    /// Render the title, every question, the open entry's output, and each
    /// entry's toggle label
    pub fn render(&self, catalog: &Catalog) -> String {
        let mut out = format!("{}\n{}\n", TITLE, "=".repeat(TITLE.len()));

        for (index, entry) in catalog.entries().iter().enumerate() {
            out.push_str(&format!("\n{}\n", entry.question));
            if self.is_open(index) {
                out.push_str(&format!("    Output: {}\n", entry.display_output()));
                out.push_str("    [Collapse]\n");
            } else {
                out.push_str("    [Show Output]\n");
            }
        }

        out
    }
}
