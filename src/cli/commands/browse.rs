//! Browse command implementation
//!
//! A line-oriented version of the click-to-expand list: typing an entry
//! number toggles it, `c` collapses, `q` quits.

use crate::catalog::{Catalog, CatalogView};
use crate::error::ErrorExt;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

const PROMPT: &str = "Entry number to toggle, c to collapse, q to quit> ";

/// One parsed line of browse input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseInput {
    Toggle(usize),
    Collapse,
    Quit,
    Unknown,
}

impl BrowseInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "q" | "quit" | "exit" => Self::Quit,
            "c" | "collapse" => Self::Collapse,
            _ => line
                .parse::<usize>()
                .map(Self::Toggle)
                .unwrap_or(Self::Unknown),
        }
    }
}

/// Run the interactive loop until `q` or end of input
pub fn run_browse_command(
    catalog: &Catalog,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let mut view = CatalogView::new();
    write!(out, "{}\n{}", view.render(catalog), PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        let line = line.to_arraylab("Failed to read browse input")?;
        let command = BrowseInput::parse(&line);
        debug!("browse input {:?} -> {:?}", line, command);

        match command {
            BrowseInput::Quit => break,
            BrowseInput::Collapse => view.collapse(),
            BrowseInput::Toggle(entry) => {
                let toggled = entry
                    .checked_sub(1)
                    .map(|index| view.toggle(catalog, index));
                if !matches!(toggled, Some(Ok(()))) {
                    writeln!(out, "No entry {} (choose 1-{})", entry, catalog.len())?;
                }
            }
            BrowseInput::Unknown => {
                writeln!(out, "Unrecognized input: {}", line.trim())?;
            }
        }

        write!(out, "{}\n{}", view.render(catalog), PROMPT)?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}
