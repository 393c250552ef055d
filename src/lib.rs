//! # Arraylab
//!
//! A catalog of twenty array and object utilities with a small CLI around it.
//!
//! ## Usage
//!
//! ```bash
//! arraylab                      # the catalog, every entry collapsed
//! arraylab show 7               # the catalog with entry 7 expanded
//! arraylab browse               # toggle entries interactively
//! arraylab run chunkArray '[1,2,3,4,5]' 2
//! ```
//!
//! ## Modules
//!
//! - `core` - Pure utility functions over sequences, records and JSON values
//! - `catalog` - The worked examples, the function registry and the expandable view
//! - `config` - Layered TOML/environment settings
//! - `cli` - Argument parsing and command implementations
//! - `app` - Logging setup and fatal error reporting
//! - `error` - Error type with stable codes and exit statuses
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub use error::{ArraylabError, ErrorCode, Result};
