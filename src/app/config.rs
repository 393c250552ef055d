//! Application configuration
//!
//! Combines command-line flags with the layered file/environment settings.

use crate::config::{load_config, ArraylabConfig, ConfigSources};
use crate::error::Result;
use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Working directory
    pub working_dir: PathBuf,
    /// Settings loaded from files and the environment
    pub settings: ArraylabConfig,
}

impl AppConfig {
    /// Load settings for this invocation
    pub fn new(verbose: u8, config_path: Option<PathBuf>) -> Result<Self> {
        let working_dir = std::env::current_dir()?;
        let settings = load_config(&ConfigSources::new(config_path, working_dir.clone()))?;

        Ok(Self {
            verbose,
            working_dir,
            settings,
        })
    }

    /// Replace the loaded settings
    pub fn with_settings(mut self, settings: ArraylabConfig) -> Self {
        self.settings = settings;
        self
    }

    /// Get the log filter based on verbosity, falling back to the configured level
    pub fn log_level(&self) -> String {
        match self.verbose {
            0 => self
                .settings
                .log_level
                .clone()
                .unwrap_or_else(|| "warn".to_string()),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            working_dir: PathBuf::from("."),
            settings: ArraylabConfig::default(),
        }
    }
}
