//! Layered configuration loading
//!
//! Sources are applied in order, later ones winning:
//! 1. Built-in defaults
//! 2. The global file (`<config dir>/arraylab/config.toml`)
//! 3. The project file: an explicit `--config` path, or `arraylab.toml` in
//!    the working directory
//! 4. `ARRAYLAB_*` environment variables

use super::{
    global_config_path, validate_log_level, ArraylabConfig, ConfigFile, PROJECT_CONFIG_FILE,
};
use crate::error::{common, ArraylabError, ErrorCode, ErrorExt, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where configuration files are looked up
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    pub global: Option<PathBuf>,
    pub explicit: Option<PathBuf>,
    pub working_dir: PathBuf,
}

impl ConfigSources {
    pub fn new(explicit: Option<PathBuf>, working_dir: PathBuf) -> Self {
        Self {
            global: global_config_path(),
            explicit,
            working_dir,
        }
    }

    /// The project file that applies, if any
    fn project_file(&self) -> Result<Option<PathBuf>> {
        if let Some(path) = &self.explicit {
            if !path.exists() {
                return Err(common::config_not_found(path));
            }
            return Ok(Some(path.clone()));
        }

        let candidate = self.working_dir.join(PROJECT_CONFIG_FILE);
        Ok(candidate.exists().then_some(candidate))
    }
}

/// Load the effective configuration from files and the process environment
pub fn load_config(sources: &ConfigSources) -> Result<ArraylabConfig> {
    let mut config = load_files(sources)?;
    config.merge_env_vars()?;
    Ok(config)
}

/// Layer defaults, the global file, and the project file
pub fn load_files(sources: &ConfigSources) -> Result<ArraylabConfig> {
    let mut config = ArraylabConfig::new();

    if let Some(global) = sources.global.as_deref().filter(|p| p.exists()) {
        config.apply(read_config_file(global)?);
    }

    if let Some(project) = sources.project_file()? {
        config.apply(read_config_file(&project)?);
    }

    Ok(config)
}

/// Parse one TOML configuration file
pub fn read_config_file(path: &Path) -> Result<ConfigFile> {
    debug!("Loading configuration from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| {
        ArraylabError::config_with_code(
            ErrorCode::CONFIG_IO_ERROR,
            format!("Failed to read {}", path.display()),
            Some(path.to_path_buf()),
        )
        .with_source(e)
    })?;

    let file: ConfigFile = toml::from_str(&content).to_config_error(
        format!("Invalid configuration in {}", path.display()),
        Some(path.to_path_buf()),
    )?;

    if let Some(level) = &file.log_level {
        validate_log_level(level).map_err(|e| e.with_context(format!("in {}", path.display())))?;
    }

    Ok(file)
}
