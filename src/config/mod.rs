use crate::error::{ArraylabError, ErrorCode, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

pub mod loader;

pub use loader::{load_config, ConfigSources};

/// Name of the per-project configuration file
pub const PROJECT_CONFIG_FILE: &str = "arraylab.toml";

/// Location of the global configuration file, if a home directory exists
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "arraylab", "arraylab").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Check a `log_level` setting before it reaches the subscriber
///
/// Accepts `EnvFilter` syntax where every bare directive is a level name
/// (`info`, `warn,arraylab=trace`). A bare word that is not a level would be
/// read as a target name and silently filter everything else out.
pub fn validate_log_level(level: &str) -> Result<()> {
    let invalid = |reason: String| {
        ArraylabError::config_with_code(
            ErrorCode::CONFIG_INVALID_VALUE,
            format!("invalid log level '{}': {}", level, reason),
            None,
        )
    };

    if level.trim().is_empty() {
        return Err(invalid("empty filter".to_string()));
    }
    EnvFilter::try_new(level).map_err(|e| invalid(e.to_string()))?;

    for directive in level.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        let is_target_directive = directive.contains('=') || directive.contains('[');
        if !is_target_directive && directive.parse::<LevelFilter>().is_err() {
            return Err(invalid(format!(
                "'{}' is not one of trace, debug, info, warn, error, off",
                directive
            )));
        }
    }

    Ok(())
}

/// How `run` prints JSON results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    #[default]
    Compact,
    Pretty,
}

impl OutputStyle {
    pub fn render(&self, value: &serde_json::Value) -> Result<String> {
        let text = match self {
            Self::Compact => serde_json::to_string(value)?,
            Self::Pretty => serde_json::to_string_pretty(value)?,
        };
        Ok(text)
    }
}

impl FromStr for OutputStyle {
    type Err = ArraylabError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            other => Err(ArraylabError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                format!("unknown output style '{}' (expected compact or pretty)", other),
                None,
            )),
        }
    }
}

/// Settings as written in a configuration file; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub log_level: Option<String>,
    pub output: Option<OutputStyle>,
}

/// Effective settings after all sources are layered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArraylabConfig {
    pub log_level: Option<String>,
    pub output: OutputStyle,
}

impl ArraylabConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay the fields a file sets
    pub fn apply(&mut self, file: ConfigFile) {
        if let Some(level) = file.log_level {
            self.log_level = Some(level);
        }
        if let Some(output) = file.output {
            self.output = output;
        }
    }

    /// Apply `ARRAYLAB_LOG_LEVEL` and `ARRAYLAB_OUTPUT` from the process environment
    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_env_with(|name| std::env::var(name).ok())
    }

    /// Apply environment overrides read through `lookup`
    pub fn merge_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("ARRAYLAB_LOG_LEVEL") {
            validate_log_level(&level).map_err(|e| e.with_context("from ARRAYLAB_LOG_LEVEL"))?;
            self.log_level = Some(level);
        }

        if let Some(output) = lookup("ARRAYLAB_OUTPUT") {
            self.output = output
                .parse()
                .map_err(|e: ArraylabError| e.with_context("from ARRAYLAB_OUTPUT"))?;
        }

        Ok(())
    }
}
