//! Application configuration.
//!
//! Every field has a default, so an absent or partial TOML file is valid.

use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Window, mount point and startup preferences.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Native window title.
    pub title: String,
    /// Initial native window width in points.
    pub window_width: f32,
    /// Initial native window height in points.
    pub window_height: f32,
    /// Id of the canvas element the web build mounts onto.
    pub canvas_id: String,
    /// Initial order of the move list.
    pub sort_ascending: bool,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Tic-Tac-Toe".to_string(),
            window_width: 760.0,
            window_height: 540.0,
            canvas_id: "tictactoe_canvas".to_string(),
            sort_ascending: true,
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub const DEFAULT_LOG_FILTER: &'static str = "info";

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(title = %config.title, "Config loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(ConfigError::new(format!(
                "Window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        if self.canvas_id.trim().is_empty() {
            return Err(ConfigError::new("canvas_id must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
