//! Command-line interface for the native build.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{AppConfig, ConfigError};

/// Tic-tac-toe with a time-travelling move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with jump-to-any-move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start with the move list newest first
    #[arg(long)]
    pub descending: bool,

    /// Log filter when RUST_LOG is unset (e.g. "debug", "tictactoe=trace")
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl Cli {
    /// Filter to log with until the config file has been read
    pub fn initial_log_filter(&self) -> &str {
        self.log_filter
            .as_deref()
            .unwrap_or(AppConfig::DEFAULT_LOG_FILTER)
    }

    /// Config file (or defaults) with command-line overrides applied
    pub fn resolve_config(&self) -> Result<AppConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };
        if self.descending {
            config.sort_ascending = false;
        }
        if let Some(filter) = &self.log_filter {
            config.log_filter = filter.clone();
        }
        Ok(config)
    }
}
