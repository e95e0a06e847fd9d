//! Top-level application error

use derive_more::{Display, Error, From};

use crate::config::ConfigError;

/// Errors that stop the application from starting
#[derive(Debug, Display, Error, From)]
pub enum AppError {
    #[display("{_0}")]
    Config(ConfigError),
    #[display("UI error: {_0}")]
    Ui(eframe::Error),
}
