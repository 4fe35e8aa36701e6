//! Error type for the headless driver.

use std::path::PathBuf;

use thiserror::Error;

use skyguard_core::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read tuning file {path}: {source}")]
    TuningFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid tuning: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to spawn game loop thread: {0}")]
    Thread(#[source] std::io::Error),

    #[error("simulation already running")]
    AlreadyRunning,

    #[error("simulation not started")]
    NotRunning,

    #[error("game loop has shut down")]
    Disconnected,

    #[error("shared state lock poisoned")]
    Poisoned,
}
