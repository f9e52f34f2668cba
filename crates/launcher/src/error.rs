//! Error types for the server launcher

use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Invalid launcher configuration: {0}")]
    InvalidConfig(String),

    #[error("Server build failed: {0}")]
    Build(String),

    #[error("Server failed to start: {0}")]
    Spawn(String),

    #[error("Server exited before becoming available: {0}")]
    Exited(ExitStatus),

    #[error("Server not available after {attempts} attempts within {timeout:?}")]
    StartupTimeout { attempts: usize, timeout: Duration },

    #[error("Server unavailable: {0}")]
    Unavailable(String),

    #[error("Server is already running")]
    AlreadyRunning,

    #[error("Server is not running")]
    NotRunning,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type LaunchResult<T> = Result<T, LaunchError>;
