//! Launcher configuration

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::warn;

use crate::error::{LaunchError, LaunchResult};

/// Cargo executable override
pub const CARGO_ENV: &str = "VETTING_CARGO";

/// Startup timeout override, in milliseconds
pub const STARTUP_TIMEOUT_ENV: &str = "VETTING_STARTUP_TIMEOUT_MS";

/// Configuration for building and running a server binary
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Cargo project (or workspace) directory the binary is built from
    pub workdir: PathBuf,

    /// Binary target name, as passed to `cargo build --bin`
    pub bin: String,

    /// Package that owns the binary, when the workdir is a workspace
    pub package: Option<String>,

    /// Cargo executable
    pub cargo: PathBuf,

    /// Extra arguments for the server process
    pub args: Vec<String>,

    /// Extra environment variables for the server process
    pub env: Vec<(String, String)>,

    /// Default wait for the server to become available
    pub startup_timeout: Duration,

    /// Delay between two availability checks
    pub poll_interval: Duration,

    /// How long a terminated server may take to exit before it is killed
    pub shutdown_grace: Duration,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            workdir: PathBuf::from("."),
            bin: String::new(),
            package: None,
            cargo: default_cargo(),
            args: Vec::new(),
            env: Vec::new(),
            startup_timeout: default_startup_timeout(),
            poll_interval: Duration::from_millis(100),
            shutdown_grace: Duration::from_millis(500),
        }
    }
}

impl LauncherConfig {
    pub fn new(workdir: impl Into<PathBuf>, bin: impl Into<String>) -> Self {
        Self {
            workdir: workdir.into(),
            bin: bin.into(),
            ..Default::default()
        }
    }

    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn validate(&self) -> LaunchResult<()> {
        if self.bin.trim().is_empty() {
            return Err(LaunchError::InvalidConfig("empty binary name".to_string()));
        }
        if !self.workdir.is_dir() {
            return Err(LaunchError::InvalidConfig(format!(
                "working directory {} does not exist",
                self.workdir.display()
            )));
        }
        if self.poll_interval.is_zero() {
            return Err(LaunchError::InvalidConfig("poll interval must be positive".to_string()));
        }
        Ok(())
    }

    /// Where cargo puts the binary inside `target_dir`
    pub fn binary_path(&self, target_dir: &Path) -> PathBuf {
        target_dir
            .join("debug")
            .join(format!("{}{}", self.bin, std::env::consts::EXE_SUFFIX))
    }
}

/// `$VETTING_CARGO`, then the `$CARGO` set by cargo for tests, then `cargo`
fn default_cargo() -> PathBuf {
    std::env::var_os(CARGO_ENV)
        .or_else(|| std::env::var_os("CARGO"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("cargo"))
}

fn default_startup_timeout() -> Duration {
    const FALLBACK: Duration = Duration::from_secs(30);

    match std::env::var(STARTUP_TIMEOUT_ENV) {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(ms) => Duration::from_millis(ms),
            Err(e) => {
                warn!("Ignoring {}={:?}: {}", STARTUP_TIMEOUT_ENV, raw, e);
                FALLBACK
            }
        },
        Err(_) => FALLBACK,
    }
}
