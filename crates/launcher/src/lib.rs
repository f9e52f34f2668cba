//! Vetting server launcher
//!
//! Runs a server binary from a cargo project for the duration of an
//! integration test:
//! - Builds the binary into a private, temporary target directory
//! - Spawns it and polls an [`AvailabilityChecker`] until it answers
//! - Terminates the process and removes the build directory afterwards
//!
//! ```text
//! ServerLauncher::new(config, checker)
//!   ├── start_and_wait(timeout)   cargo build -> spawn -> ping until ready
//!   └── end_and_clean()           SIGTERM -> grace period -> kill -> rm build dir
//! ```

pub mod checker;
pub mod config;
pub mod error;
pub mod launcher;

pub use checker::{AvailabilityChecker, HttpChecker, TcpChecker};
pub use config::LauncherConfig;
pub use error::{LaunchError, LaunchResult};
pub use launcher::ServerLauncher;
