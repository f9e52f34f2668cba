//! Server management - building, spawning and health checking a server binary

use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};

use tempfile::TempDir;
use tokio::process::{Child, Command};
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};

use crate::checker::AvailabilityChecker;
use crate::config::LauncherConfig;
use crate::error::{LaunchError, LaunchResult};

/// A server process together with the directory it was built into
struct Running {
    child: Child,
    build_dir: TempDir,
}

/// Launches a server binary and waits for it to become available
pub struct ServerLauncher<C> {
    config: LauncherConfig,
    checker: C,
    running: Option<Running>,
}

impl<C: AvailabilityChecker> ServerLauncher<C> {
    pub fn new(config: LauncherConfig, checker: C) -> LaunchResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            checker,
            running: None,
        })
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Process id of the running server
    pub fn pid(&self) -> Option<u32> {
        self.running.as_ref().and_then(|r| r.child.id())
    }

    /// Temporary target directory of the running server
    pub fn build_dir(&self) -> Option<&Path> {
        self.running.as_ref().map(|r| r.build_dir.path())
    }

    /// Build and start the server, waiting up to the configured startup timeout
    pub async fn start(&mut self) -> LaunchResult<()> {
        self.start_and_wait(self.config.startup_timeout).await
    }

    /// Build and start the server, then wait until the checker answers.
    ///
    /// On timeout the server is stopped and cleaned before returning.
    pub async fn start_and_wait(&mut self, wait_for: Duration) -> LaunchResult<()> {
        if self.running.is_some() {
            return Err(LaunchError::AlreadyRunning);
        }

        let build_dir = tempfile::Builder::new().prefix("vetting-build-").tempdir()?;
        self.build(build_dir.path()).await?;

        let binary = self.config.binary_path(build_dir.path());
        info!("Spawning {}", binary.display());

        let child = Command::new(&binary)
            .args(&self.config.args)
            .envs(self.config.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .current_dir(&self.config.workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                LaunchError::Spawn(format!("Failed to spawn {}: {}", binary.display(), e))
            })?;

        self.running = Some(Running { child, build_dir });

        match self.wait_until_available(wait_for).await {
            Ok(attempts) => {
                info!("Server is available after {} check(s)", attempts);
                Ok(())
            }
            Err(e) => {
                if let Err(clean_err) = self.end_and_clean().await {
                    warn!("Cleanup after failed start: {}", clean_err);
                }
                Err(e)
            }
        }
    }

    /// Stop the server and remove its build directory
    pub async fn end_and_clean(&mut self) -> LaunchResult<()> {
        let Running { mut child, build_dir } = self.running.take().ok_or(LaunchError::NotRunning)?;

        if let Some(pid) = child.id() {
            info!("Stopping server (pid: {})", pid);
            terminate(pid);

            match timeout(self.config.shutdown_grace, child.wait()).await {
                Ok(status) => {
                    let status = status?;
                    debug!("Server exited with {}", status);
                }
                Err(_) => {
                    warn!("Server ignored termination, killing it");
                    child.kill().await?;
                }
            }
        }

        build_dir.close()?;
        Ok(())
    }

    async fn build(&self, target_dir: &Path) -> LaunchResult<()> {
        let mut cmd = Command::new(&self.config.cargo);
        cmd.arg("build").arg("--bin").arg(&self.config.bin);
        if let Some(package) = &self.config.package {
            cmd.arg("-p").arg(package);
        }
        cmd.arg("--target-dir")
            .arg(target_dir)
            .current_dir(&self.config.workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        info!("Building {} in {}", self.config.bin, self.config.workdir.display());

        let output = cmd.output().await.map_err(|e| {
            LaunchError::Build(format!("Failed to run {}: {}", self.config.cargo.display(), e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LaunchError::Build(format!(
                "{} ({})",
                output.status,
                last_lines(&stderr, 20)
            )));
        }
        Ok(())
    }

    /// Poll the checker until it answers, the process dies or time runs out
    async fn wait_until_available(&mut self, wait_for: Duration) -> LaunchResult<usize> {
        let poll_interval = self.config.poll_interval;
        let start = Instant::now();
        let mut attempts = 0;

        loop {
            let running = self.running.as_mut().ok_or(LaunchError::NotRunning)?;
            if let Some(status) = running.child.try_wait()? {
                return Err(LaunchError::Exited(status));
            }

            let remaining = match wait_for.checked_sub(start.elapsed()) {
                Some(remaining) if !remaining.is_zero() => remaining,
                _ => break,
            };

            attempts += 1;
            match timeout(remaining, self.checker.ping()).await {
                Ok(Ok(())) => return Ok(attempts),
                Ok(Err(e)) => {
                    if attempts == 1 {
                        info!("Waiting for server to become available...");
                    }
                    debug!("Availability check {} failed: {}", attempts, e);
                }
                Err(_) => break,
            }

            sleep(poll_interval.min(wait_for.saturating_sub(start.elapsed()))).await;
        }

        Err(LaunchError::StartupTimeout {
            attempts,
            timeout: wait_for,
        })
    }
}

impl<C> Drop for ServerLauncher<C> {
    fn drop(&mut self) {
        if let Some(mut running) = self.running.take() {
            if let Err(e) = running.child.start_kill() {
                warn!("Failed to kill server on drop: {}", e);
            }
        }
    }
}

/// Ask the process to shut down gracefully
fn terminate(pid: u32) {
    #[cfg(unix)]
    {
        use nix::sys::signal::{kill, Signal};
        use nix::unistd::Pid;

        if let Err(e) = kill(Pid::from_raw(pid as i32), Signal::SIGTERM) {
            debug!("SIGTERM to {} failed: {}", pid, e);
        }
    }

    #[cfg(not(unix))]
    let _ = pid;
}

fn last_lines(text: &str, n: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    lines[lines.len().saturating_sub(n)..].join("\n")
}
