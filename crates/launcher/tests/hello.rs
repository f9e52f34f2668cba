//! Builds and runs the real `vetting-hello` binary through cargo.
//!
//! Compiling the server takes a while, so this is opt-in:
//! `cargo test -p vetting-launcher --test hello -- --ignored`

use std::net::TcpListener;
use std::path::PathBuf;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use vetting_assert::{equal, is_false, is_true, Panicking};
use vetting_launcher::{AvailabilityChecker, HttpChecker, LauncherConfig, ServerLauncher};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_test_writer()
        .try_init();
}

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn free_addr() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    listener.local_addr().expect("local addr").to_string()
}

#[tokio::test]
#[ignore = "builds vetting-hello with cargo"]
async fn hello_server_lifecycle() {
    init_tracing();

    let addr = free_addr();
    let base_url = format!("http://{addr}/");
    let config = LauncherConfig::new(workspace_root(), "vetting-hello")
        .package("vetting-hello")
        .arg("--addr")
        .arg(addr.as_str())
        .env("RUST_LOG", "info");
    let checker = HttpChecker::new(base_url.as_str()).expect("http client");
    let mut launcher = ServerLauncher::new(config, checker).expect("valid config");

    launcher
        .start_and_wait(Duration::from_secs(180))
        .await
        .expect("vetting-hello should start");

    let body = reqwest::get(base_url.as_str())
        .await
        .expect("request")
        .text()
        .await
        .expect("body");
    equal!(Panicking, body.as_str(), "Hi there");

    let build_dir = launcher.build_dir().expect("build dir").to_path_buf();
    launcher.end_and_clean().await.expect("clean shutdown");

    is_false!(Panicking, build_dir.exists());
    let after = HttpChecker::new(base_url.as_str()).expect("http client");
    is_true!(Panicking, after.ping().await.is_err(), "server still answers at {base_url}");
}
