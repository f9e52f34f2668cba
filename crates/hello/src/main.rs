//! vetting-hello - greeting server binary

use std::net::SocketAddr;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "vetting-hello")]
#[command(about = "Answers every HTTP request with a greeting")]
#[command(version)]
struct Cli {
    /// Listen address
    #[arg(long, env = "HELLO_ADDR", default_value = vetting_hello::DEFAULT_ADDR)]
    addr: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!("vetting-hello v{}", env!("CARGO_PKG_VERSION"));

    vetting_hello::serve(cli.addr).await
}
