//! Availability checks - is the launched server answering yet?

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;

use crate::error::{LaunchError, LaunchResult};

/// Probe used while waiting for a server to come up.
///
/// `Ok(())` means the server is available. Any error means "not yet".
#[async_trait]
pub trait AvailabilityChecker: Send + Sync {
    async fn ping(&self) -> LaunchResult<()>;
}

#[async_trait]
impl<C: AvailabilityChecker + ?Sized> AvailabilityChecker for Arc<C> {
    async fn ping(&self) -> LaunchResult<()> {
        (**self).ping().await
    }
}

#[async_trait]
impl<C: AvailabilityChecker + ?Sized> AvailabilityChecker for Box<C> {
    async fn ping(&self) -> LaunchResult<()> {
        (**self).ping().await
    }
}

/// Available once a GET on `base_url` gets any HTTP response.
///
/// The status code is not inspected: a 404 still proves the server is up.
#[derive(Debug, Clone)]
pub struct HttpChecker {
    base_url: String,
    client: reqwest::Client,
}

impl HttpChecker {
    pub fn new(base_url: impl Into<String>) -> LaunchResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl AvailabilityChecker for HttpChecker {
    async fn ping(&self) -> LaunchResult<()> {
        self.client.get(&self.base_url).send().await?;
        Ok(())
    }
}

/// Available once a TCP connection to `addr` succeeds.
#[derive(Debug, Clone, Copy)]
pub struct TcpChecker {
    addr: SocketAddr,
}

impl TcpChecker {
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }
}

#[async_trait]
impl AvailabilityChecker for TcpChecker {
    async fn ping(&self) -> LaunchResult<()> {
        TcpStream::connect(self.addr)
            .await
            .map(drop)
            .map_err(|e| LaunchError::Unavailable(format!("{}: {}", self.addr, e)))
    }
}
