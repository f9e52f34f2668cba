//! Greeting server
//!
//! Answers every request, on any path and method, with `Hi there`.

use std::net::SocketAddr;

use axum::Router;
use tracing::info;

pub const GREETING: &str = "Hi there";

/// Default listen address
pub const DEFAULT_ADDR: &str = "127.0.0.1:5000";

pub fn router() -> Router {
    Router::new().fallback(greet)
}

async fn greet() -> &'static str {
    GREETING
}

/// Serve until ctrl-c or SIGTERM
pub async fn serve(addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use tower::ServiceExt;
    use vetting_assert::{equal, Panicking};

    use super::*;

    async fn call(method: Method, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request");
        let response = router().oneshot(request).await.expect("response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn test_root_greets() {
        let (status, body) = call(Method::GET, "/").await;
        equal!(Panicking, status, StatusCode::OK);
        equal!(Panicking, body.as_str(), GREETING);
    }

    #[tokio::test]
    async fn test_any_path_and_method_greets() {
        let (status, body) = call(Method::POST, "/some/where?x=1").await;
        equal!(Panicking, status, StatusCode::OK);
        equal!(Panicking, body.as_str(), GREETING);
    }
}
