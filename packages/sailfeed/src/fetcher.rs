//! Single-request page fetcher.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::error::FetchError;

/// HTTP fetcher for the listings-index page.
///
/// Issues exactly one GET per run, with no custom headers and the
/// client's default redirect handling. Network failures, timeouts and
/// non-2xx statuses all surface as [`FetchError`]; the pipeline treats
/// any of them as "zero listings available".
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Build a fetcher with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Fetch one page and return the decoded body.
    pub async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        info!(url = %url, "Fetching listings page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|e| FetchError::Request {
            url: url.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on an ephemeral port.
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\n\
             content-type: text/html\r\n\
             content-length: 12\r\n\
             connection: close\r\n\r\n\
             <p>hello</p>",
        )
        .await;

        let fetcher = Fetcher::new(Duration::from_secs(5)).unwrap();
        let body = fetcher.fetch_page(&url).await.unwrap();

        assert_eq!(body, "<p>hello</p>");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_error() {
        let url = serve_once(
            "HTTP/1.1 404 Not Found\r\n\
             content-length: 0\r\n\
             connection: close\r\n\r\n",
        )
        .await;

        let fetcher = Fetcher::new(Duration::from_secs(5)).unwrap();
        let err = fetcher.fetch_page(&url).await.unwrap_err();

        match err {
            FetchError::Status { status, .. } => assert_eq!(status.as_u16(), 404),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_error() {
        // Bind then drop to get a port with nothing listening on it.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let fetcher = Fetcher::new(Duration::from_secs(5)).unwrap();
        let err = fetcher.fetch_page(&format!("http://{}", addr)).await.unwrap_err();

        assert!(matches!(err, FetchError::Request { .. }));
    }
}
