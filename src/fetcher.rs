use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::traits::PageFetcher;

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Fetches deal pages over HTTP
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String> {
        info!("Fetching deal page {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {url}"))?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Failed to fetch deal page {}: {}",
                url,
                response.status()
            ));
        }

        let html = response
            .text()
            .await
            .with_context(|| format!("Failed to read body of {url}"))?;

        debug!("Received {} bytes from {}", html.len(), url);
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn local_fetcher() -> HttpFetcher {
        HttpFetcher {
            client: Client::builder().no_proxy().build().unwrap(),
        }
    }

    /// Answer a single request on a local port with `response`
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await.unwrap();
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn returns_body_on_success() {
        let url = serve_once(concat!(
            "HTTP/1.1 200 OK\r\n",
            "Content-Type: text/html\r\n",
            "Content-Length: 13\r\n",
            "Connection: close\r\n\r\n",
            "<p>deal</p>\r\n",
        ))
        .await;

        let html = local_fetcher().fetch_html(&url).await.unwrap();
        assert_eq!(html, "<p>deal</p>\r\n");
    }

    #[tokio::test]
    async fn error_status_is_fatal() {
        let url = serve_once(concat!(
            "HTTP/1.1 404 Not Found\r\n",
            "Content-Length: 0\r\n",
            "Connection: close\r\n\r\n",
        ))
        .await;

        let err = local_fetcher().fetch_html(&url).await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }
}
