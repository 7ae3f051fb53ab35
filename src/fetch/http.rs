//! `reqwest`-backed fetcher.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use reqwest::header::{HeaderMap, HeaderValue, REFERER};
use url::Url;

use super::{FetchError, Fetcher};
use crate::error::{GrabberError, Result};

/// Fetcher that issues plain HTTP GET requests.
///
/// Every request carries the configured `User-Agent` and `Referer`; the
/// timeout covers the whole request including the body.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use fullsize_grabber::HttpFetcher;
///
/// let fetcher = HttpFetcher::new(
///     Duration::from_secs(45),
///     "Mozilla/5.0",
///     Some("https://www.starstyle.com/celebrity/olivia-rodrigo/"),
/// )
/// .unwrap();
/// ```
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str, referer: Option<&str>) -> Result<Self> {
        let client = client_builder(timeout, user_agent, referer)?.build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> std::result::Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(classify)?;

        let body = response.bytes().await.map_err(classify)?;
        tracing::debug!("Fetched {} bytes from {url}", body.len());
        Ok(body.to_vec())
    }
}

fn client_builder(
    timeout: Duration,
    user_agent: &str,
    referer: Option<&str>,
) -> Result<ClientBuilder> {
    let mut headers = HeaderMap::new();
    if let Some(referer) = referer {
        let value = HeaderValue::from_str(referer)
            .map_err(|e| GrabberError::Config(format!("invalid referer {referer:?}: {e}")))?;
        headers.insert(REFERER, value);
    }

    Ok(Client::builder()
        .user_agent(user_agent)
        .default_headers(headers)
        .timeout(timeout))
}

fn classify(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else if let Some(status) = e.status() {
        FetchError::Status(status.as_u16())
    } else {
        FetchError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one connection with a canned response, or hold it open
    /// without answering when `reply` is `None`.
    async fn one_shot_server(reply: Option<&'static str>) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            match reply {
                Some(reply) => {
                    let _ = socket.write_all(reply.as_bytes()).await;
                    let _ = socket.shutdown().await;
                }
                None => tokio::time::sleep(Duration::from_secs(30)).await,
            }
        });
        Url::parse(&format!("http://{addr}/photo.jpg")).unwrap()
    }

    // Loopback only, so ignore any proxy configured in the environment.
    fn fetcher(timeout: Duration) -> HttpFetcher {
        let client = client_builder(timeout, "Mozilla/5.0", Some("http://127.0.0.1/"))
            .unwrap()
            .no_proxy()
            .build()
            .unwrap();
        HttpFetcher::from_client(client)
    }

    #[tokio::test]
    async fn ok_body_returned() {
        let url = one_shot_server(Some(
            "HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhello",
        ))
        .await;
        let body = fetcher(Duration::from_secs(5)).fetch(&url).await.unwrap();
        assert_eq!(body, b"hello");
    }

    #[tokio::test]
    async fn sends_user_agent_and_referer() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = tokio::sync::oneshot::channel();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let _ = tx.send(String::from_utf8_lossy(&buf[..n]).to_lowercase());
            let _ = socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                .await;
        });

        let url = Url::parse(&format!("http://{addr}/")).unwrap();
        fetcher(Duration::from_secs(5)).fetch(&url).await.unwrap();

        let request = rx.await.unwrap();
        assert!(request.contains("user-agent: mozilla/5.0"), "{request}");
        assert!(request.contains("referer: http://127.0.0.1/"), "{request}");
    }

    #[tokio::test]
    async fn not_found_is_status_error() {
        let url = one_shot_server(Some(
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        ))
        .await;
        let err = fetcher(Duration::from_secs(5)).fetch(&url).await.unwrap_err();
        assert_eq!(err, FetchError::Status(404));
    }

    #[tokio::test]
    async fn hung_server_times_out() {
        let url = one_shot_server(None).await;
        let err = fetcher(Duration::from_millis(200))
            .fetch(&url)
            .await
            .unwrap_err();
        assert_eq!(err, FetchError::Timeout);
    }

    #[tokio::test]
    async fn refused_connection_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let url = Url::parse(&format!("http://{addr}/x.jpg")).unwrap();
        let err = fetcher(Duration::from_secs(5)).fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
    }

    #[test]
    fn invalid_referer_rejected() {
        let result = HttpFetcher::new(Duration::from_secs(1), "ua", Some("bad\nvalue"));
        assert!(matches!(result, Err(GrabberError::Config(_))));
    }
}
