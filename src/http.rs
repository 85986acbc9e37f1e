//! HTTP client wrapper for WebHDFS requests.

use reqwest::{Client, Method, Url};

use crate::config::Configuration;
use crate::error::{Result, WebHdfsError};

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// HTTP client for making requests to a NameNode.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a client honoring the timeouts, proxy and pool settings of `config`.
    pub fn from_config(config: &Configuration) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(max) = config.max_idle_per_host() {
            builder = builder.pool_max_idle_per_host(max);
        }
        // Only an explicitly configured proxy is used, never HTTP_PROXY & co.
        match config.proxy() {
            Some(proxy) => {
                let proxy = reqwest::Proxy::all(proxy)
                    .map_err(|e| WebHdfsError::Config(format!("Invalid proxy: {}", e)))?;
                builder = builder.proxy(proxy);
            }
            None => builder = builder.no_proxy(),
        }

        let client = builder
            .build()
            .map_err(|e| WebHdfsError::Config(format!("Failed to build client: {}", e)))?;

        Ok(Self { client })
    }

    /// Issue one request and read the whole body.
    ///
    /// Any status is returned as-is; only transport failures are errors here.
    pub async fn send(&self, method: Method, url: Url) -> Result<HttpResponse> {
        let response = self.client.request(method, url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
