//! Default transport backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};

use super::{BoxError, Header, HttpResponse, Transport};
use crate::error::{ClubhouseError, Result};

const USER_AGENT: &str = concat!("clubhouse/", env!("CARGO_PKG_VERSION"));

/// [`Transport`] implementation over a pooled `reqwest` client.
///
/// Cheaply cloneable; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Create a transport with the crate's default client settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(|e| ClubhouseError::Transport(Box::new(e)))?;

        Ok(Self { http })
    }

    /// Wrap an already-configured `reqwest` client.
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }

    async fn send(request: RequestBuilder) -> core::result::Result<HttpResponse, BoxError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }

    fn with_headers(mut request: RequestBuilder, headers: &[Header<'_>]) -> RequestBuilder {
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        request
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> core::result::Result<HttpResponse, BoxError> {
        Self::send(self.http.get(url)).await
    }

    async fn post(
        &self,
        url: &str,
        headers: &[Header<'_>],
        body: String,
    ) -> core::result::Result<HttpResponse, BoxError> {
        let request = Self::with_headers(self.http.post(url), headers).body(body);
        Self::send(request).await
    }

    async fn put(
        &self,
        url: &str,
        headers: &[Header<'_>],
        body: String,
    ) -> core::result::Result<HttpResponse, BoxError> {
        let request = Self::with_headers(self.http.put(url), headers).body(body);
        Self::send(request).await
    }

    async fn delete(&self, url: &str) -> core::result::Result<HttpResponse, BoxError> {
        Self::send(self.http.delete(url)).await
    }
}
