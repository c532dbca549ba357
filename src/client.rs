//! Clubhouse API client.
//!
//! Builds request URLs, dispatches them through the injected [`Transport`]
//! and turns the responses into JSON values or typed errors.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::ApiVersion;
use crate::error::{ClubhouseError, Result};
use crate::response::interpret;
use crate::transport::{Header, Transport};

const JSON_HEADERS: &[Header<'static>] = &[("Content-Type", "application/json")];

/// Build the URL of an API resource.
///
/// The result is `{base_url}/{path}?token={token}`. Leading slashes on `path`
/// are dropped; the path is otherwise used as given. The token is
/// percent-encoded.
#[must_use]
pub(crate) fn build_url(base_url: &str, path: &str, token: &str) -> String {
    format!(
        "{}/{}?token={}",
        base_url,
        path.trim_start_matches('/'),
        urlencoding::encode(token)
    )
}

/// Clubhouse API client.
///
/// Holds a transport, a validated base URL and the API token, and exposes the
/// four HTTP verbs. Every call performs exactly one transport round-trip; no
/// retries, caching or pagination happen here.
///
/// # Example
///
/// ```no_run
/// use clubhouse::{Client, ReqwestTransport};
///
/// # async fn example() -> clubhouse::Result<()> {
/// let client = Client::v2(ReqwestTransport::new()?, "your-token");
/// let story = client.get("stories/42").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client<T> {
    transport: T,
    base_url: String,
    token: String,
}

impl<T> fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl<T: Transport> Client<T> {
    /// Create a client against an arbitrary base URL.
    ///
    /// # Arguments
    ///
    /// * `transport` - An already-configured HTTP transport
    /// * `base_url` - Absolute base URL, e.g. `https://api.clubhouse.io/api/v3`
    /// * `token` - API token, sent as the `token` query parameter
    ///
    /// # Errors
    ///
    /// Returns [`ClubhouseError::InvalidBaseUrl`] unless `base_url` is an
    /// absolute URL with a host.
    pub fn new(transport: T, base_url: &str, token: impl Into<String>) -> Result<Self> {
        let invalid = |reason: String| ClubhouseError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if !parsed.has_host() {
            return Err(invalid("URL has no host".to_string()));
        }

        Ok(Self::from_parts(transport, base_url, token.into()))
    }

    /// Create a client for one of the published API versions.
    pub fn for_version(transport: T, version: ApiVersion, token: impl Into<String>) -> Self {
        Self::from_parts(transport, version.base_url(), token.into())
    }

    /// Create a client for `https://api.clubhouse.io/api/v1`.
    pub fn v1(transport: T, token: impl Into<String>) -> Self {
        Self::for_version(transport, ApiVersion::V1, token)
    }

    /// Create a client for `https://api.clubhouse.io/api/v2`.
    pub fn v2(transport: T, token: impl Into<String>) -> Self {
        Self::for_version(transport, ApiVersion::V2, token)
    }

    /// Create a client for `https://api.clubhouse.io/api/beta`.
    pub fn beta(transport: T, token: impl Into<String>) -> Self {
        Self::for_version(transport, ApiVersion::Beta, token)
    }

    fn from_parts(transport: T, base_url: &str, token: String) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn url(&self, path: &str) -> String {
        build_url(&self.base_url, path, &self.token)
    }

    /// Make a GET request.
    ///
    /// # Errors
    ///
    /// Returns an API error for non-2xx responses, or the transport's error
    /// if no response was received.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Option<Value>> {
        let response = self
            .transport
            .get(&self.url(path))
            .await
            .map_err(ClubhouseError::Transport)?;

        tracing::debug!(status = response.status, "received response");
        interpret(&response)
    }

    /// Make a POST request with a JSON body.
    ///
    /// `params` is always sent; an empty map encodes as `{}`.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` cannot be encoded, the transport fails,
    /// or the API responds with a non-2xx status.
    #[tracing::instrument(skip(self, params))]
    pub async fn post<P: Serialize + ?Sized>(&self, path: &str, params: &P) -> Result<Option<Value>> {
        let body = serde_json::to_string(params).map_err(ClubhouseError::Encode)?;
        let response = self
            .transport
            .post(&self.url(path), JSON_HEADERS, body)
            .await
            .map_err(ClubhouseError::Transport)?;

        tracing::debug!(status = response.status, "received response");
        interpret(&response)
    }

    /// Make a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Same as [`Client::post`].
    #[tracing::instrument(skip(self, params))]
    pub async fn put<P: Serialize + ?Sized>(&self, path: &str, params: &P) -> Result<Option<Value>> {
        let body = serde_json::to_string(params).map_err(ClubhouseError::Encode)?;
        let response = self
            .transport
            .put(&self.url(path), JSON_HEADERS, body)
            .await
            .map_err(ClubhouseError::Transport)?;

        tracing::debug!(status = response.status, "received response");
        interpret(&response)
    }

    /// Make a DELETE request.
    ///
    /// The API answers deletes with an empty body, so success is normally `None`.
    ///
    /// # Errors
    ///
    /// Same as [`Client::get`].
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> Result<Option<Value>> {
        let response = self
            .transport
            .delete(&self.url(path))
            .await
            .map_err(ClubhouseError::Transport)?;

        tracing::debug!(status = response.status, "received response");
        interpret(&response)
    }
}
