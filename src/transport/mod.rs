//! HTTP transport abstraction.
//!
//! The client never talks to the network itself. It hands a fully built URL,
//! headers, and body to a [`Transport`] and interprets the [`HttpResponse`]
//! that comes back. Timeouts, TLS, connection pooling and cancellation all
//! belong to the transport.

mod http;

use std::sync::Arc;

use async_trait::async_trait;

pub use self::http::ReqwestTransport;

/// Error type returned by transports.
///
/// The client wraps it in [`ClubhouseError::Transport`](crate::ClubhouseError::Transport)
/// without altering it, so callers can downcast to the concrete error.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A header name/value pair sent with write requests.
pub type Header<'a> = (&'a str, &'a str);

/// Raw response handed back by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Undecoded response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a response from a status code and raw body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx status codes.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// An already-configured HTTP client exposing the four verbs used by the API.
///
/// Implementations must be safe to share between tasks; a [`Client`](crate::Client)
/// is only as concurrent as its transport.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET request.
    async fn get(&self, url: &str) -> Result<HttpResponse, BoxError>;

    /// Issue a POST request with the given headers and encoded body.
    async fn post(
        &self,
        url: &str,
        headers: &[Header<'_>],
        body: String,
    ) -> Result<HttpResponse, BoxError>;

    /// Issue a PUT request with the given headers and encoded body.
    async fn put(
        &self,
        url: &str,
        headers: &[Header<'_>],
        body: String,
    ) -> Result<HttpResponse, BoxError>;

    /// Issue a DELETE request.
    async fn delete(&self, url: &str) -> Result<HttpResponse, BoxError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get(&self, url: &str) -> Result<HttpResponse, BoxError> {
        (**self).get(url).await
    }

    async fn post(
        &self,
        url: &str,
        headers: &[Header<'_>],
        body: String,
    ) -> Result<HttpResponse, BoxError> {
        (**self).post(url, headers, body).await
    }

    async fn put(
        &self,
        url: &str,
        headers: &[Header<'_>],
        body: String,
    ) -> Result<HttpResponse, BoxError> {
        (**self).put(url, headers, body).await
    }

    async fn delete(&self, url: &str) -> Result<HttpResponse, BoxError> {
        (**self).delete(url).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn get(&self, url: &str) -> Result<HttpResponse, BoxError> {
        (**self).get(url).await
    }

    async fn post(
        &self,
        url: &str,
        headers: &[Header<'_>],
        body: String,
    ) -> Result<HttpResponse, BoxError> {
        (**self).post(url, headers, body).await
    }

    async fn put(
        &self,
        url: &str,
        headers: &[Header<'_>],
        body: String,
    ) -> Result<HttpResponse, BoxError> {
        (**self).put(url, headers, body).await
    }

    async fn delete(&self, url: &str) -> Result<HttpResponse, BoxError> {
        (**self).delete(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(HttpResponse::new(299, "").is_success());
        assert!(!HttpResponse::new(199, "").is_success());
        assert!(!HttpResponse::new(300, "").is_success());
        assert!(!HttpResponse::new(404, "").is_success());
    }
}
