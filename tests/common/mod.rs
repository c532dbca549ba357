//! In-memory transport that records every call and replays a canned response.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use clubhouse::transport::Header;
use clubhouse::{BoxError, HttpResponse, Transport};

/// One call observed by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub method: &'static str,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

pub struct RecordingTransport {
    response: HttpResponse,
    calls: Mutex<Vec<Call>>,
}

impl RecordingTransport {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            response: HttpResponse::new(status, body),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// The single call made so far; panics unless exactly one was recorded.
    pub fn only_call(&self) -> Call {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one transport call: {calls:?}");
        calls.into_iter().next().unwrap()
    }

    fn record(
        &self,
        method: &'static str,
        url: &str,
        headers: &[Header<'_>],
        body: Option<String>,
    ) -> Result<HttpResponse, BoxError> {
        self.calls.lock().unwrap().push(Call {
            method,
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body,
        });
        Ok(self.response.clone())
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, BoxError> {
        self.record("GET", url, &[], None)
    }

    async fn post(
        &self,
        url: &str,
        headers: &[Header<'_>],
        body: String,
    ) -> Result<HttpResponse, BoxError> {
        self.record("POST", url, headers, Some(body))
    }

    async fn put(
        &self,
        url: &str,
        headers: &[Header<'_>],
        body: String,
    ) -> Result<HttpResponse, BoxError> {
        self.record("PUT", url, headers, Some(body))
    }

    async fn delete(&self, url: &str) -> Result<HttpResponse, BoxError> {
        self.record("DELETE", url, &[], None)
    }
}
