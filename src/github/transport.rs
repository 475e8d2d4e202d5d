//! HTTP transport abstraction
//!
//! The client only ever issues blocking GET requests. Putting them behind the
//! [`Transport`] trait lets tests serve canned responses without a network.

use reqwest::blocking::Client;
use reqwest::header::HeaderMap;
use thiserror::Error;
use url::Url;

/// Raw response as seen by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// A request that never produced a response (DNS, TLS, connect, timeout)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Performs one blocking GET request
pub trait Transport {
    fn get(&self, url: &Url, headers: &HeaderMap) -> Result<HttpResponse, TransportError>;
}

/// Production transport backed by `reqwest::blocking`
///
/// No timeout is configured beyond reqwest's default.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &Url, headers: &HeaderMap) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .headers(headers.clone())
            .send()
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &Url, headers: &HeaderMap) -> Result<HttpResponse, TransportError> {
        (**self).get(url, headers)
    }
}
