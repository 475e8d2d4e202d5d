//! Common test support utilities and fixtures
//!
//! Provides a canned-response transport so client tests never touch the
//! network.

#![allow(dead_code)]

use branch_scout::config::ClientConfig;
use branch_scout::github::{GitHubClient, HttpResponse, Transport, TransportError};
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex};
use url::Url;

pub const TEST_TOKEN: &str = "ghp_test_token_1234567890";

/// A request seen by [`MockTransport`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: HeaderMap,
}

/// Transport serving canned responses keyed by full URL
///
/// Unknown URLs answer 404.
#[derive(Default)]
pub struct MockTransport {
    routes: HashMap<String, Result<HttpResponse, TransportError>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with status 200 and the given JSON
    pub fn with_json(self, url: &str, body: Value) -> Self {
        self.with_response(url, 200, &body.to_string())
    }

    pub fn with_response(mut self, url: &str, status: u16, body: &str) -> Self {
        self.routes
            .insert(url.to_string(), Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn with_transport_error(mut self, url: &str, message: &str) -> Self {
        self.routes
            .insert(url.to_string(), Err(TransportError(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_url(&self) -> Option<String> {
        self.requests.borrow().last().map(|r| r.url.clone())
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &Url, headers: &HeaderMap) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });
        self.routes
            .get(url.as_str())
            .cloned()
            .unwrap_or_else(|| Ok(HttpResponse::new(404, r#"{"message":"Not Found"}"#)))
    }
}

pub fn test_config() -> ClientConfig {
    ClientConfig::builder(TEST_TOKEN)
        .build()
        .expect("Failed to build test config")
}

/// Client borrowing the mock so the test can inspect it afterwards
pub fn client_for(mock: &MockTransport) -> GitHubClient<&MockTransport> {
    GitHubClient::with_transport(test_config(), mock)
}

/// Shared in-memory log sink for `tracing_subscriber::fmt().with_writer(..)`
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer poisoned")).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .expect("log buffer poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a scoped subscriber and return everything it logged
pub fn capture_logs<F: FnOnce()>(f: F) -> String {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(buffer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    buffer.contents()
}
