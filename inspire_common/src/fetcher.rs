//! Single-shot HTTP retrieval of the remote payload.
//!
//! This is the one place where network failures are turned into "no payload":
//! connection and DNS errors, timeouts, TLS failures, non-2xx answers and
//! bodies that are not JSON all end up as `None` and a debug log line.
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::net::API_USER_AGENT;

/// Raw JSON document returned by the remote source.
///
/// Only the extractor looks inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct RemotePayload(pub Value);

impl From<Value> for RemotePayload {
    fn from(value: Value) -> Self {
        RemotePayload(value)
    }
}

/// Anything able to produce a remote payload, or nothing.
pub trait PayloadSource {
    /// Performs one attempt. Must not panic or fail; absence means "use the fallback".
    fn fetch(&self) -> Option<RemotePayload>;
}

/// Fetches the payload over HTTPS with a bounded timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    url: String,
    timeout: Duration,
}

impl HttpFetcher {
    /// Creates a fetcher for `url` giving up after `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        HttpFetcher {
            url: url.into(),
            timeout,
        }
    }

    fn request(&self) -> reqwest::Result<Value> {
        // Built per call: nothing is kept alive between two acquisitions.
        let client = Client::builder()
            .user_agent(API_USER_AGENT)
            .timeout(self.timeout)
            .build()?;

        let response = client.get(&self.url).send()?.error_for_status()?;
        debug!("Remote source answered with status {}", response.status());
        response.json::<Value>()
    }
}

impl PayloadSource for HttpFetcher {
    fn fetch(&self) -> Option<RemotePayload> {
        match self.request() {
            Ok(value) => Some(value.into()),
            Err(e) => {
                if e.is_timeout() {
                    debug!("Request to {} timed out after {:?}", self.url, self.timeout);
                } else {
                    debug!("Request to {} failed: {}", self.url, e);
                }
                None
            }
        }
    }
}

/// Performs one GET on `url` and parses the body as JSON.
pub fn fetch(url: &str, timeout: Duration) -> Option<RemotePayload> {
    HttpFetcher::new(url, timeout).fetch()
}
