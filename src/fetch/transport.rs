//! Transport Module
//!
//! The single network seam of the scraper: one GET, body as text.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::error::{DogError, Result};

/// Issues one GET and returns the response body.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get_text(&self, url: &str) -> Result<String>;
}

// == HTTP Transport ==
/// reqwest-backed transport. Non-success statuses are reported as fetch errors.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Builds a client with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("dog_info/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DogError::Internal(format!("HTTP client setup failed: {}", e)))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get_text(&self, url: &str) -> Result<String> {
        let fetch_error = |e: reqwest::Error| DogError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(fetch_error)?
            .error_for_status()
            .map_err(fetch_error)?;

        response.text().await.map_err(fetch_error)
    }
}

// == Static Transport ==
/// Serves a fixed set of pages and records every URL it is asked for.
///
/// Unknown URLs fail with a fetch error, which makes it suitable for replaying
/// saved pages offline and for exercising the pipeline without a network.
#[derive(Debug, Default)]
pub struct StaticTransport {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl StaticTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a page, builder style.
    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), body.into());
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl Transport for StaticTransport {
    async fn get_text(&self, url: &str) -> Result<String> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        self.pages.get(url).cloned().ok_or_else(|| DogError::Fetch {
            url: url.to_string(),
            message: "404 Not Found".to_string(),
        })
    }
}
