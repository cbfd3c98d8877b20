//! Fetcher Module
//!
//! Wraps a transport with cache-first semantics.

use tracing::debug;

use crate::cache::CacheStore;
use crate::error::Result;
use crate::fetch::{HttpTransport, Transport};

// == Fetcher ==
/// Cache-first page fetcher.
///
/// Owns the cache for the duration of a run; `into_cache` returns it once
/// the run is over.
#[derive(Debug)]
pub struct Fetcher<T = HttpTransport> {
    transport: T,
    cache: CacheStore,
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T, cache: CacheStore) -> Self {
        Self { transport, cache }
    }

    // == Fetch ==
    /// Returns the body for `url`.
    ///
    /// A cached URL never reaches the transport. On a miss the body is stored
    /// and the cache file rewritten before returning.
    pub async fn fetch(&mut self, url: &str) -> Result<String> {
        if let Some(body) = self.cache.get(url) {
            debug!("Retrieving stick: {}", url);
            return Ok(body.to_string());
        }

        debug!("Throwing stick: {}", url);
        let body = self.transport.get_text(url).await?;
        self.cache.put(url, body.clone())?;
        Ok(body)
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_cache(self) -> CacheStore {
        self.cache
    }
}
