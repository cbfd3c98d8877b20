//! Fetch Module
//!
//! Cache-first page retrieval. A `Fetcher` consults its `CacheStore` before
//! handing a URL to its `Transport`.

mod fetcher;
mod transport;

pub use fetcher::Fetcher;
pub use transport::{HttpTransport, StaticTransport, Transport};
