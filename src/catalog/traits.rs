//! Seams for the catalog client: HTTP transport and clock.
//!
//! Production code uses [`HttpTransport`](super::transport::HttpTransport) and
//! [`SystemClock`]. Tests substitute the scripted implementations in [`mocks`]
//! so cache expiry can be driven without waiting on wall time.
//!
//! # Example
//!
//! ```ignore
//! use crate_minder::catalog::traits::mocks::{ManualClock, MockTransport};
//!
//! let transport = Arc::new(MockTransport::new().respond("/search", body));
//! let clock = Arc::new(ManualClock::new());
//! let client = CatalogClient::with_parts(settings, transport.clone(), clock.clone());
//! ```

use std::time::Instant;

use async_trait::async_trait;

use super::domain::CatalogError;

/// Trait for issuing a single GET request.
///
/// Implementations return the raw response body for 2xx responses and map
/// everything else onto [`CatalogError`]. At most one attempt is made.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` and return the response body.
    async fn get(&self, url: &reqwest::Url) -> Result<String, CatalogError>;
}

/// Source of "now" for cache expiry.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
