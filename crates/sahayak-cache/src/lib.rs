//! # sahayak-cache
//!
//! Server collections cached with a freshness window, served stale when the
//! network fails, plus a durable queue for actions taken while offline.
//!
//! The HTTP transport is behind the `remote` feature; without it,
//! [`HttpRemoteSource`] reports a network error and callers fall back to
//! cached data.

pub mod connectivity;
pub mod offline_queue;
pub mod request_cache;
pub mod transport;

pub use connectivity::Connectivity;
pub use offline_queue::OfflineQueue;
pub use request_cache::{CachedFetch, RequestCache};
pub use transport::HttpRemoteSource;
