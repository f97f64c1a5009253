//! # sahayak-runtime
//!
//! [`CacheClient`] wires the local store into the prefetch scheduler, the
//! lookup API, the request cache, and the offline queue. Create one per
//! process and pass it by reference.

pub mod client;

pub use client::CacheClient;
