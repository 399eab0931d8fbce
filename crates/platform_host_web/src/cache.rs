//! Browser asset cache and network fetcher adapters.

/// Cache API-backed asset cache and `fetch`-backed fetcher.
pub mod cache_api;
