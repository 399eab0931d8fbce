//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for the asset cache and fetcher,
//! the session store, the install prompt, and offline asset worker registration. Native builds
//! compile the same API against inert fallbacks.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the host bundle factory for runtime wiring.
pub mod adapters;
mod bridge;
pub mod cache;
pub mod install;
pub mod storage;
pub mod worker;

pub use adapters::{build_host_services, host_capabilities, host_strategy_name, selected_host_strategy};
pub use cache::cache_api::{WebAssetCache, WebAssetFetcher};
pub use install::WebInstallPromptService;
pub use storage::session_store::WebSessionStore;
pub use worker::{asset_worker_supported, register_asset_worker, ASSET_WORKER_SCRIPT};
