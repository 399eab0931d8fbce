//! Typed host-domain contracts shared by the desktop runtime and its browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the asset cache
//! (cache-or-fetch) contract, the session-scoped key/value store, the install-prompt capability,
//! clock helpers, and the [`HostServices`] bundle injected into `desktop_runtime`. Concrete
//! browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod cache;
pub mod host;
pub mod install;
pub mod session;
pub mod time;

pub use cache::{
    fetch_through_cache, precache_assets, AssetCache, AssetCacheFuture, AssetFetcher,
    MemoryAssetCache, MemoryAssetFetcher, NoopAssetCache, NoopAssetFetcher, ASSET_CACHE_NAME,
    PRECACHE_ASSETS,
};
pub use host::{CapabilityStatus, HostCapabilities, HostServices, HostStrategy};
pub use install::{
    InstallOutcome, InstallPromptFuture, InstallPromptService, MemoryInstallPromptService,
    NoopInstallPromptService,
};
pub use session::{
    save_session_typed, MemorySessionStore, NoopSessionStore, SessionStore,
    LEGACY_SESSION_BACKGROUND_KEY, LEGACY_SESSION_THEME_COLOR_KEY, LEGACY_SESSION_TITLE_KEY,
    SESSION_BACKGROUND_KEY, SESSION_CONFIG_KEY, SESSION_THEME_COLOR_KEY, SESSION_TITLE_KEY,
};
pub use time::{format_clock_hh_mm, local_clock_now, ClockTime};
