//! Host-bundle and capability models for runtime composition.

use std::rc::Rc;

use crate::{
    AssetCache, AssetFetcher, InstallPromptService, MemoryAssetCache, MemorySessionStore,
    NoopAssetFetcher, NoopInstallPromptService, SessionStore,
};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// In-memory composition for native targets and tests.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Host availability state for one optional capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// Capability is usable now.
    Available,
    /// Capability is not supported on the active host.
    Unavailable,
}

impl CapabilityStatus {
    /// Returns whether the capability can be used immediately.
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Capability snapshot for the optional platform features the shell touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Offline asset worker (service worker) registration.
    pub asset_worker: CapabilityStatus,
    /// Install-as-app prompt support. Availability of an actual prompt is dynamic; see
    /// [`InstallPromptService::is_available`].
    pub install_prompt: CapabilityStatus,
}

impl HostCapabilities {
    /// Browser-default capability posture.
    pub const fn browser() -> Self {
        Self {
            asset_worker: CapabilityStatus::Available,
            install_prompt: CapabilityStatus::Available,
        }
    }

    /// Headless capability posture.
    pub const fn headless() -> Self {
        Self {
            asset_worker: CapabilityStatus::Unavailable,
            install_prompt: CapabilityStatus::Unavailable,
        }
    }
}

/// Runtime-selected host service bundle injected into the desktop runtime.
///
/// Environment-specific selection happens before this bundle crosses into `desktop_runtime`, so
/// the window manager never depends on browser adapter types.
#[derive(Clone)]
pub struct HostServices {
    /// Cache consulted before the network for shell assets.
    pub assets: Rc<dyn AssetCache>,
    /// Network fetcher used on cache misses.
    pub fetcher: Rc<dyn AssetFetcher>,
    /// Session-scoped override store.
    pub session: Rc<dyn SessionStore>,
    /// Install-as-app capability.
    pub install: Rc<dyn InstallPromptService>,
    /// Host availability snapshot.
    pub capabilities: HostCapabilities,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds an in-memory bundle with no network and no install capability.
    pub fn headless() -> Self {
        Self {
            assets: Rc::new(MemoryAssetCache::default()),
            fetcher: Rc::new(NoopAssetFetcher),
            session: Rc::new(MemorySessionStore::default()),
            install: Rc::new(NoopInstallPromptService),
            capabilities: HostCapabilities::headless(),
            host_strategy: HostStrategy::Headless,
        }
    }
}
