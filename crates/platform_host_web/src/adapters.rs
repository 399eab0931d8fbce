use std::rc::Rc;

use platform_host::{
    CapabilityStatus, HostCapabilities, HostServices, HostStrategy, MemoryAssetCache,
    MemorySessionStore, NoopAssetFetcher, NoopInstallPromptService,
};

use crate::{WebAssetCache, WebAssetFetcher, WebInstallPromptService, WebSessionStore};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "headless-host")]
    {
        HostStrategy::Headless
    }

    #[cfg(not(feature = "headless-host"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Probes the optional capabilities of the active host.
pub fn host_capabilities() -> HostCapabilities {
    match selected_host_strategy() {
        HostStrategy::Browser => HostCapabilities {
            asset_worker: if crate::asset_worker_supported() {
                CapabilityStatus::Available
            } else {
                CapabilityStatus::Unavailable
            },
            install_prompt: if cfg!(target_arch = "wasm32") {
                CapabilityStatus::Available
            } else {
                CapabilityStatus::Unavailable
            },
        },
        HostStrategy::Headless => HostCapabilities::headless(),
    }
}

/// Builds the host service bundle consumed by `desktop_runtime`.
pub fn build_host_services() -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => HostServices {
            assets: Rc::new(WebAssetCache),
            fetcher: Rc::new(WebAssetFetcher),
            session: Rc::new(WebSessionStore),
            install: Rc::new(WebInstallPromptService::attach()),
            capabilities: host_capabilities(),
            host_strategy: HostStrategy::Browser,
        },
        HostStrategy::Headless => HostServices {
            assets: Rc::new(MemoryAssetCache::default()),
            fetcher: Rc::new(NoopAssetFetcher),
            session: Rc::new(MemorySessionStore::default()),
            install: Rc::new(NoopInstallPromptService),
            capabilities: HostCapabilities::headless(),
            host_strategy: HostStrategy::Headless,
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[cfg(not(feature = "headless-host"))]
    #[test]
    fn browser_strategy_is_default() {
        assert_eq!(selected_host_strategy(), HostStrategy::Browser);
        assert_eq!(host_strategy_name(), "browser");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_probe_reports_no_optional_capabilities() {
        assert_eq!(host_capabilities(), HostCapabilities::headless());
    }

    #[test]
    fn bundle_carries_selected_strategy() {
        let services = build_host_services();
        assert_eq!(services.host_strategy, selected_host_strategy());
        assert!(!services.install.is_available());
    }
}
