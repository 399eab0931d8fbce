//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer semantics stay pure; effect execution, viewport queries, randomness, and the
//! page-script API live behind this typed boundary so native tests run against headless services.

mod boot;
mod host_ui;
mod page_api;

use std::rc::Rc;

use leptos::logging;
use platform_host::{
    AssetCache, AssetFetcher, HostCapabilities, HostServices, InstallPromptService, SessionStore,
};

use crate::{
    model::{PlacementSample, WindowRect},
    reducer::RuntimeEffect,
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(HostServices::headless())
    }
}

impl DesktopHostContext {
    /// Wraps an injected host bundle.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the configured asset cache.
    pub fn asset_cache(&self) -> Rc<dyn AssetCache> {
        self.services.assets.clone()
    }

    /// Returns the configured network fetcher.
    pub fn asset_fetcher(&self) -> Rc<dyn AssetFetcher> {
        self.services.fetcher.clone()
    }

    /// Returns the session-scoped override store.
    pub fn session_store(&self) -> Rc<dyn SessionStore> {
        self.services.session.clone()
    }

    /// Returns the install-prompt capability.
    pub fn install_prompt_service(&self) -> Rc<dyn InstallPromptService> {
        self.services.install.clone()
    }

    /// Returns the host capability snapshot.
    pub fn capabilities(&self) -> HostCapabilities {
        self.services.capabilities
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Installs the boot sequence: worker registration, config load, registry hydration,
    /// autostart, and background precaching.
    pub fn install_boot_sequence(&self, runtime: DesktopRuntimeContext) {
        boot::install_boot_sequence(self.clone(), runtime);
    }

    /// Exposes the window manager entry points to scripts running inside window content.
    pub fn install_page_api(&self, runtime: DesktopRuntimeContext) {
        page_api::install(runtime);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, _runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::ExecuteScript(content) => host_ui::execute_script(content.as_str()),
            RuntimeEffect::WindowClosed(window_id) => {
                logging::log!("window {} closed", window_id.0);
            }
            RuntimeEffect::ApplyAppearance(appearance) => host_ui::apply_appearance(&appearance),
        }
    }

    /// Shows the deferred install prompt, or an informational dialog when none is held.
    pub fn request_install(&self, runtime: DesktopRuntimeContext) {
        host_ui::request_install(self.clone(), runtime);
    }

    /// Returns the current desktop viewport rect available to the shell window manager.
    pub fn desktop_viewport_rect(&self, taskbar_height_px: i32) -> WindowRect {
        host_ui::desktop_viewport_rect(taskbar_height_px)
    }

    /// Draws a fresh placement sample for a new window.
    pub fn placement_sample(&self) -> PlacementSample {
        host_ui::placement_sample()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_context_is_headless() {
        let host = DesktopHostContext::default();
        assert_eq!(host.host_strategy_name(), "headless");
        assert_eq!(host.capabilities(), HostCapabilities::headless());
        assert!(!host.install_prompt_service().is_available());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_environment_queries_are_deterministic() {
        let host = DesktopHostContext::default();
        assert_eq!(
            host.desktop_viewport_rect(38),
            WindowRect {
                x: 0,
                y: 0,
                w: 1024,
                h: 730,
            }
        );
        assert_eq!(host.placement_sample(), PlacementSample::new(0.5, 0.5));
    }
}
