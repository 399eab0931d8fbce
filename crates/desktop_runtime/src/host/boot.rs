use leptos::{create_effect, logging, spawn_local, untrack, SignalWithUntracked};
use platform_host::{
    fetch_through_cache, precache_assets, save_session_typed, ASSET_CACHE_NAME, PRECACHE_ASSETS,
    SESSION_CONFIG_KEY,
};

use crate::{
    config::{parse_desktop_config, resolve_appearance, DesktopConfig, DESKTOP_CONFIG_PATH},
    host::DesktopHostContext,
    reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
};

pub(super) fn install_boot_sequence(host: DesktopHostContext, runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        let host = host.clone();
        untrack(|| register_worker(&host));
        spawn_local(async move {
            let config = load_desktop_config(&host).await;
            let appearance = resolve_appearance(&config.desktop, host.session_store().as_ref());

            runtime.dispatch_action(DesktopAction::ConfigureWindowManager {
                config: config.window_manager,
            });
            runtime.dispatch_action(DesktopAction::LoadRegistry {
                descriptors: config.shortcuts,
            });
            runtime.dispatch_action(DesktopAction::SetAppearance { appearance });

            let autostart = runtime.state.with_untracked(|state| state.registry.autostart());
            for app in autostart {
                runtime.launch_app(app);
            }

            if host.capabilities().asset_worker.is_available() {
                precache_shell_assets(&host).await;
            }
        });
    });
}

fn register_worker(host: &DesktopHostContext) {
    if !host.capabilities().asset_worker.is_available() {
        logging::log!(
            "asset worker unavailable on {} host",
            host.host_strategy_name()
        );
        return;
    }
    spawn_local(async move {
        match platform_host_web::register_asset_worker().await {
            Ok(()) => logging::log!("asset worker registered"),
            Err(err) => logging::warn!("asset worker registration failed: {err}"),
        }
    });
}

/// Loads `config.json` through the asset cache. Missing or malformed config yields an empty
/// desktop that still accepts programmatic launches.
///
/// The session snapshot of the previous boot is dropped first and replaced only by a config that
/// decoded successfully.
async fn load_desktop_config(host: &DesktopHostContext) -> DesktopConfig {
    let session = host.session_store();
    session.remove(SESSION_CONFIG_KEY);

    let cache = host.asset_cache();
    let fetcher = host.asset_fetcher();
    let raw = match fetch_through_cache(
        cache.as_ref(),
        fetcher.as_ref(),
        ASSET_CACHE_NAME,
        DESKTOP_CONFIG_PATH,
    )
    .await
    {
        Ok(raw) => raw,
        Err(err) => {
            logging::warn!("load {DESKTOP_CONFIG_PATH} failed: {err}");
            return DesktopConfig::default();
        }
    };

    match parse_desktop_config(&raw) {
        Ok(config) => {
            if let Err(err) = save_session_typed(session.as_ref(), SESSION_CONFIG_KEY, &config) {
                logging::warn!("store config snapshot failed: {err}");
            }
            config
        }
        Err(err) => {
            logging::warn!("{err}");
            DesktopConfig::default()
        }
    }
}

async fn precache_shell_assets(host: &DesktopHostContext) {
    let cache = host.asset_cache();
    let fetcher = host.asset_fetcher();
    match precache_assets(
        cache.as_ref(),
        fetcher.as_ref(),
        ASSET_CACHE_NAME,
        PRECACHE_ASSETS,
    )
    .await
    {
        Ok(()) => logging::log!("precached {} shell assets", PRECACHE_ASSETS.len()),
        Err(err) => logging::warn!("asset precache failed: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;
    use platform_host::{HostServices, MemoryAssetFetcher, MemorySessionStore, SessionStore};
    use pretty_assertions::assert_eq;

    use super::*;

    fn host_with_session(body: Option<&str>, session: MemorySessionStore) -> DesktopHostContext {
        let fetcher = MemoryAssetFetcher::default();
        if let Some(body) = body {
            fetcher.respond(DESKTOP_CONFIG_PATH, body);
        }
        let mut services = HostServices::headless();
        services.fetcher = Rc::new(fetcher);
        services.session = Rc::new(session);
        DesktopHostContext::new(services)
    }

    fn host_with_config(body: Option<&str>) -> DesktopHostContext {
        host_with_session(body, MemorySessionStore::default())
    }

    #[test]
    fn missing_config_boots_an_empty_desktop() {
        let config = block_on(load_desktop_config(&host_with_config(None)));
        assert_eq!(config, DesktopConfig::default());
    }

    #[test]
    fn malformed_config_boots_an_empty_desktop() {
        let config = block_on(load_desktop_config(&host_with_config(Some("{ nope"))));
        assert!(config.shortcuts.is_empty());
    }

    #[test]
    fn config_is_read_from_the_network_on_cache_miss() {
        let host = host_with_config(Some(
            r#"{"shortcuts":[{"name":"Notepad","icon":"n.png","content":"<textarea></textarea>"}],"desktop":{"title":"Home"}}"#,
        ));
        let config = block_on(load_desktop_config(&host));
        assert_eq!(config.shortcuts.len(), 1);
        assert_eq!(config.shortcuts[0].name.as_str(), "Notepad");
        assert_eq!(config.desktop.title.as_deref(), Some("Home"));
    }

    #[test]
    fn decoded_config_replaces_the_session_snapshot() {
        let session = MemorySessionStore::default();
        session
            .set_string(SESSION_CONFIG_KEY, "stale")
            .expect("seed snapshot");
        let host = host_with_session(Some(r#"{"desktop":{"title":"Home"}}"#), session.clone());

        let config = block_on(load_desktop_config(&host));
        let snapshot = session.get_string(SESSION_CONFIG_KEY).expect("snapshot");
        let stored = parse_desktop_config(&snapshot).expect("snapshot decodes");
        assert_eq!(stored, config);
    }

    #[test]
    fn failed_load_leaves_no_snapshot() {
        let session = MemorySessionStore::default();
        session
            .set_string(SESSION_CONFIG_KEY, "stale")
            .expect("seed snapshot");
        let host = host_with_session(None, session.clone());

        block_on(load_desktop_config(&host));
        assert_eq!(session.get_string(SESSION_CONFIG_KEY), None);
    }
}
