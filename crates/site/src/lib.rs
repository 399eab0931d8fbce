mod web_app;

pub use web_app::{DesktopEntry, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}

#[cfg(test)]
mod tests {
    use platform_host::{ASSET_CACHE_NAME, PRECACHE_ASSETS};
    use pretty_assertions::assert_eq;

    const WORKER_SOURCE: &str = include_str!("../public/sw.js");

    #[test]
    fn shipped_worker_uses_the_shell_cache_contract() {
        assert_eq!(platform_host_web::ASSET_WORKER_SCRIPT, "sw.js");
        assert!(WORKER_SOURCE.contains(&format!("'{ASSET_CACHE_NAME}'")));
        for asset in PRECACHE_ASSETS {
            assert!(
                WORKER_SOURCE.contains(&format!("'{asset}'")),
                "sw.js does not precache {asset}"
            );
        }
    }
}
