//! Shared transport interop for browser bridge domains.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for higher-level bridge domain modules.

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn cache_match_text(cache_name: &str, request: &str) -> Result<Option<String>, String> {
    imp::cache_match_text(cache_name, request).await
}

pub async fn cache_put_text(cache_name: &str, request: &str, body: &str) -> Result<(), String> {
    imp::cache_put_text(cache_name, request, body).await
}

pub async fn fetch_text(request: &str) -> Result<String, String> {
    imp::fetch_text(request).await
}

pub fn service_worker_supported() -> bool {
    imp::service_worker_supported()
}

pub async fn register_service_worker(script_url: &str) -> Result<(), String> {
    imp::register_service_worker(script_url).await
}

pub fn session_get(key: &str) -> Option<String> {
    imp::session_get(key)
}

pub fn session_set(key: &str, value: &str) -> Result<(), String> {
    imp::session_set(key, value)
}

pub fn session_remove(key: &str) {
    imp::session_remove(key)
}

pub fn install_prompt_listener() {
    imp::install_prompt_listener()
}

pub fn install_prompt_pending() -> bool {
    imp::install_prompt_pending()
}

pub async fn install_prompt_show() -> Result<bool, String> {
    imp::install_prompt_show().await
}
