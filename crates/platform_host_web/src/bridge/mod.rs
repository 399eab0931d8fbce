//! Browser capability bridge implementations for `platform_host_web` service adapters.
//!
//! Each function has a `wasm32` implementation backed by `web-sys` and a native fallback that
//! behaves like an empty, offline browser.

mod interop;

pub async fn cache_match_text(cache_name: &str, request: &str) -> Result<Option<String>, String> {
    interop::cache_match_text(cache_name, request).await
}

pub async fn cache_put_text(cache_name: &str, request: &str, body: &str) -> Result<(), String> {
    interop::cache_put_text(cache_name, request, body).await
}

pub async fn fetch_text(request: &str) -> Result<String, String> {
    interop::fetch_text(request).await
}

pub fn service_worker_supported() -> bool {
    interop::service_worker_supported()
}

pub async fn register_service_worker(script_url: &str) -> Result<(), String> {
    interop::register_service_worker(script_url).await
}

pub fn session_get(key: &str) -> Option<String> {
    interop::session_get(key)
}

pub fn session_set(key: &str, value: &str) -> Result<(), String> {
    interop::session_set(key, value)
}

pub fn session_remove(key: &str) {
    interop::session_remove(key)
}

pub fn install_prompt_listener() {
    interop::install_prompt_listener()
}

pub fn install_prompt_pending() -> bool {
    interop::install_prompt_pending()
}

pub async fn install_prompt_show() -> Result<bool, String> {
    interop::install_prompt_show().await
}
