//! Offline asset worker registration.

/// Script URL of the offline asset worker served next to `index.html`.
pub const ASSET_WORKER_SCRIPT: &str = "sw.js";

/// Returns whether the browser can host an asset worker.
pub fn asset_worker_supported() -> bool {
    crate::bridge::service_worker_supported()
}

/// Registers [`ASSET_WORKER_SCRIPT`] as the page's service worker.
///
/// # Errors
///
/// Returns an error when service workers are unsupported or registration is rejected.
pub async fn register_asset_worker() -> Result<(), String> {
    crate::bridge::register_service_worker(ASSET_WORKER_SCRIPT).await
}
