//! Cache API-backed asset cache and `fetch`-backed asset fetcher.

use platform_host::{AssetCache, AssetCacheFuture, AssetFetcher};

#[derive(Debug, Clone, Copy, Default)]
/// Browser asset cache backed by the Cache API.
pub struct WebAssetCache;

impl AssetCache for WebAssetCache {
    fn match_request<'a>(
        &'a self,
        cache_name: &'a str,
        request: &'a str,
    ) -> AssetCacheFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { crate::bridge::cache_match_text(cache_name, request).await })
    }

    fn put<'a>(
        &'a self,
        cache_name: &'a str,
        request: &'a str,
        body: &'a str,
    ) -> AssetCacheFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::cache_put_text(cache_name, request, body).await })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser network fetcher backed by `window.fetch`.
pub struct WebAssetFetcher;

impl AssetFetcher for WebAssetFetcher {
    fn fetch_text<'a>(&'a self, request: &'a str) -> AssetCacheFuture<'a, Result<String, String>> {
        Box::pin(async move { crate::bridge::fetch_text(request).await })
    }
}
