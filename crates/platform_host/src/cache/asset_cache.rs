//! Asset cache contracts for transparent cache-or-fetch request handling.
//!
//! The desktop shell never talks to the cache directly from window-management code. The boot
//! path resolves its configuration document through [`fetch_through_cache`], and the asset worker
//! pre-populates the cache with [`PRECACHE_ASSETS`] at install time.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    future::Future,
    pin::Pin,
    rc::Rc,
};

/// Object-safe boxed future used by [`AssetCache`] and [`AssetFetcher`] async methods.
pub type AssetCacheFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Versioned cache bucket holding the shell's offline assets.
pub const ASSET_CACHE_NAME: &str = "retro-desktop-v1";

/// Request paths stored in [`ASSET_CACHE_NAME`] when the asset worker installs.
pub const PRECACHE_ASSETS: &[&str] = &[
    "index.html",
    "style.css",
    "config.json",
    "favicon.png",
    "fonts/w95fa.woff2",
];

/// Host cache keyed by request identity (the request path).
pub trait AssetCache {
    /// Returns the cached body for `request`, if present.
    fn match_request<'a>(
        &'a self,
        cache_name: &'a str,
        request: &'a str,
    ) -> AssetCacheFuture<'a, Result<Option<String>, String>>;

    /// Stores `body` as the cached response for `request`.
    fn put<'a>(
        &'a self,
        cache_name: &'a str,
        request: &'a str,
        body: &'a str,
    ) -> AssetCacheFuture<'a, Result<(), String>>;
}

/// Network fetcher used when a request misses the cache.
pub trait AssetFetcher {
    /// Fetches `request` and returns the response body as text.
    fn fetch_text<'a>(&'a self, request: &'a str) -> AssetCacheFuture<'a, Result<String, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op cache adapter: every lookup misses and every store succeeds.
pub struct NoopAssetCache;

impl AssetCache for NoopAssetCache {
    fn match_request<'a>(
        &'a self,
        _cache_name: &'a str,
        _request: &'a str,
    ) -> AssetCacheFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn put<'a>(
        &'a self,
        _cache_name: &'a str,
        _request: &'a str,
        _body: &'a str,
    ) -> AssetCacheFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Fetcher for hosts without network access.
pub struct NoopAssetFetcher;

impl AssetFetcher for NoopAssetFetcher {
    fn fetch_text<'a>(&'a self, request: &'a str) -> AssetCacheFuture<'a, Result<String, String>> {
        Box::pin(async move { Err(format!("network unavailable for `{request}`")) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory cache adapter keyed by `(cache_name, request)` tuples.
pub struct MemoryAssetCache {
    inner: Rc<RefCell<HashMap<(String, String), String>>>,
}

impl MemoryAssetCache {
    /// Returns the number of cached entries across all buckets.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Returns whether no entries are cached.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl AssetCache for MemoryAssetCache {
    fn match_request<'a>(
        &'a self,
        cache_name: &'a str,
        request: &'a str,
    ) -> AssetCacheFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move {
            Ok(self
                .inner
                .borrow()
                .get(&(cache_name.to_string(), request.to_string()))
                .cloned())
        })
    }

    fn put<'a>(
        &'a self,
        cache_name: &'a str,
        request: &'a str,
        body: &'a str,
    ) -> AssetCacheFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert((cache_name.to_string(), request.to_string()), body.to_string());
            Ok(())
        })
    }
}

#[derive(Debug, Clone, Default)]
/// Canned-response fetcher that counts network hits.
pub struct MemoryAssetFetcher {
    responses: Rc<RefCell<HashMap<String, String>>>,
    hits: Rc<Cell<usize>>,
}

impl MemoryAssetFetcher {
    /// Registers the body returned for `request`.
    pub fn respond(&self, request: impl Into<String>, body: impl Into<String>) {
        self.responses
            .borrow_mut()
            .insert(request.into(), body.into());
    }

    /// Returns how many fetches reached this fetcher.
    pub fn hits(&self) -> usize {
        self.hits.get()
    }
}

impl AssetFetcher for MemoryAssetFetcher {
    fn fetch_text<'a>(&'a self, request: &'a str) -> AssetCacheFuture<'a, Result<String, String>> {
        Box::pin(async move {
            self.hits.set(self.hits.get() + 1);
            self.responses
                .borrow()
                .get(request)
                .cloned()
                .ok_or_else(|| format!("404 for `{request}`"))
        })
    }
}

/// Resolves `request` from the cache, falling through to the network on a miss.
///
/// Network responses are not written back; the cache only holds what [`precache_assets`] stored.
/// A failing cache lookup is treated as a miss so the cache stays transparent.
///
/// # Errors
///
/// Returns the fetcher error when the request misses the cache and the network fetch fails.
pub async fn fetch_through_cache<C: AssetCache + ?Sized, F: AssetFetcher + ?Sized>(
    cache: &C,
    fetcher: &F,
    cache_name: &str,
    request: &str,
) -> Result<String, String> {
    if let Ok(Some(body)) = cache.match_request(cache_name, request).await {
        return Ok(body);
    }
    fetcher.fetch_text(request).await
}

/// Fetches every path in `assets` and stores it under `cache_name`.
///
/// # Errors
///
/// Fails on the first asset that cannot be fetched or stored; entries stored before the failure
/// are kept.
pub async fn precache_assets<C: AssetCache + ?Sized, F: AssetFetcher + ?Sized>(
    cache: &C,
    fetcher: &F,
    cache_name: &str,
    assets: &[&str],
) -> Result<(), String> {
    for asset in assets {
        let body = fetcher.fetch_text(asset).await?;
        cache.put(cache_name, asset, &body).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cache_hit_skips_network() {
        let cache = MemoryAssetCache::default();
        let fetcher = MemoryAssetFetcher::default();
        fetcher.respond("config.json", "{\"network\":true}");
        block_on(cache.put(ASSET_CACHE_NAME, "config.json", "{\"cached\":true}")).expect("put");

        let body = block_on(fetch_through_cache(
            &cache,
            &fetcher,
            ASSET_CACHE_NAME,
            "config.json",
        ))
        .expect("resolve");

        assert_eq!(body, "{\"cached\":true}");
        assert_eq!(fetcher.hits(), 0);
    }

    #[test]
    fn cache_miss_falls_through_without_write_back() {
        let cache = MemoryAssetCache::default();
        let fetcher = MemoryAssetFetcher::default();
        fetcher.respond("style.css", "body{}");

        let body = block_on(fetch_through_cache(
            &cache,
            &fetcher,
            ASSET_CACHE_NAME,
            "style.css",
        ))
        .expect("resolve");

        assert_eq!(body, "body{}");
        assert_eq!(fetcher.hits(), 1);
        assert!(cache.is_empty());
    }

    #[test]
    fn buckets_are_isolated_by_cache_name() {
        let cache = MemoryAssetCache::default();
        block_on(cache.put("old-v0", "index.html", "stale")).expect("put");

        let hit = block_on(cache.match_request(ASSET_CACHE_NAME, "index.html")).expect("match");
        assert_eq!(hit, None);
    }

    #[test]
    fn precache_stores_every_asset_then_serves_offline() {
        let cache = MemoryAssetCache::default();
        let fetcher = MemoryAssetFetcher::default();
        for asset in PRECACHE_ASSETS {
            fetcher.respond(*asset, format!("body of {asset}"));
        }

        block_on(precache_assets(
            &cache,
            &fetcher,
            ASSET_CACHE_NAME,
            PRECACHE_ASSETS,
        ))
        .expect("precache");
        assert_eq!(cache.len(), PRECACHE_ASSETS.len());

        let offline = NoopAssetFetcher;
        let body = block_on(fetch_through_cache(
            &cache,
            &offline,
            ASSET_CACHE_NAME,
            "config.json",
        ))
        .expect("served from cache");
        assert_eq!(body, "body of config.json");
    }

    #[test]
    fn precache_reports_first_missing_asset() {
        let cache = MemoryAssetCache::default();
        let fetcher = MemoryAssetFetcher::default();
        fetcher.respond("index.html", "<html>");

        let err = block_on(precache_assets(
            &cache,
            &fetcher,
            ASSET_CACHE_NAME,
            &["index.html", "missing.css"],
        ))
        .expect_err("missing asset");

        assert_eq!(err, "404 for `missing.css`");
        assert_eq!(cache.len(), 1);
    }
}
