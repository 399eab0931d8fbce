//! Cache-domain contracts and lightweight test adapters.

mod asset_cache;

pub use asset_cache::{
    fetch_through_cache, precache_assets, AssetCache, AssetCacheFuture, AssetFetcher,
    MemoryAssetCache, MemoryAssetFetcher, NoopAssetCache, NoopAssetFetcher, ASSET_CACHE_NAME,
    PRECACHE_ASSETS,
};
