use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_cache_backend;

declare_cache_backend!("moka", MemoryObjectCache);

/// 进程内对象缓存，也是 Redis 不可用时的回退后端
pub struct MemoryObjectCache {
    inner: Cache<String, String>,
}

impl MemoryObjectCache {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        let inner = Cache::builder()
            .max_capacity(config.cache.memory.max_capacity)
            .time_to_live(std::time::Duration::from_secs(config.cache.default_ttl))
            .build();

        debug!(
            "Memory object cache ready, capacity {}, TTL {}s",
            config.cache.memory.max_capacity, config.cache.default_ttl
        );
        Ok(Self { inner })
    }
}

#[async_trait]
impl ObjectCache for MemoryObjectCache {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        match self.inner.get(key).await {
            Some(value) => CacheResult::Found(value),
            None => CacheResult::NotFound,
        }
    }

    async fn insert_raw(&self, key: String, value: String, _ttl: u64) {
        // Moka 的 TTL 在构建时全局设定，单条 ttl 不生效
        self.inner.insert(key, value).await;
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    async fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}
