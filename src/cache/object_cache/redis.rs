use async_trait::async_trait;
use redis::{AsyncCommands, aio::MultiplexedConnection};
use tracing::{debug, error, warn};

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_cache_backend;

declare_cache_backend!("redis", RedisObjectCache);

pub struct RedisObjectCache {
    client: redis::Client,
    key_prefix: String,
    default_ttl: u64,
}

impl RedisObjectCache {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        let redis_config = &config.cache.redis;

        let client = redis::Client::open(redis_config.url.clone())
            .map_err(|e| format!("Invalid Redis URL: {e}"))?;

        // 启动时用同步连接做一次 PING，失败则回退到内存缓存
        let mut conn = client
            .get_connection()
            .map_err(|e| format!("Redis connection failed ({}): {e}", redis_config.url))?;
        redis::cmd("PING")
            .query::<String>(&mut conn)
            .map_err(|e| format!("Redis ping failed ({}): {e}", redis_config.url))?;

        debug!(
            "Redis object cache ready, prefix '{}', default TTL {}s",
            redis_config.key_prefix, config.cache.default_ttl
        );

        Ok(Self {
            client,
            key_prefix: redis_config.key_prefix.clone(),
            default_ttl: config.cache.default_ttl,
        })
    }

    async fn connection(&self) -> Result<MultiplexedConnection, redis::RedisError> {
        self.client.get_multiplexed_async_connection().await
    }

    fn prefixed(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl ObjectCache for RedisObjectCache {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        let mut conn = match self.connection().await {
            Ok(c) => c,
            Err(e) => {
                error!("Redis connection unavailable: {}", e);
                return CacheResult::ExistsButNoValue;
            }
        };

        match conn.get::<_, Option<String>>(self.prefixed(key)).await {
            Ok(Some(data)) => CacheResult::Found(data),
            Ok(None) => CacheResult::NotFound,
            Err(e) => {
                error!("Redis GET '{}' failed: {}", key, e);
                CacheResult::ExistsButNoValue
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let mut conn = match self.connection().await {
            Ok(c) => c,
            Err(e) => {
                error!("Redis connection unavailable: {}", e);
                return;
            }
        };

        // ttl 为 0 时落回全局默认值
        let effective_ttl = if ttl == 0 { self.default_ttl } else { ttl };

        if let Err(e) = conn
            .set_ex::<_, _, ()>(self.prefixed(&key), value, effective_ttl)
            .await
        {
            error!("Redis SETEX '{}' failed: {}", key, e);
        }
    }

    async fn remove(&self, key: &str) {
        let mut conn = match self.connection().await {
            Ok(c) => c,
            Err(e) => {
                error!("Redis connection unavailable: {}", e);
                return;
            }
        };

        if let Err(e) = conn.del::<_, i32>(self.prefixed(key)).await {
            error!("Redis DEL '{}' failed: {}", key, e);
        }
    }

    async fn invalidate_all(&self) {
        // 前缀下的键不做全量清理，交给 TTL 过期
        warn!("RedisObjectCache: invalidate_all is a no-op, relying on TTL expiry");
    }
}
