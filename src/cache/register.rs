use crate::cache::traits::ObjectCache;
use crate::errors::Result;
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock},
};

pub type BoxedCacheBackendFuture =
    Pin<Box<dyn Future<Output = Result<Box<dyn ObjectCache>>> + Send>>;
pub type CacheBackendConstructor = Arc<dyn Fn() -> BoxedCacheBackendFuture + Send + Sync>;

static CACHE_BACKENDS: Lazy<RwLock<HashMap<&'static str, CacheBackendConstructor>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

pub fn register_cache_backend(name: &'static str, constructor: CacheBackendConstructor) {
    CACHE_BACKENDS
        .write()
        .expect("Cache backend registry lock poisoned")
        .insert(name, constructor);
}

pub fn find_cache_backend(name: &str) -> Option<CacheBackendConstructor> {
    CACHE_BACKENDS
        .read()
        .expect("Cache backend registry lock poisoned")
        .get(name)
        .cloned()
}

pub fn log_cache_backends() {
    let backends = CACHE_BACKENDS
        .read()
        .expect("Cache backend registry lock poisoned");
    if backends.is_empty() {
        tracing::debug!("No cache backends registered.");
    } else {
        let names: Vec<&str> = backends.keys().copied().collect();
        tracing::debug!("Registered cache backends: {}", names.join(", "));
    }
}
