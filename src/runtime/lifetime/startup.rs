use crate::cache::{ObjectCache, register::find_cache_backend};
use crate::config::AppConfig;
use crate::models::admins::entities::{AdminRole, AdminStatus};
use crate::models::admins::requests::CreateAdminParams;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

async fn build_cache_backend(name: &str) -> Option<Arc<dyn ObjectCache>> {
    let constructor = find_cache_backend(name)?;
    match constructor().await {
        Ok(cache) => {
            warn!("Cache backend '{}' initialized", name);
            Some(Arc::from(cache))
        }
        Err(e) => {
            warn!("Cache backend '{}' failed to initialize: {}", name, e);
            None
        }
    }
}

/// 创建缓存实例
///
/// 配置的后端不可用时回退到内存缓存（moka）。
async fn create_cache() -> Result<Arc<dyn ObjectCache>, Box<dyn std::error::Error>> {
    let cache_type = &AppConfig::get().cache.cache_type;

    if let Some(cache) = build_cache_backend(cache_type).await {
        return Ok(cache);
    }
    if cache_type != "moka" {
        warn!("Falling back to in-memory cache");
        if let Some(cache) = build_cache_backend("moka").await {
            return Ok(cache);
        }
    }

    Err(format!("No cache backend available (tried: {cache_type})").into())
}

/// 初始化默认管理员账号
///
/// 仅当设置了 ADMIN_PASSWORD 环境变量且数据库中还没有任何管理员时创建，
/// 否则首个管理员通过 /api/auth/register 注册。
async fn seed_admin(storage: &Arc<dyn Storage>) {
    let Ok(password) = std::env::var("ADMIN_PASSWORD") else {
        debug!("ADMIN_PASSWORD not set, skipping admin seed");
        return;
    };

    // 检查是否已有管理员
    match storage.count_admins().await {
        Ok(count) if count > 0 => {
            debug!("Database already has {} admin(s), skipping admin seed", count);
            return;
        }
        Ok(_) => {
            info!("No admins found in database, creating default admin account...");
        }
        Err(e) => {
            warn!("Failed to count admins: {}, skipping admin seed", e);
            return;
        }
    }

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return;
        }
    };

    let params = CreateAdminParams {
        username: "admin".to_string(),
        email: std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@localhost".to_string()),
        password_hash,
        role: AdminRole::Admin,
        status: AdminStatus::Active,
    };

    match storage.create_admin(params).await {
        Ok(admin) => {
            info!(
                "Default admin account created (ID: {}, username: {})",
                admin.id, admin.username
            );
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
        }
    }
}

/// 准备服务器启动的上下文：存储、迁移、缓存与种子账号
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    if cfg!(debug_assertions) {
        crate::cache::register::log_cache_backends();
    }

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 初始化默认管理员账号（如果需要）
    seed_admin(&storage).await;

    let cache = create_cache().await.expect("Failed to create cache");

    StartupContext { storage, cache }
}
