use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

// 环境变量 → 配置键映射，后出现的条目覆盖先出现的
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("app.environment", "APP_ENV"),
    ("app.log_level", "RUST_LOG"),
    ("server.host", "SERVER_HOST"),
    ("server.port", "SERVER_PORT"),
    ("server.port", "PORT"),
    ("server.unix_socket_path", "UNIX_SOCKET"),
    ("server.workers", "CPU_COUNT"),
    ("jwt.secret", "JWT_SECRET"),
    ("database.url", "DATABASE_URL"),
    ("cache.redis.url", "REDIS_URL"),
    ("cache.redis.key_prefix", "REDIS_KEY_PREFIX"),
    ("cache.default_ttl", "REDIS_TTL"),
    ("upload.dir", "UPLOAD_DIR"),
    ("mailer.api_url", "MAILER_API_URL"),
    ("mailer.api_key", "MAILER_API_KEY"),
    ("mailer.from", "MAILER_FROM"),
];

impl AppConfig {
    /// 加载配置：config.toml → config.{APP_ENV}.toml → ELEARN_* 环境变量 → 显式覆盖
    pub fn load() -> Result<Self, ConfigError> {
        let env_name = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name(&format!("config.{env_name}")).required(false))
            .add_source(
                Environment::with_prefix("ELEARN")
                    .separator("_")
                    .try_parsing(true),
            );

        for (key, var) in ENV_OVERRIDES {
            builder = builder.set_override_option(*key, std::env::var(var).ok())?;
        }

        let mut app_config: AppConfig = builder.build()?.try_deserialize()?;

        // workers = 0 表示按 CPU 数自动选择
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Unix 套接字路径（为空表示未配置）
    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        (!self.server.unix_socket_path.is_empty()).then_some(&self.server.unix_socket_path)
    }
}
