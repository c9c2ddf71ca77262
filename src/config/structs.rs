use serde::{Deserialize, Serialize};

/// 应用配置，由 config.toml 与环境变量逐层合并而来
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub cors: CorsConfig,
    pub upload: UploadConfig,
    pub mailer: MailerConfig,
    pub otp: OtpConfig,
    pub argon2: Argon2Config,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 服务器配置，workers = 0 表示按 CPU 数自动选择
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub unix_socket_path: String,
    pub workers: usize,
    pub max_workers: usize,
    pub timeouts: TimeoutConfig,
    pub limits: LimitConfig,
}

/// 超时配置，client_* 单位毫秒，keep_alive 单位秒
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub client_request: u64,
    pub client_disconnect: u64,
    pub keep_alive: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    pub max_payload_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    // 密钥不序列化到任何响应中
    #[serde(skip_serializing, default)]
    pub secret: String,
    /// access token 有效期（分钟）
    pub access_token_expiry: i64,
    /// refresh token 有效期（天）
    pub refresh_token_expiry: i64,
    /// 勾选"记住我"时的 refresh token 有效期（天）
    pub refresh_token_remember_me_expiry: i64,
}

/// 数据库配置，类型从 URL scheme 自动推断
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
    /// 连接超时（秒）
    pub timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(rename = "type")]
    pub cache_type: String,
    pub default_ttl: u64,
    pub redis: RedisConfig,
    pub memory: MemoryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    pub key_prefix: String,
    pub pool_size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    pub max_capacity: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub max_age: usize,
}

/// 教师入驻材料上传配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub dir: String,
    /// 单文件最大字节数
    pub max_size: usize,
    /// 允许的扩展名（带点号）
    pub allowed_types: Vec<String>,
}

/// 事务邮件 HTTP API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerConfig {
    pub api_url: String,
    #[serde(skip_serializing, default)]
    pub api_key: String,
    pub from: String,
}

/// OTP 验证码配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpConfig {
    pub length: usize,
    pub ttl_minutes: i64,
    /// 校验失败次数上限，超过后验证码作废
    pub max_attempts: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argon2Config {
    pub memory_cost: u32,
    pub time_cost: u32,
    pub parallelism: u32,
}
