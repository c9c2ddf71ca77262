use crate::config::AppConfig;
use crate::errors::ELearnError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use once_cell::sync::Lazy;

// Argon2id 实例按配置参数构建一次，哈希与校验共用
static HASHER: Lazy<Argon2<'static>> = Lazy::new(|| {
    let config = AppConfig::get();
    let params = Params::new(
        config.argon2.memory_cost,
        config.argon2.time_cost,
        config.argon2.parallelism,
        None,
    )
    .expect("Invalid argon2 parameters in configuration");
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
});

/// 哈希密码
pub fn hash_password(password: &str) -> Result<String, ELearnError> {
    let salt = SaltString::generate(&mut OsRng);
    HASHER
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ELearnError::validation(format!("密码哈希失败: {e}")))
}

/// 验证密码，哈希格式非法时按不匹配处理
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| HASHER.verify_password(password.as_bytes(), &parsed).is_ok())
        .unwrap_or(false)
}

/// 哈希 OTP 验证码，重置码落库前都要经过这里
pub fn hash_otp_code(code: &str) -> Result<String, ELearnError> {
    hash_password(code)
}

/// 验证 OTP 验证码
pub fn verify_otp_code(code: &str, hash: &str) -> bool {
    verify_password(code, hash)
}
