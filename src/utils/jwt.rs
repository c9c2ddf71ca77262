use crate::config::AppConfig;
use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

// JWT Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,        // 管理员/教师的数字 ID 或学生 UUID
    pub role: String,       // admin / subadmin / teacher / student
    pub token_type: String, // "access" 或 "refresh"
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct JwtUtils;

impl JwtUtils {
    fn issue(
        subject: &str,
        role: &str,
        token_type: &str,
        lifetime: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            role: role.to_string(),
            token_type: token_type.to_string(),
            exp: (now + lifetime).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let secret = &AppConfig::get().jwt.secret;
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
    }

    /// 签发 access + refresh token 对
    ///
    /// `refresh_token_expiry` 为 None 时使用配置的默认 refresh 有效期。
    pub fn generate_token_pair(
        subject: &str,
        role: &str,
        refresh_token_expiry: Option<chrono::Duration>,
    ) -> Result<TokenPair, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        let access_token = Self::issue(
            subject,
            role,
            "access",
            chrono::Duration::minutes(config.jwt.access_token_expiry),
        )?;
        let refresh_lifetime = refresh_token_expiry
            .unwrap_or_else(|| chrono::Duration::days(config.jwt.refresh_token_expiry));
        let refresh_token = Self::issue(subject, role, "refresh", refresh_lifetime)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    fn verify(token: &str, expected_type: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let secret = &AppConfig::get().jwt.secret;
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_ref()),
            &Validation::default(),
        )?;

        if data.claims.token_type != expected_type {
            return Err(jsonwebtoken::errors::ErrorKind::InvalidToken.into());
        }
        Ok(data.claims)
    }

    /// 验证 Access Token 并返回 claims
    pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify(token, "access")
    }

    /// 用 Refresh Token 换发新的 Access Token
    pub fn refresh_access_token(
        refresh_token: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Self::verify(refresh_token, "refresh")?;
        let config = AppConfig::get();
        Self::issue(
            &claims.sub,
            &claims.role,
            "access",
            chrono::Duration::minutes(config.jwt.access_token_expiry),
        )
    }

    /// Refresh token 存放在 HttpOnly cookie 中，不暴露给前端脚本
    pub fn create_refresh_token_cookie(refresh_token: &str) -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build("refresh_token", refresh_token.to_string())
            .path("/")
            .max_age(actix_web::cookie::time::Duration::days(
                config.jwt.refresh_token_expiry,
            ))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(config.is_production())
            .finish()
    }

    /// 注销时下发的立即过期 cookie
    pub fn create_empty_refresh_token_cookie() -> Cookie<'static> {
        Cookie::build("refresh_token", "")
            .path("/")
            .max_age(actix_web::cookie::time::Duration::seconds(0))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(AppConfig::get().is_production())
            .finish()
    }

    pub fn extract_refresh_token_from_cookie(req: &actix_web::HttpRequest) -> Option<String> {
        req.cookie("refresh_token")
            .map(|cookie| cookie.value().to_string())
    }
}
