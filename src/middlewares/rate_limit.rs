/*!
 * 速率限制中间件
 *
 * 用于限制认证端点的请求频率，缓解暴力破解与 OTP 枚举。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * web::scope("/api/auth")
 *     .wrap(RateLimit::login())
 *     .route("/login", web::post().to(login_handler))
 * ```
 *
 * ## 限制规则
 *
 * - 未认证请求按客户端 IP 限制，已认证请求按主体标识限制
 * - 超过限制返回 429 Too Many Requests
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::net::IpAddr;
use std::rc::Rc;
use std::time::Duration;
use tracing::warn;

use crate::models::auth::Principal;
use crate::models::{ApiResponse, ErrorCode};

/// 全局计数器，键为 前缀:标识，固定窗口一分钟
static REQUEST_COUNTS: Lazy<Cache<String, u32>> = Lazy::new(|| {
    Cache::builder()
        .time_to_live(Duration::from_secs(60))
        .max_capacity(100_000)
        .build()
});

/// 速率限制配置
#[derive(Clone)]
pub struct RateLimit {
    /// 时间窗口内允许的最大请求数
    max_requests: u32,
    /// 时间窗口（秒）
    window_secs: u64,
    /// 限制键前缀（用于区分不同端点）
    key_prefix: String,
}

impl RateLimit {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs,
            key_prefix: String::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    /// 登录端点限制：5次/分钟/IP
    pub fn login() -> Self {
        Self::new(5, 60).with_prefix("login")
    }

    /// 注册端点限制：3次/分钟/IP
    pub fn register() -> Self {
        Self::new(3, 60).with_prefix("register")
    }

    /// OTP 签发与校验限制：5次/分钟/IP，防验证码枚举
    pub fn otp() -> Self {
        Self::new(5, 60).with_prefix("otp")
    }

    /// 刷新令牌限制：10次/分钟/IP
    pub fn refresh_token() -> Self {
        Self::new(10, 60).with_prefix("refresh")
    }
}

fn is_valid_ip(candidate: &str) -> bool {
    candidate.parse::<IpAddr>().is_ok()
}

/// 从请求中提取客户端 IP
///
/// 反向代理部署时依赖代理正确设置 X-Forwarded-For / X-Real-IP；
/// 所有候选值先做格式校验，伪造的无效头会被跳过。
fn extract_client_ip(req: &ServiceRequest) -> String {
    let connection_ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    if let Some(ref ip) = connection_ip
        && is_valid_ip(ip)
    {
        return ip.clone();
    }

    // X-Forwarded-For 取第一个条目（最接近客户端）
    let forwarded = req
        .headers()
        .get("X-Forwarded-For")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim);
    let real_ip = req
        .headers()
        .get("X-Real-IP")
        .and_then(|v| v.to_str().ok())
        .map(str::trim);

    for candidate in [forwarded, real_ip].into_iter().flatten() {
        if is_valid_ip(candidate) {
            return candidate.to_string();
        }
    }

    connection_ip.unwrap_or_else(|| "unknown".to_string())
}

/// 已认证请求用主体标识而不是 IP 计数
fn rate_limit_identifier(req: &ServiceRequest) -> String {
    match req.extensions().get::<Principal>() {
        Some(principal) => format!("subject:{}", principal.subject_id()),
        None => format!("ip:{}", extract_client_ip(req)),
    }
}

fn limit_exceeded_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", retry_after.to_string()))
        .insert_header(("X-RateLimit-Remaining", "0"))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "请求过于频繁，请稍后再试",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            max_requests: self.max_requests,
            window_secs: self.window_secs,
            key_prefix: self.key_prefix.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    max_requests: u32,
    window_secs: u64,
    key_prefix: String,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let max_requests = self.max_requests;
        let window_secs = self.window_secs;
        let key_prefix = self.key_prefix.clone();

        Box::pin(async move {
            let identifier = rate_limit_identifier(&req);
            let counter_key = if key_prefix.is_empty() {
                identifier
            } else {
                format!("{key_prefix}:{identifier}")
            };

            let seen = REQUEST_COUNTS.get(&counter_key).await.unwrap_or(0);
            if seen >= max_requests {
                warn!(
                    "Rate limit exceeded for key: {} ({}/{})",
                    counter_key, seen, max_requests
                );
                return Ok(
                    req.into_response(limit_exceeded_response(window_secs).map_into_right_body())
                );
            }

            REQUEST_COUNTS.insert(counter_key, seen + 1).await;

            req.extensions_mut().insert(RateLimitInfo {
                remaining: max_requests.saturating_sub(seen + 1),
                limit: max_requests,
                reset: window_secs,
            });

            let res = srv.call(req).await?.map_into_left_body();
            Ok(res)
        })
    }
}

/// 速率限制信息（可在响应中添加）
#[derive(Clone)]
pub struct RateLimitInfo {
    pub remaining: u32,
    pub limit: u32,
    pub reset: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_endpoint_presets() {
        let login = RateLimit::login();
        assert_eq!(login.max_requests, 5);
        assert_eq!(login.window_secs, 60);
        assert_eq!(login.key_prefix, "login");

        let register = RateLimit::register();
        assert_eq!(register.max_requests, 3);

        let otp = RateLimit::otp();
        assert_eq!(otp.max_requests, 5);
        assert_eq!(otp.key_prefix, "otp");

        assert_eq!(RateLimit::refresh_token().max_requests, 10);
    }

    #[test]
    fn prefix_is_appended() {
        let limiter = RateLimit::new(7, 30).with_prefix("custom");
        assert_eq!(limiter.key_prefix, "custom");
        assert_eq!(limiter.max_requests, 7);
        assert_eq!(limiter.window_secs, 30);
    }
}
