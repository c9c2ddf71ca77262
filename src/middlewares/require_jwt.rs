/*!
 * JWT 认证中间件
 *
 * 验证 Authorization 头中的 access token，并按 token 中的角色从对应账户表
 * （admins / teachers / students）加载主体，写入请求扩展供后续处理程序使用。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * web::scope("/api/admin")
 *     .wrap(RequireJWT)
 *     .route("/teachers", web::get().to(list_teachers))
 * ```
 *
 * 处理程序中提取主体：
 *
 * ```rust,ignore
 * if let Some(principal) = RequireJWT::extract_principal(&req) {
 *     // principal.role() / principal.as_admin() / ...
 * }
 * ```
 *
 * ## 认证流程
 *
 * 1. 客户端在请求头中包含 `Authorization: Bearer <JWT_TOKEN>`
 * 2. 中间件验证 token 类型与签名
 * 3. 按角色从缓存或存储加载主体；账户不可用（未激活 / 未通过审核 / 停用）时拒绝
 * 4. token 无效或缺失时返回 401
 */

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::middlewares::create_error_response;
use crate::models::ErrorCode;
use crate::models::auth::{AuthRole, Principal};
use crate::storage::Storage;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, str::FromStr, sync::Arc};
use tracing::{debug, info};

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireJWT;

// 辅助函数：按角色从存储加载主体
async fn load_principal(
    storage: &Arc<dyn Storage>,
    role: &AuthRole,
    subject: &str,
) -> Result<Option<Principal>, String> {
    let principal = match role {
        AuthRole::Admin | AuthRole::SubAdmin => {
            let id = subject
                .parse::<i64>()
                .map_err(|_| "Invalid admin ID in JWT".to_string())?;
            storage
                .get_admin_by_id(id)
                .await
                .map_err(|_| "Failed to retrieve account from storage".to_string())?
                .map(Principal::Admin)
        }
        AuthRole::Teacher => {
            let id = subject
                .parse::<i64>()
                .map_err(|_| "Invalid teacher ID in JWT".to_string())?;
            storage
                .get_teacher_by_id(id)
                .await
                .map_err(|_| "Failed to retrieve account from storage".to_string())?
                .map(Principal::Teacher)
        }
        AuthRole::Student => storage
            .get_student_by_id(subject)
            .await
            .map_err(|_| "Failed to retrieve account from storage".to_string())?
            .map(Principal::Student),
    };

    Ok(principal)
}

// 辅助函数：提取并验证 JWT access token
async fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<Principal, String> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())?;

    let claims = crate::utils::jwt::JwtUtils::verify_access_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid JWT token".to_string()
    })?;

    let cache = req
        .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
        .expect("Cache not found in app data")
        .get_ref()
        .clone();

    // 从缓存中获取主体信息
    let cache_key = format!("principal:{token}");
    if let CacheResult::Found(json) = cache.get_raw(&cache_key).await {
        match serde_json::from_str::<Principal>(&json) {
            Ok(principal) => return Ok(principal),
            Err(_) => {
                // 缓存中的数据已经损坏，丢弃后走存储
                cache.remove(&cache_key).await;
            }
        }
    }

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone();

    let role =
        AuthRole::from_str(&claims.role).map_err(|_| "Invalid role in JWT".to_string())?;

    let principal = load_principal(&storage, &role, &claims.sub)
        .await?
        .ok_or_else(|| "Account not found".to_string())?;

    if !principal.is_usable() {
        return Err("Account is not active".to_string());
    }

    // 将主体信息存入缓存
    if let Ok(principal_json) = serde_json::to_string(&principal) {
        cache
            .insert_raw(cache_key, principal_json, AppConfig::get().cache.default_ttl)
            .await;
    }

    Ok(principal)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
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
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, ErrorCode::Unauthorized, "")
                        .map_into_right_body(),
                ));
            }

            // 验证 JWT token
            match extract_and_validate_jwt(&req).await {
                Ok(principal) => {
                    debug!(
                        "JWT authentication successful for subject: {}",
                        principal.subject_id()
                    );
                    req.extensions_mut().insert(principal);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取主体信息
impl RequireJWT {
    /// 从请求扩展中提取已认证主体
    /// 此函数应该在应用了RequireJWT中间件的路由处理程序中使用
    pub fn extract_principal(req: &actix_web::HttpRequest) -> Option<Principal> {
        req.extensions().get::<Principal>().cloned()
    }

    /// 从请求扩展中提取管理员主体
    pub fn extract_admin(
        req: &actix_web::HttpRequest,
    ) -> Option<crate::models::admins::entities::Admin> {
        req.extensions()
            .get::<Principal>()
            .and_then(|p| p.as_admin().cloned())
    }

    /// 从请求扩展中提取教师主体
    pub fn extract_teacher(
        req: &actix_web::HttpRequest,
    ) -> Option<crate::models::teachers::entities::Teacher> {
        req.extensions()
            .get::<Principal>()
            .and_then(|p| p.as_teacher().cloned())
    }

    /// 从请求扩展中提取学生主体
    pub fn extract_student(
        req: &actix_web::HttpRequest,
    ) -> Option<crate::models::students::entities::Student> {
        req.extensions()
            .get::<Principal>()
            .and_then(|p| p.as_student().cloned())
    }

    /// 从请求扩展中提取主体角色
    pub fn extract_role(req: &actix_web::HttpRequest) -> Option<AuthRole> {
        req.extensions().get::<Principal>().map(|p| p.role())
    }
}
