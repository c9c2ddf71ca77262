use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::admins::entities::AdminStatus;
use crate::models::auth::requests::LoginRequest;
use crate::models::auth::responses::LoginResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 未注册邮箱与密码错误返回同一提示
    let auth_failed = || {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Email or password is incorrect",
        ))
    };

    let admin = match storage.get_admin_by_email(&login_request.email).await {
        Ok(Some(admin)) => admin,
        Ok(None) => return Ok(auth_failed()),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Login failed: {e}"),
                )),
            );
        }
    };

    if !verify_password(&login_request.password, &admin.password_hash) {
        return Ok(auth_failed());
    }

    // 密码正确也要拒绝非活跃账户
    if admin.status != AdminStatus::Active {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AccountNotActive,
            "Account is not active",
        )));
    }

    match admin.generate_token_pair(
        login_request
            .remember_me
            .then(|| chrono::Duration::days(config.jwt.refresh_token_remember_me_expiry)),
    ) {
        Ok(token_pair) => {
            tracing::info!("Admin {} logged in successfully", admin.username);

            let response = LoginResponse {
                access_token: token_pair.access_token,
                expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
                user: admin,
                created_at: chrono::Utc::now(),
            };

            let refresh_cookie = JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

            Ok(HttpResponse::Ok()
                .cookie(refresh_cookie)
                .json(ApiResponse::success(response, "Login successful")))
        }
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            )
        }
    }
}
