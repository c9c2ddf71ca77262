use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::auth::responses::RefreshTokenResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::JwtUtils;

use super::AuthService;

/// 用 cookie 中的 refresh token 换发新的 access token
pub async fn handle_refresh_token(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(refresh_token) = JwtUtils::extract_refresh_token_from_cookie(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    match JwtUtils::refresh_access_token(&refresh_token) {
        Ok(access_token) => {
            let response = RefreshTokenResponse {
                access_token,
                expires_in: service.get_config().jwt.access_token_expiry,
            };
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(response, "Token refreshed successfully")))
        }
        Err(e) => {
            tracing::error!("Refresh token failed: {}", e);
            // 无效的 refresh token 连同 cookie 一起清除
            Ok(HttpResponse::Unauthorized()
                .cookie(JwtUtils::create_empty_refresh_token_cookie())
                .json(ApiResponse::error_empty(
                    ErrorCode::Unauthorized,
                    "Login expired or invalid, please login again",
                )))
        }
    }
}
