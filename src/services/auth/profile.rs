use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::admins::responses::AdminResponse;
use crate::models::auth::responses::CheckAdminResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::AuthService;

/// 检查主管理员是否已注册（公开端点，前端用于决定是否展示初始化页面）
pub async fn handle_check_admin(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.first_admin().await {
        Ok(Some(admin)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CheckAdminResponse {
                exists: true,
                admin: Some(admin),
            },
            "Admin exists",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error(
            ErrorCode::AdminNotFound,
            CheckAdminResponse {
                exists: false,
                admin: None,
            },
            "No admin found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to check admin: {e}"),
            )),
        ),
    }
}

/// 获取当前管理员信息
pub async fn handle_me(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_admin(request) {
        Some(admin) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AdminResponse { admin },
            "Admin information retrieved successfully",
        ))),
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))),
    }
}
