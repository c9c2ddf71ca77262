use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::admins::entities::{AdminRole, AdminStatus};
use crate::models::admins::requests::CreateAdminParams;
use crate::models::admins::responses::AdminResponse;
use crate::models::auth::requests::RegisterAdminRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_username};

use super::AuthService;

/// 首个管理员注册
///
/// 平台已有任何管理员后该入口关闭，后续账号只能由主管理员创建。
pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterAdminRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 已有管理员则拒绝
    match storage.count_admins().await {
        Ok(0) => {}
        Ok(_) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::AdminBootstrapClosed,
                "An admin account already exists",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    format!("Register failed: {e}"),
                )),
            );
        }
    }

    // 2. 字段校验
    if let Err(msg) = validate_username(&register_request.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    if let Err(msg) = validate_email(&register_request.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::EmailInvalid, msg)));
    }

    if let Err(msg) = validate_password_simple(&register_request.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::PasswordInvalid, msg)));
    }

    // 3. 哈希密码并创建主管理员
    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    format!("密码哈希失败: {e}"),
                )),
            );
        }
    };

    let params = CreateAdminParams {
        username: register_request.username,
        email: register_request.email,
        password_hash,
        role: AdminRole::Admin,
        status: AdminStatus::Active,
    };

    match storage.create_admin(params).await {
        Ok(admin) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(AdminResponse { admin }, "注册成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RegisterFailed,
                format!("注册失败: {e}"),
            )),
        ),
    }
}
