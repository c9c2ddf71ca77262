use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::models::admins::entities::{AdminRole, AdminStatus};
use crate::models::admins::requests::{CreateAdminParams, CreateSubAdminRequest};
use crate::models::admins::responses::{AdminResponse, SubAdminListResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_username};

use super::AuthService;

/// 创建子管理员（仅主管理员）
pub async fn handle_create_subadmin(
    service: &AuthService,
    create_request: CreateSubAdminRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 字段校验
    if let Err(msg) = validate_username(&create_request.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    if let Err(msg) = validate_email(&create_request.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::EmailInvalid, msg)));
    }

    if let Err(msg) = validate_password_simple(&create_request.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::PasswordInvalid, msg)));
    }

    // 邮箱查重
    match storage.get_admin_by_email(&create_request.email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::EmailAlreadyExists,
                "Email already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CreateFailed,
                    format!("SubAdmin creation failed: {e}"),
                )),
            );
        }
    }

    let password_hash = match hash_password(&create_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Password hashing failed: {e}"),
                )),
            );
        }
    };

    let params = CreateAdminParams {
        username: create_request.username,
        email: create_request.email,
        password_hash,
        role: AdminRole::SubAdmin,
        status: AdminStatus::Active,
    };

    match storage.create_admin(params).await {
        Ok(admin) => Ok(HttpResponse::Created().json(ApiResponse::success(
            AdminResponse { admin },
            "SubAdmin created successfully",
        ))),
        Err(e) => {
            let msg = format!("SubAdmin creation failed: {e}");
            error!("{}", msg);
            // 判断是否唯一约束冲突
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::EmailAlreadyExists,
                    "Email already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::CreateFailed, msg)))
            }
        }
    }
}

/// 列出子管理员
pub async fn handle_list_subadmins(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_subadmins().await {
        Ok(subadmins) => {
            let count = subadmins.len() as i64;
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SubAdminListResponse {
                    items: subadmins,
                    count,
                },
                "SubAdmin list retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve subadmin list: {e}"),
            )),
        ),
    }
}

/// 删除子管理员，主管理员账户不可通过该入口删除
pub async fn handle_delete_subadmin(
    service: &AuthService,
    subadmin_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 确认目标存在且确实是子管理员
    match storage.get_admin_by_id(subadmin_id).await {
        Ok(Some(admin)) if admin.role == AdminRole::SubAdmin => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubAdminNotFound,
                "SubAdmin not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve subadmin: {e}"),
                )),
            );
        }
    }

    match storage.delete_admin(subadmin_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("SubAdmin deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubAdminNotFound,
            "SubAdmin not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::DeleteFailed,
                format!("SubAdmin deletion failed: {e}"),
            )),
        ),
    }
}
