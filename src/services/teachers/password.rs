use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{
    ApiResponse, ErrorCode, teachers::requests::UpdateTeacherPasswordRequest,
};
use crate::utils::password::hash_password;
use crate::utils::validate::validate_password_simple;

pub async fn update_teacher_password(
    service: &TeacherService,
    teacher_id: i64,
    update_data: UpdateTeacherPasswordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 新密码必须满足密码策略
    if let Err(msg) = validate_password_simple(&update_data.new_password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::PasswordInvalid, msg)));
    }

    // 先确认教师存在
    match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TeacherNotFound,
                "Teacher not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve teacher: {e}"),
                )),
            );
        }
    }

    let password_hash = match hash_password(&update_data.new_password) {
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

    match storage
        .update_teacher_password(teacher_id, &password_hash)
        .await
    {
        Ok(_) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Teacher password updated successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UpdateFailed,
                format!("Failed to update password: {e}"),
            )),
        ),
    }
}
