use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode, students::requests::UpdateStudentPasswordRequest,
};
use crate::utils::password::hash_password;
use crate::utils::validate::validate_password_simple;

pub async fn update_student_password(
    service: &StudentService,
    student_id: &str,
    update_data: UpdateStudentPasswordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 新密码必须满足密码策略
    if let Err(msg) = validate_password_simple(&update_data.new_password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::PasswordInvalid, msg)));
    }

    // 先确认学生存在
    match storage.get_student_by_id(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve student: {e}"),
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
        .update_student_password(student_id, &password_hash)
        .await
    {
        Ok(_) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Student password updated successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UpdateFailed,
                format!("Failed to update password: {e}"),
            )),
        ),
    }
}
