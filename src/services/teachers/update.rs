use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{
    ApiResponse, ErrorCode,
    teachers::{requests::UpdateTeacherRequest, responses::TeacherResponse},
};
use crate::utils::validate::validate_email;

pub async fn update_teacher(
    service: &TeacherService,
    teacher_id: i64,
    update_data: UpdateTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 密码不允许走该路由
    if update_data.password.is_some() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FieldNotUpdatable,
            "Use the password update route to change password",
        )));
    }

    if let Some(ref email) = update_data.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::EmailInvalid, msg)));
    }

    match storage.update_teacher(teacher_id, update_data).await {
        Ok(Some(teacher)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TeacherResponse { teacher },
            "Teacher updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "Teacher not found",
        ))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UpdateFailed,
            format!("Failed to update teacher: {e}"),
        ))),
    }
}
