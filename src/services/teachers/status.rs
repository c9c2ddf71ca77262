use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{
    ApiResponse, ErrorCode,
    teachers::{
        entities::TeacherStatus,
        requests::UpdateTeacherStatusRequest,
        responses::TeacherResponse,
    },
};

/// 审核教师入驻申请，驳回时必须给出原因
pub async fn update_teacher_status(
    service: &TeacherService,
    teacher_id: i64,
    update_data: UpdateTeacherStatusRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if update_data.status == TeacherStatus::Rejected
        && update_data
            .rejection_reason
            .as_deref()
            .is_none_or(|reason| reason.trim().is_empty())
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Rejection reason is required when rejecting a teacher",
        )));
    }

    let status = update_data.status.clone();

    match storage
        .update_teacher_status(teacher_id, update_data.status, update_data.rejection_reason)
        .await
    {
        Ok(Some(teacher)) => {
            tracing::info!("Teacher {} status changed to {}", teacher.email, status);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                TeacherResponse { teacher },
                format!("Teacher status changed to {status}"),
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "Teacher not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UpdateFailed,
                format!("Failed to update teacher status: {e}"),
            )),
        ),
    }
}
