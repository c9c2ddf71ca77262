use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    students::{requests::UpdateStudentStatusRequest, responses::StudentResponse},
};

pub async fn update_student_status(
    service: &StudentService,
    student_id: &str,
    update_data: UpdateStudentStatusRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let status = update_data.status.clone();

    match storage
        .update_student_status(student_id, update_data.status)
        .await
    {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentResponse { student },
            format!("Student status changed to {status}"),
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UpdateFailed,
                format!("Failed to update student status: {e}"),
            )),
        ),
    }
}
