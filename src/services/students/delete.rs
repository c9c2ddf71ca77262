use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    common::response::BulkDeleteResponse,
    students::requests::BulkDeleteStudentsRequest,
};

pub async fn delete_student(
    service: &StudentService,
    student_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_student(student_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Student deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::DeleteFailed,
                format!("Student deletion failed: {e}"),
            )),
        ),
    }
}

/// 批量删除学生，请求体携带 ID 数组
pub async fn delete_students(
    service: &StudentService,
    delete_request: BulkDeleteStudentsRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if delete_request.student_ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Please provide an array of student IDs to delete",
        )));
    }

    match storage.delete_students(&delete_request.student_ids).await {
        Ok(0) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "No students found to delete",
        ))),
        Ok(deleted_count) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            BulkDeleteResponse { deleted_count },
            format!("{deleted_count} student(s) deleted successfully"),
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::DeleteFailed,
                format!("Student deletion failed: {e}"),
            )),
        ),
    }
}
