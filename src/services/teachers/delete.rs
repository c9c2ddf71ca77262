use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{
    ApiResponse, ErrorCode,
    common::response::BulkDeleteResponse,
    teachers::requests::BulkDeleteTeachersRequest,
};

pub async fn delete_teacher(
    service: &TeacherService,
    teacher_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_teacher(teacher_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Teacher deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "Teacher not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::DeleteFailed,
                format!("Teacher deletion failed: {e}"),
            )),
        ),
    }
}

/// 批量删除教师，请求体携带 ID 数组
pub async fn delete_teachers(
    service: &TeacherService,
    delete_request: BulkDeleteTeachersRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if delete_request.teacher_ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Please provide an array of teacher IDs to delete",
        )));
    }

    match storage.delete_teachers(&delete_request.teacher_ids).await {
        Ok(0) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "No teachers found to delete",
        ))),
        Ok(deleted_count) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            BulkDeleteResponse { deleted_count },
            format!("{deleted_count} teacher(s) deleted successfully"),
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::DeleteFailed,
                format!("Teacher deletion failed: {e}"),
            )),
        ),
    }
}
