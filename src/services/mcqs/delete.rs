use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::McqService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_mcq(
    service: &McqService,
    mcq_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let teacher = match RequireJWT::extract_teacher(request) {
        Some(teacher) => teacher,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized access, please login",
            )));
        }
    };

    // 存储层按 created_by 过滤，非创建者得到 404
    match storage.delete_mcq(mcq_id, teacher.id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("MCQ deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::McqNotFound,
            "MCQ not found or not authorized",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::DeleteFailed,
                format!("MCQ deletion failed: {e}"),
            )),
        ),
    }
}
