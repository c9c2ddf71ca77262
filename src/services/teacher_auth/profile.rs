use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::teachers::responses::TeacherResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::TeacherAuthService;

/// 获取当前教师信息
pub async fn handle_me(
    _service: &TeacherAuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_teacher(request) {
        Some(teacher) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TeacherResponse { teacher },
            "Teacher information retrieved successfully",
        ))),
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))),
    }
}
