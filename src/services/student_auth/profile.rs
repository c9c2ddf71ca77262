use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::students::responses::StudentResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::StudentAuthService;

/// 获取当前学生信息
pub async fn handle_me(
    _service: &StudentAuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_student(request) {
        Some(student) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentResponse { student },
            "Student information retrieved successfully",
        ))),
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))),
    }
}
