use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuestionService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    questions::{requests::UpdateQuestionRequest, responses::QuestionResponse},
};

pub async fn update_question(
    service: &QuestionService,
    question_id: i64,
    update_data: UpdateQuestionRequest,
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

    // 存储层按 author 过滤，非作者得到 404
    match storage
        .update_question(question_id, teacher.id, update_data)
        .await
    {
        Ok(Some(question)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            QuestionResponse { question },
            "Question updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "Question not found or not authorized",
        ))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UpdateFailed,
            format!("Failed to update question: {e}"),
        ))),
    }
}
