use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuestionService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    questions::{requests::CreateQuestionRequest, responses::QuestionResponse},
};

pub async fn create_question(
    service: &QuestionService,
    question_data: CreateQuestionRequest,
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

    if question_data.title.trim().is_empty() || question_data.content.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Title and content are required",
        )));
    }

    match storage.create_question(question_data, teacher.id).await {
        Ok(question) => Ok(HttpResponse::Created().json(ApiResponse::success(
            QuestionResponse { question },
            "Question created successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::CreateFailed,
                format!("Question creation failed: {e}"),
            )),
        ),
    }
}
