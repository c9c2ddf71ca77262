use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuestionService;
use crate::models::{ApiResponse, ErrorCode, questions::responses::QuestionResponse};

/// 题目详情，每次查询都会累加浏览计数
pub async fn get_question(
    service: &QuestionService,
    question_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 先自增计数；题目不存在时直接 404
    match storage.increment_question_views(question_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuestionNotFound,
                "Question not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve question: {e}"),
                )),
            );
        }
    }

    match storage.get_question_by_id(question_id).await {
        Ok(Some(question)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            QuestionResponse { question },
            "Question retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "Question not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve question: {e}"),
            )),
        ),
    }
}
