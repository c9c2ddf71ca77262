use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuestionService;
use crate::models::{
    ApiResponse, ErrorCode,
    questions::requests::{QuestionListParams, QuestionListQuery},
};

pub async fn list_questions(
    service: &QuestionService,
    query: QuestionListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = QuestionListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        question_type: query.question_type,
        search: query.search,
    };

    match storage.list_questions_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Question list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve question list: {e}"),
            )),
        ),
    }
}
