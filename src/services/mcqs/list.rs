use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::McqService;
use crate::models::{
    ApiResponse, ErrorCode,
    mcqs::requests::{McqListParams, McqListQuery},
};

pub async fn list_mcqs(
    service: &McqService,
    query: McqListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = McqListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        category: query.category,
        difficulty: query.difficulty,
    };

    match storage.list_mcqs_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "MCQ list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve MCQ list: {e}"),
            )),
        ),
    }
}
