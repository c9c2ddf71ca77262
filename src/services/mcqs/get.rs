use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::McqService;
use crate::models::{ApiResponse, ErrorCode, mcqs::responses::McqResponse};

pub async fn get_mcq(
    service: &McqService,
    mcq_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_mcq_by_id(mcq_id).await {
        Ok(Some(mcq)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            McqResponse { mcq },
            "MCQ retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::McqNotFound,
            "MCQ not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve MCQ: {e}"),
            )),
        ),
    }
}
