use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::McqService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    mcqs::{requests::UpdateMcqRequest, responses::McqResponse},
};
use crate::utils::validate::validate_mcq;

pub async fn update_mcq(
    service: &McqService,
    mcq_id: i64,
    update_data: UpdateMcqRequest,
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

    // 合并更新后的选项与答案必须依然满足交叉约束
    let existing = match storage.get_mcq_by_id(mcq_id).await {
        Ok(Some(mcq)) => mcq,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::McqNotFound,
                "MCQ not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve MCQ: {e}"),
                )),
            );
        }
    };

    let effective_options = update_data
        .options
        .clone()
        .unwrap_or_else(|| existing.options.clone());
    let effective_answer = update_data.correct_answer.unwrap_or(existing.correct_answer);

    if let Err(msg) = validate_mcq(&effective_options, effective_answer) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::McqInvalid, msg)));
    }

    // 存储层按 created_by 过滤，非创建者得到 404
    match storage.update_mcq(mcq_id, teacher.id, update_data).await {
        Ok(Some(mcq)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            McqResponse { mcq },
            "MCQ updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::McqNotFound,
            "MCQ not found or not authorized",
        ))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UpdateFailed,
            format!("Failed to update MCQ: {e}"),
        ))),
    }
}
