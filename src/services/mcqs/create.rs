use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::McqService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    mcqs::{requests::CreateMcqRequest, responses::McqResponse},
};
use crate::utils::validate::validate_mcq;

pub async fn create_mcq(
    service: &McqService,
    mcq_data: CreateMcqRequest,
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

    // 选项数量与答案下标的交叉校验
    if let Err(msg) = validate_mcq(&mcq_data.options, mcq_data.correct_answer) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::McqInvalid, msg)));
    }

    match storage.create_mcq(mcq_data, teacher.id).await {
        Ok(mcq) => Ok(HttpResponse::Created().json(ApiResponse::success(
            McqResponse { mcq },
            "MCQ created successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::CreateFailed,
                format!("MCQ creation failed: {e}"),
            )),
        ),
    }
}
