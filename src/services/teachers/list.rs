use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{
    ApiResponse, ErrorCode,
    teachers::requests::{TeacherListParams, TeacherListQuery},
};

pub async fn list_teachers(
    service: &TeacherService,
    query: TeacherListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = TeacherListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        status: query.status,
        search: query.search,
    };

    match storage.list_teachers_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Teacher list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve teacher list: {e}"),
            )),
        ),
    }
}
