use actix_web::dev::HttpServiceFactory;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::AuthRole;
use crate::models::mcqs::requests::{CreateMcqRequest, McqListParams, UpdateMcqRequest};
use crate::services::McqService;
use crate::utils::SafeIDI64;

// 懒加载的全局 McqService 实例
static MCQ_SERVICE: Lazy<McqService> = Lazy::new(McqService::new_lazy);

pub async fn create_mcq(
    req: HttpRequest,
    mcq_data: web::Json<CreateMcqRequest>,
) -> ActixResult<HttpResponse> {
    MCQ_SERVICE.create_mcq(mcq_data.into_inner(), &req).await
}

pub async fn list_mcqs(
    req: HttpRequest,
    query: web::Query<McqListParams>,
) -> ActixResult<HttpResponse> {
    MCQ_SERVICE.list_mcqs(query.into_inner(), &req).await
}

pub async fn get_mcq(req: HttpRequest, mcq_id: SafeIDI64) -> ActixResult<HttpResponse> {
    MCQ_SERVICE.get_mcq(mcq_id.0, &req).await
}

pub async fn update_mcq(
    req: HttpRequest,
    mcq_id: SafeIDI64,
    update_data: web::Json<UpdateMcqRequest>,
) -> ActixResult<HttpResponse> {
    MCQ_SERVICE
        .update_mcq(mcq_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_mcq(req: HttpRequest, mcq_id: SafeIDI64) -> ActixResult<HttpResponse> {
    MCQ_SERVICE.delete_mcq(mcq_id.0, &req).await
}

/// 选择题子路由，挂载在 /api/teacher 下
pub fn mcq_scope() -> impl HttpServiceFactory {
    web::scope("/mcqs")
        .wrap(middlewares::RequireRole::new_any(AuthRole::teacher_roles()))
        .wrap(middlewares::RequireJWT)
        .route("", web::get().to(list_mcqs))
        .route("", web::post().to(create_mcq))
        .route("/{id}", web::get().to(get_mcq))
        .route("/{id}", web::put().to(update_mcq))
        .route("/{id}", web::delete().to(delete_mcq))
}
