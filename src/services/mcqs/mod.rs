pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::mcqs::requests::{CreateMcqRequest, McqListParams, UpdateMcqRequest};
use crate::storage::Storage;

/// 教师端选择题管理
pub struct McqService {
    storage: Option<Arc<dyn Storage>>,
}

impl McqService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建选择题
    pub async fn create_mcq(
        &self,
        mcq_data: CreateMcqRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_mcq(self, mcq_data, request).await
    }

    // 获取选择题列表
    pub async fn list_mcqs(
        &self,
        query: McqListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_mcqs(self, query, request).await
    }

    // 根据ID获取选择题
    pub async fn get_mcq(&self, mcq_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_mcq(self, mcq_id, request).await
    }

    // 更新选择题（仅创建者）
    pub async fn update_mcq(
        &self,
        mcq_id: i64,
        update_data: UpdateMcqRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_mcq(self, mcq_id, update_data, request).await
    }

    // 删除选择题（仅创建者）
    pub async fn delete_mcq(
        &self,
        mcq_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_mcq(self, mcq_id, request).await
    }
}
