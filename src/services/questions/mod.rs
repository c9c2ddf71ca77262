pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::questions::requests::{
    CreateQuestionRequest, QuestionListParams, UpdateQuestionRequest,
};
use crate::storage::Storage;

/// 教师端题目管理
pub struct QuestionService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuestionService {
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

    // 创建题目
    pub async fn create_question(
        &self,
        question_data: CreateQuestionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_question(self, question_data, request).await
    }

    // 获取题目列表
    pub async fn list_questions(
        &self,
        query: QuestionListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_questions(self, query, request).await
    }

    // 根据ID获取题目（浏览计数自增）
    pub async fn get_question(
        &self,
        question_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_question(self, question_id, request).await
    }

    // 更新题目（仅作者）
    pub async fn update_question(
        &self,
        question_id: i64,
        update_data: UpdateQuestionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_question(self, question_id, update_data, request).await
    }

    // 删除题目
    pub async fn delete_question(
        &self,
        question_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_question(self, question_id, request).await
    }
}
