pub mod delete;
pub mod get;
pub mod list;
pub mod password;
pub mod status;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::teachers::requests::{
    BulkDeleteTeachersRequest, TeacherListParams, UpdateTeacherPasswordRequest,
    UpdateTeacherRequest, UpdateTeacherStatusRequest,
};
use crate::storage::Storage;

/// 管理端教师账户管理
pub struct TeacherService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherService {
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

    // 获取教师列表
    pub async fn list_teachers(
        &self,
        query: TeacherListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_teachers(self, query, request).await
    }

    // 根据ID获取教师
    pub async fn get_teacher(
        &self,
        teacher_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_teacher(self, teacher_id, request).await
    }

    // 更新教师信息
    pub async fn update_teacher(
        &self,
        teacher_id: i64,
        update_data: UpdateTeacherRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_teacher(self, teacher_id, update_data, request).await
    }

    // 更新教师密码
    pub async fn update_teacher_password(
        &self,
        teacher_id: i64,
        update_data: UpdateTeacherPasswordRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        password::update_teacher_password(self, teacher_id, update_data, request).await
    }

    // 更新教师入驻状态
    pub async fn update_teacher_status(
        &self,
        teacher_id: i64,
        update_data: UpdateTeacherStatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        status::update_teacher_status(self, teacher_id, update_data, request).await
    }

    // 删除教师
    pub async fn delete_teacher(
        &self,
        teacher_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_teacher(self, teacher_id, request).await
    }

    // 批量删除教师
    pub async fn delete_teachers(
        &self,
        delete_request: BulkDeleteTeachersRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_teachers(self, delete_request, request).await
    }
}
