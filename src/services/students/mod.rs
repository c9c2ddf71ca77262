pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod password;
pub mod status;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::requests::{
    BulkDeleteStudentsRequest, CreateStudentRequest, StudentListParams,
    UpdateStudentPasswordRequest, UpdateStudentRequest, UpdateStudentStatusRequest,
};
use crate::storage::Storage;

/// 管理端学生账户管理
pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
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

    // 获取学生列表
    pub async fn list_students(
        &self,
        query: StudentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, query, request).await
    }

    // 创建学生（创建即激活）
    pub async fn create_student(
        &self,
        student_data: CreateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, student_data, request).await
    }

    // 根据ID获取学生
    pub async fn get_student(
        &self,
        student_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_student(self, student_id, request).await
    }

    // 更新学生信息
    pub async fn update_student(
        &self,
        student_id: &str,
        update_data: UpdateStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, student_id, update_data, request).await
    }

    // 更新学生密码
    pub async fn update_student_password(
        &self,
        student_id: &str,
        update_data: UpdateStudentPasswordRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        password::update_student_password(self, student_id, update_data, request).await
    }

    // 更新学生状态
    pub async fn update_student_status(
        &self,
        student_id: &str,
        update_data: UpdateStudentStatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        status::update_student_status(self, student_id, update_data, request).await
    }

    // 删除学生
    pub async fn delete_student(
        &self,
        student_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, student_id, request).await
    }

    // 批量删除学生
    pub async fn delete_students(
        &self,
        delete_request: BulkDeleteStudentsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_students(self, delete_request, request).await
    }
}
