pub mod login;
pub mod password_reset;
pub mod profile;
pub mod register;
pub mod subadmins;
pub mod token;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::admins::requests::CreateSubAdminRequest;
use crate::models::auth::requests::{
    ForgotPasswordRequest, LoginRequest, RegisterAdminRequest, ResetPasswordRequest,
    VerifyOtpRequest,
};
use crate::storage::Storage;

/// 管理员认证与子管理员管理
pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
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

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 登录验证
    pub async fn login(
        &self,
        login_request: LoginRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, login_request, request).await
    }

    // 首个管理员注册
    pub async fn register(
        &self,
        register_request: RegisterAdminRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        register::handle_register(self, register_request, request).await
    }

    // 检查主管理员是否已存在
    pub async fn check_admin(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        profile::handle_check_admin(self, request).await
    }

    // 获取当前管理员信息
    pub async fn me(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        profile::handle_me(self, request).await
    }

    // 刷新令牌
    pub async fn refresh_token(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        token::handle_refresh_token(self, request).await
    }

    // 创建子管理员
    pub async fn create_subadmin(
        &self,
        create_request: CreateSubAdminRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        subadmins::handle_create_subadmin(self, create_request, request).await
    }

    // 列出子管理员
    pub async fn list_subadmins(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        subadmins::handle_list_subadmins(self, request).await
    }

    // 删除子管理员
    pub async fn delete_subadmin(
        &self,
        subadmin_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        subadmins::handle_delete_subadmin(self, subadmin_id, request).await
    }

    // 找回密码：发送 OTP
    pub async fn forgot_password(
        &self,
        forgot_request: ForgotPasswordRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        password_reset::handle_forgot_password(self, forgot_request, request).await
    }

    // 校验 OTP
    pub async fn verify_otp(
        &self,
        verify_request: VerifyOtpRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        password_reset::handle_verify_otp(self, verify_request, request).await
    }

    // 使用 OTP 重置密码
    pub async fn reset_password(
        &self,
        reset_request: ResetPasswordRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        password_reset::handle_reset_password(self, reset_request, request).await
    }
}
