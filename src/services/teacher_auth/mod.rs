pub mod login;
pub mod password_reset;
pub mod profile;
pub mod register;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::auth::requests::{
    ForgotPasswordRequest, LoginRequest, ResetPasswordRequest, VerifyOtpRequest,
};
use crate::storage::Storage;

/// 教师入驻申请与登录
pub struct TeacherAuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherAuthService {
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

    // 入驻申请（multipart 表单，含证件上传），账户初始为 pending
    pub async fn register(
        &self,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        register::handle_register(self, payload, request).await
    }

    // 教师登录，未通过审核的账户被拒绝
    pub async fn login(
        &self,
        login_request: LoginRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, login_request, request).await
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

    // 获取当前教师信息
    pub async fn me(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        profile::handle_me(self, request).await
    }
}
