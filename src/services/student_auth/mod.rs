pub mod login;
pub mod password_reset;
pub mod profile;
pub mod register;
pub mod verify;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::auth::requests::{
    ForgotPasswordRequest, LoginRequest, ResetPasswordRequest, VerifyOtpRequest,
};
use crate::models::students::requests::StudentRegisterRequest;
use crate::storage::Storage;

/// 学生注册、OTP 验证与登录
pub struct StudentAuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentAuthService {
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

    // 学生注册（创建未激活账户并发送验证 OTP）
    pub async fn register(
        &self,
        register_request: StudentRegisterRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        register::handle_register(self, register_request, request).await
    }

    // 注册 OTP 验证，通过后激活账户并发放令牌
    pub async fn verify_otp(
        &self,
        verify_request: VerifyOtpRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        verify::handle_verify_otp(self, verify_request, request).await
    }

    // 学生登录
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

    // 校验重置 OTP
    pub async fn verify_reset_otp(
        &self,
        verify_request: VerifyOtpRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        password_reset::handle_verify_reset_otp(self, verify_request, request).await
    }

    // 使用 OTP 重置密码
    pub async fn reset_password(
        &self,
        reset_request: ResetPasswordRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        password_reset::handle_reset_password(self, reset_request, request).await
    }

    // 获取当前学生信息
    pub async fn me(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        profile::handle_me(self, request).await
    }
}
