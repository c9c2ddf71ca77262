use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::config::AppConfig;
use crate::models::auth::requests::{
    ForgotPasswordRequest, ResetPasswordRequest, VerifyOtpRequest,
};
use crate::models::students::entities::Student;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::mailer::mailer;
use crate::utils::password::{hash_otp_code, hash_password, verify_otp_code};
use crate::utils::random_code::generate_numeric_code;
use crate::utils::validate::validate_password_simple;

use super::StudentAuthService;

// 重置码是否仍然有效（存在、未过期、未超出尝试次数）
fn reset_code_usable(student: &Student) -> bool {
    let config = AppConfig::get();
    let now = chrono::Utc::now().timestamp();

    student.reset_code_hash.is_some()
        && student.reset_code_expires.is_some_and(|exp| exp > now)
        && student.reset_code_attempts < config.otp.max_attempts
}

/// 找回密码：签发 OTP 并发送邮件
pub async fn handle_forgot_password(
    service: &StudentAuthService,
    forgot_request: ForgotPasswordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    let student = match storage.get_student_by_email(&forgot_request.email).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            // 不暴露邮箱是否注册
            return Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "If this email is registered, you'll receive a reset OTP",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Could not process request: {e}"),
                )),
            );
        }
    };

    let code = generate_numeric_code(config.otp.length);
    let code_hash = match hash_otp_code(&code) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Could not process request: {e}"),
                )),
            );
        }
    };
    let expires = chrono::Utc::now().timestamp() + config.otp.ttl_minutes * 60;

    if let Err(e) = storage
        .set_student_reset_code(&student.id, &code_hash, expires)
        .await
    {
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Could not process request: {e}"),
            )),
        );
    }

    if let Err(e) = mailer()
        .send_password_reset_otp(&student.email, &code)
        .await
    {
        tracing::error!("Failed to deliver reset OTP: {}", e);
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::MailDeliveryFailed,
                "Could not send OTP email. Please try again.",
            )),
        );
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
        "If this email is registered, you'll receive a reset OTP",
    )))
}

/// 校验重置 OTP
pub async fn handle_verify_reset_otp(
    service: &StudentAuthService,
    verify_request: VerifyOtpRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    let invalid = || {
        HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::OtpInvalid,
            "Invalid or expired OTP. Please request a new one.",
        ))
    };

    let student = match storage.get_student_by_email(&verify_request.email).await {
        Ok(Some(student)) => student,
        Ok(None) => return Ok(invalid()),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Could not verify OTP: {e}"),
                )),
            );
        }
    };

    if !reset_code_usable(&student) {
        return Ok(invalid());
    }

    let matches = student
        .reset_code_hash
        .as_deref()
        .is_some_and(|hash| verify_otp_code(&verify_request.otp, hash));

    if !matches {
        if let Ok(attempts) = storage.bump_student_reset_attempts(&student.id).await
            && attempts >= config.otp.max_attempts
        {
            let _ = storage.clear_student_reset_code(&student.id).await;
        }
        return Ok(invalid());
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("OTP verified successfully")))
}

/// 使用 OTP 重置密码，成功后发送确认邮件
pub async fn handle_reset_password(
    service: &StudentAuthService,
    reset_request: ResetPasswordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    let invalid = || {
        HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::OtpInvalid,
            "Invalid or expired OTP. Please start the reset process again.",
        ))
    };

    let student = match storage.get_student_by_email(&reset_request.email).await {
        Ok(Some(student)) => student,
        Ok(None) => return Ok(invalid()),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Could not reset password: {e}"),
                )),
            );
        }
    };

    if !reset_code_usable(&student) {
        return Ok(invalid());
    }

    let matches = student
        .reset_code_hash
        .as_deref()
        .is_some_and(|hash| verify_otp_code(&reset_request.otp, hash));

    if !matches {
        if let Ok(attempts) = storage.bump_student_reset_attempts(&student.id).await
            && attempts >= config.otp.max_attempts
        {
            let _ = storage.clear_student_reset_code(&student.id).await;
        }
        return Ok(invalid());
    }

    // 新密码必须满足密码策略
    if let Err(msg) = validate_password_simple(&reset_request.new_password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::PasswordInvalid, msg)));
    }

    let password_hash = match hash_password(&reset_request.new_password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Could not reset password: {e}"),
                )),
            );
        }
    };

    match storage
        .update_student_password(&student.id, &password_hash)
        .await
    {
        Ok(_) => {
            tracing::info!("Student {} reset password via OTP", student.email);

            // 确认邮件发送失败不影响已完成的重置
            if let Err(e) = mailer().send_password_changed_notice(&student.email).await {
                tracing::warn!("Failed to deliver password change notice: {}", e);
            }

            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Password reset successful. You can now login with your new password.",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UpdateFailed,
                format!("Could not reset password: {e}"),
            )),
        ),
    }
}
