use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::students::entities::StudentStatus;
use crate::models::students::requests::{CreateStudentParams, StudentRegisterRequest};
use crate::models::students::responses::StudentResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::mailer::mailer;
use crate::utils::password::{hash_otp_code, hash_password};
use crate::utils::random_code::generate_numeric_code;
use crate::utils::validate::{
    validate_email, validate_full_name, validate_password_simple, validate_phone,
};

use super::StudentAuthService;

/// 学生注册
///
/// 创建 inactive 账户并发送验证 OTP，账户在 OTP 验证通过前无法登录。
pub async fn handle_register(
    service: &StudentAuthService,
    register_request: StudentRegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 1. 字段校验
    if let Err(msg) = validate_email(&register_request.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::EmailInvalid, msg)));
    }

    if let Err(msg) = validate_password_simple(&register_request.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::PasswordInvalid, msg)));
    }

    if let Err(msg) = validate_full_name(&register_request.full_name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::FullNameInvalid, msg)));
    }

    if let Err(msg) = validate_phone(&register_request.phone) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::PhoneInvalid, msg)));
    }

    // 2. 邮箱查重
    match storage.get_student_by_email(&register_request.email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::EmailAlreadyExists,
                "Student already exists with this email",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    format!("Register failed: {e}"),
                )),
            );
        }
    }

    // 3. 生成注册验证 OTP
    let code = generate_numeric_code(config.otp.length);
    let code_hash = match hash_otp_code(&code) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    format!("Register failed: {e}"),
                )),
            );
        }
    };
    let expires = chrono::Utc::now().timestamp() + config.otp.ttl_minutes * 60;

    // 4. 哈希密码并创建未激活账户
    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    format!("密码哈希失败: {e}"),
                )),
            );
        }
    };

    let params = CreateStudentParams {
        email: register_request.email,
        password_hash,
        full_name: register_request.full_name,
        phone: register_request.phone,
        date_of_birth: register_request.date_of_birth,
        address: register_request.address,
        status: StudentStatus::Inactive,
        otp_hash: Some(code_hash),
        otp_expires: Some(expires),
    };

    let student = match storage.create_student(params).await {
        Ok(student) => student,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    format!("注册失败: {e}"),
                )),
            );
        }
    };

    // 5. 发送验证邮件
    if let Err(e) = mailer()
        .send_verification_otp(&student.email, &code)
        .await
    {
        tracing::error!("Failed to deliver verification OTP: {}", e);
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::MailDeliveryFailed,
                "Could not send OTP email. Please try again.",
            )),
        );
    }

    Ok(HttpResponse::Created().json(ApiResponse::success(
        StudentResponse { student },
        "OTP sent to your email for verification",
    )))
}
