use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::auth::requests::VerifyOtpRequest;
use crate::models::auth::responses::LoginResponse;
use crate::models::students::entities::StudentStatus;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt;
use crate::utils::password::verify_otp_code;

use super::StudentAuthService;

/// 注册 OTP 验证，通过后激活账户并发放令牌
pub async fn handle_verify_otp(
    service: &StudentAuthService,
    verify_request: VerifyOtpRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    let invalid = || {
        HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::OtpInvalid,
            "Invalid OTP or OTP expired",
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

    // 已激活的账户无需重复验证
    if student.status == StudentStatus::Active {
        return Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Account already verified")));
    }

    let now = chrono::Utc::now().timestamp();
    let matches = student.otp_expires.is_some_and(|exp| exp > now)
        && student
            .otp_hash
            .as_deref()
            .is_some_and(|hash| verify_otp_code(&verify_request.otp, hash));

    if !matches {
        return Ok(invalid());
    }

    // 激活账户并清除 OTP
    let student = match storage.activate_student(&student.id).await {
        Ok(Some(student)) => student,
        Ok(None) => return Ok(invalid()),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Could not activate account: {e}"),
                )),
            );
        }
    };

    // 发放令牌，验证即视为一次登录
    let _ = storage.update_student_last_login(&student.id).await;

    match student.generate_token_pair(None) {
        Ok(token_pair) => {
            tracing::info!("Student {} verified their account", student.email);

            let response = LoginResponse {
                access_token: token_pair.access_token,
                expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
                user: student,
                created_at: chrono::Utc::now(),
            };

            let refresh_cookie =
                jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

            Ok(HttpResponse::Ok()
                .cookie(refresh_cookie)
                .json(ApiResponse::success(
                    response,
                    "Account verified successfully",
                )))
        }
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Verification succeeded but token generation failed, please login",
                )),
            )
        }
    }
}
