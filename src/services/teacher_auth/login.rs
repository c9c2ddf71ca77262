use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::auth::requests::LoginRequest;
use crate::models::auth::responses::LoginResponse;
use crate::models::teachers::entities::TeacherStatus;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt;
use crate::utils::password::verify_password;

use super::TeacherAuthService;

pub async fn handle_login(
    service: &TeacherAuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    let auth_failed = || {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Incorrect email or password",
        ))
    };

    let teacher = match storage.get_teacher_by_email(&login_request.email).await {
        Ok(Some(teacher)) => teacher,
        Ok(None) => return Ok(auth_failed()),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Login failed: {e}"),
                )),
            );
        }
    };

    if !verify_password(&login_request.password, &teacher.password_hash) {
        return Ok(auth_failed());
    }

    // 密码正确也要拒绝未通过审核的账户
    match teacher.status {
        TeacherStatus::Approved => {}
        TeacherStatus::Pending => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::AccountNotApproved,
                "Your application is still pending review",
            )));
        }
        TeacherStatus::Rejected => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::AccountNotApproved,
                "Your application has been rejected",
            )));
        }
    }

    // 更新最后登录时间
    let _ = storage.update_teacher_last_login(teacher.id).await;

    match teacher.generate_token_pair(
        login_request
            .remember_me
            .then(|| chrono::Duration::days(config.jwt.refresh_token_remember_me_expiry)),
    ) {
        Ok(token_pair) => {
            tracing::info!("Teacher {} logged in successfully", teacher.email);

            let response = LoginResponse {
                access_token: token_pair.access_token,
                expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
                user: teacher,
                created_at: chrono::Utc::now(),
            };

            let refresh_cookie =
                jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

            Ok(HttpResponse::Ok()
                .cookie(refresh_cookie)
                .json(ApiResponse::success(response, "Login successful")))
        }
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            )
        }
    }
}
