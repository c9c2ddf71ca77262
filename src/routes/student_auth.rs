use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::auth::entities::AuthRole;
use crate::models::auth::requests::{
    ForgotPasswordRequest, LoginRequest, ResetPasswordRequest, VerifyOtpRequest,
};
use crate::models::students::requests::StudentRegisterRequest;
use crate::services::StudentAuthService;

// 懒加载的全局 StudentAuthService 实例
static STUDENT_AUTH_SERVICE: Lazy<StudentAuthService> = Lazy::new(StudentAuthService::new_lazy);

pub async fn register(
    req: HttpRequest,
    register_data: web::Json<StudentRegisterRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_AUTH_SERVICE
        .register(register_data.into_inner(), &req)
        .await
}

pub async fn verify_otp(
    req: HttpRequest,
    verify_data: web::Json<VerifyOtpRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_AUTH_SERVICE
        .verify_otp(verify_data.into_inner(), &req)
        .await
}

pub async fn login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_AUTH_SERVICE
        .login(login_data.into_inner(), &req)
        .await
}

pub async fn forgot_password(
    req: HttpRequest,
    forgot_data: web::Json<ForgotPasswordRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_AUTH_SERVICE
        .forgot_password(forgot_data.into_inner(), &req)
        .await
}

pub async fn verify_reset_otp(
    req: HttpRequest,
    verify_data: web::Json<VerifyOtpRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_AUTH_SERVICE
        .verify_reset_otp(verify_data.into_inner(), &req)
        .await
}

pub async fn reset_password(
    req: HttpRequest,
    reset_data: web::Json<ResetPasswordRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_AUTH_SERVICE
        .reset_password(reset_data.into_inner(), &req)
        .await
}

pub async fn me(request: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_AUTH_SERVICE.me(&request).await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/student")
            .service(
                web::resource("/register")
                    .wrap(RateLimit::register())
                    .route(web::post().to(register)),
            )
            .service(
                web::resource("/verify-otp")
                    .wrap(RateLimit::otp())
                    .route(web::post().to(verify_otp)),
            )
            .service(
                web::resource("/login")
                    .wrap(RateLimit::login())
                    .route(web::post().to(login)),
            )
            .service(
                web::resource("/forgot-password")
                    .wrap(RateLimit::otp())
                    .route(web::post().to(forgot_password)),
            )
            .service(
                web::resource("/forgot-password/verify")
                    .wrap(RateLimit::otp())
                    .route(web::post().to(verify_reset_otp)),
            )
            .service(
                web::resource("/reset-password")
                    .wrap(RateLimit::otp())
                    .route(web::post().to(reset_password)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(AuthRole::student_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route("/me", web::get().to(me)),
            ),
    );
}
