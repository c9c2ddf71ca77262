use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::auth::entities::AuthRole;
use crate::models::auth::requests::{
    ForgotPasswordRequest, LoginRequest, ResetPasswordRequest, VerifyOtpRequest,
};
use crate::routes::{mcqs, questions};
use crate::services::TeacherAuthService;

// 懒加载的全局 TeacherAuthService 实例
static TEACHER_AUTH_SERVICE: Lazy<TeacherAuthService> = Lazy::new(TeacherAuthService::new_lazy);

pub async fn register(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    TEACHER_AUTH_SERVICE.register(payload, &req).await
}

pub async fn login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_AUTH_SERVICE
        .login(login_data.into_inner(), &req)
        .await
}

pub async fn forgot_password(
    req: HttpRequest,
    forgot_data: web::Json<ForgotPasswordRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_AUTH_SERVICE
        .forgot_password(forgot_data.into_inner(), &req)
        .await
}

pub async fn verify_otp(
    req: HttpRequest,
    verify_data: web::Json<VerifyOtpRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_AUTH_SERVICE
        .verify_otp(verify_data.into_inner(), &req)
        .await
}

pub async fn reset_password(
    req: HttpRequest,
    reset_data: web::Json<ResetPasswordRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_AUTH_SERVICE
        .reset_password(reset_data.into_inner(), &req)
        .await
}

pub async fn me(request: HttpRequest) -> ActixResult<HttpResponse> {
    TEACHER_AUTH_SERVICE.me(&request).await
}

// 配置路由（认证 + 选择题 / 题目子路由）
pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/teacher")
            .service(
                web::resource("/register")
                    .wrap(RateLimit::register())
                    .route(web::post().to(register)),
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
                web::resource("/verify-otp")
                    .wrap(RateLimit::otp())
                    .route(web::post().to(verify_otp)),
            )
            .service(
                web::resource("/reset-password")
                    .wrap(RateLimit::otp())
                    .route(web::post().to(reset_password)),
            )
            .service(mcqs::mcq_scope())
            .service(questions::question_scope())
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(AuthRole::teacher_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route("/me", web::get().to(me)),
            ),
    );
}
