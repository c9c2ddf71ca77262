use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::admins::requests::CreateSubAdminRequest;
use crate::models::auth::entities::AuthRole;
use crate::models::auth::requests::{
    ForgotPasswordRequest, LoginRequest, RegisterAdminRequest, ResetPasswordRequest,
    VerifyOtpRequest,
};
use crate::services::AuthService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn check_admin(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.check_admin(&req).await
}

pub async fn register(
    req: HttpRequest,
    register_data: web::Json<RegisterAdminRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.register(register_data.into_inner(), &req).await
}

pub async fn login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(login_data.into_inner(), &req).await
}

pub async fn refresh_token(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.refresh_token(&request).await
}

pub async fn forgot_password(
    req: HttpRequest,
    forgot_data: web::Json<ForgotPasswordRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .forgot_password(forgot_data.into_inner(), &req)
        .await
}

pub async fn verify_otp(
    req: HttpRequest,
    verify_data: web::Json<VerifyOtpRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.verify_otp(verify_data.into_inner(), &req).await
}

pub async fn reset_password(
    req: HttpRequest,
    reset_data: web::Json<ResetPasswordRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .reset_password(reset_data.into_inner(), &req)
        .await
}

pub async fn me(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.me(&request).await
}

pub async fn create_subadmin(
    req: HttpRequest,
    create_data: web::Json<CreateSubAdminRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .create_subadmin(create_data.into_inner(), &req)
        .await
}

pub async fn list_subadmins(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.list_subadmins(&request).await
}

pub async fn delete_subadmin(req: HttpRequest, subadmin_id: SafeIDI64) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.delete_subadmin(subadmin_id.0, &req).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .route("/check-admin", web::get().to(check_admin))
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
                web::resource("/refresh")
                    .wrap(RateLimit::refresh_token())
                    .route(web::post().to(refresh_token)),
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
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .service(
                        web::scope("/subadmins")
                            .wrap(middlewares::RequireRole::new_any(AuthRole::root_roles()))
                            .route("", web::post().to(create_subadmin))
                            .route("", web::get().to(list_subadmins))
                            .route("/{id}", web::delete().to(delete_subadmin)),
                    )
                    .service(
                        web::scope("")
                            .wrap(middlewares::RequireRole::new_any(AuthRole::admin_roles()))
                            .route("/me", web::get().to(me)),
                    ),
            ),
    );
}
