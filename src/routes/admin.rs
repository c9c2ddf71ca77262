use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::AuthRole;
use crate::models::students::requests::{
    BulkDeleteStudentsRequest, CreateStudentRequest, StudentListParams,
    UpdateStudentPasswordRequest, UpdateStudentRequest, UpdateStudentStatusRequest,
};
use crate::models::teachers::requests::{
    BulkDeleteTeachersRequest, TeacherListParams, UpdateTeacherPasswordRequest,
    UpdateTeacherRequest, UpdateTeacherStatusRequest,
};
use crate::services::{StudentService, TeacherService};
use crate::utils::{SafeIDI64, SafeStudentId};

// 懒加载的全局服务实例
static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

// ---- 教师账户管理 ----

pub async fn list_teachers(
    req: HttpRequest,
    query: web::Query<TeacherListParams>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.list_teachers(query.into_inner(), &req).await
}

pub async fn get_teacher(req: HttpRequest, teacher_id: SafeIDI64) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.get_teacher(teacher_id.0, &req).await
}

pub async fn update_teacher(
    req: HttpRequest,
    teacher_id: SafeIDI64,
    update_data: web::Json<UpdateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .update_teacher(teacher_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn update_teacher_password(
    req: HttpRequest,
    teacher_id: SafeIDI64,
    update_data: web::Json<UpdateTeacherPasswordRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .update_teacher_password(teacher_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn update_teacher_status(
    req: HttpRequest,
    teacher_id: SafeIDI64,
    update_data: web::Json<UpdateTeacherStatusRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .update_teacher_status(teacher_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_teacher(req: HttpRequest, teacher_id: SafeIDI64) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.delete_teacher(teacher_id.0, &req).await
}

pub async fn delete_teachers(
    req: HttpRequest,
    delete_data: web::Json<BulkDeleteTeachersRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .delete_teachers(delete_data.into_inner(), &req)
        .await
}

// ---- 学生账户管理 ----

pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(query.into_inner(), &req).await
}

pub async fn create_student(
    req: HttpRequest,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(student_data.into_inner(), &req)
        .await
}

pub async fn get_student(
    req: HttpRequest,
    student_id: SafeStudentId,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(&student_id.0, &req).await
}

pub async fn update_student(
    req: HttpRequest,
    student_id: SafeStudentId,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(&student_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn update_student_password(
    req: HttpRequest,
    student_id: SafeStudentId,
    update_data: web::Json<UpdateStudentPasswordRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student_password(&student_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn update_student_status(
    req: HttpRequest,
    student_id: SafeStudentId,
    update_data: web::Json<UpdateStudentStatusRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student_status(&student_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_student(
    req: HttpRequest,
    student_id: SafeStudentId,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(&student_id.0, &req).await
}

pub async fn delete_students(
    req: HttpRequest,
    delete_data: web::Json<BulkDeleteStudentsRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .delete_students(delete_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admin")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(AuthRole::admin_roles()))
                    // 教师账户
                    .route("/teachers", web::get().to(list_teachers))
                    .route("/teachers/{id}", web::get().to(get_teacher))
                    .route("/teachers/{id}", web::put().to(update_teacher))
                    .route("/teachers/{id}", web::delete().to(delete_teacher))
                    .route(
                        "/teachers-update-password/{id}",
                        web::put().to(update_teacher_password),
                    )
                    .route("/teachers-status/{id}", web::put().to(update_teacher_status))
                    .route("/delete-all-teachers", web::delete().to(delete_teachers))
                    // 学生账户
                    .route("/students", web::get().to(list_students))
                    .route("/students", web::post().to(create_student))
                    .route("/students/{id}", web::get().to(get_student))
                    .route("/students/{id}", web::put().to(update_student))
                    .route("/students/{id}", web::delete().to(delete_student))
                    .route(
                        "/students-update-password/{id}",
                        web::put().to(update_student_password),
                    )
                    .route("/students-status/{id}", web::put().to(update_student_status))
                    .route("/delete-all-students", web::delete().to(delete_students)),
            ),
    );
}
