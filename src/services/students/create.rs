use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::students::entities::StudentStatus;
use crate::models::students::requests::{CreateStudentParams, CreateStudentRequest};
use crate::models::students::responses::StudentResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::{
    validate_email, validate_full_name, validate_password_simple, validate_phone,
};

/// 管理端创建学生，无 OTP 流程，创建即激活
pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 字段校验
    if let Err(msg) = validate_email(&student_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::EmailInvalid, msg)));
    }

    if let Err(msg) = validate_password_simple(&student_data.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::PasswordInvalid, msg)));
    }

    if let Err(msg) = validate_full_name(&student_data.full_name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::FullNameInvalid, msg)));
    }

    if let Err(msg) = validate_phone(&student_data.phone) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::PhoneInvalid, msg)));
    }

    // 邮箱查重
    match storage.get_student_by_email(&student_data.email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::EmailAlreadyExists,
                "Student with this email already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CreateFailed,
                    format!("Student creation failed: {e}"),
                )),
            );
        }
    }

    let password_hash = match hash_password(&student_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Password hashing failed: {e}"),
                )),
            );
        }
    };

    let params = CreateStudentParams {
        email: student_data.email,
        password_hash,
        full_name: student_data.full_name,
        phone: student_data.phone,
        date_of_birth: student_data.date_of_birth,
        address: student_data.address,
        status: StudentStatus::Active,
        otp_hash: None,
        otp_expires: None,
    };

    match storage.create_student(params).await {
        Ok(student) => Ok(HttpResponse::Created().json(ApiResponse::success(
            StudentResponse { student },
            "Student created successfully",
        ))),
        Err(e) => {
            let msg = format!("Student creation failed: {e}");
            error!("{}", msg);
            // 判断是否唯一约束冲突
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::EmailAlreadyExists,
                    "Student with this email already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::CreateFailed, msg)))
            }
        }
    }
}
