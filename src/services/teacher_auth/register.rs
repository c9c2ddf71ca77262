use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs;
use std::io::Write;
use std::{fs::File, path::Path};
use uuid::Uuid;

use super::TeacherAuthService;
use crate::config::AppConfig;
use crate::errors::ELearnError;
use crate::models::teachers::requests::CreateTeacherParams;
use crate::models::teachers::responses::TeacherResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::{
    validate_email, validate_full_name, validate_password_simple, validate_phone,
};
use crate::utils::validate_magic_bytes;

// 入驻表单解析结果
#[derive(Default)]
struct RegistrationForm {
    email: String,
    password: String,
    full_name: String,
    phone: String,
    specialization: String,
    qualifications: String,
    linkedin_url: Option<String>,
    hourly_rate: Option<f64>,
    cv_path: Option<String>,
    certificate_paths: Vec<String>,
    profile_photo_path: Option<String>,
}

// 读取 multipart 文本字段
async fn read_text_field(field: &mut actix_multipart::Field) -> Result<String, ELearnError> {
    let mut data = Vec::new();
    while let Some(chunk) = field.next().await {
        let bytes =
            chunk.map_err(|e| ELearnError::validation(format!("读取表单字段失败: {e}")))?;
        data.extend_from_slice(&bytes);
    }
    String::from_utf8(data)
        .map(|s| s.trim().to_string())
        .map_err(|_| ELearnError::validation("表单字段不是合法的 UTF-8"))
}

// 将 multipart 文件字段写入上传目录，返回落盘路径
//
// 首个 chunk 校验魔术字节，超出大小上限时删除半成品文件。
async fn save_file_field(
    field: &mut actix_multipart::Field,
    original_name: &str,
) -> Result<String, HttpResponse> {
    let config = AppConfig::get();
    let upload_dir = &config.upload.dir;

    // 确保上传目录存在
    if !Path::new(upload_dir).exists()
        && let Err(e) = fs::create_dir_all(upload_dir)
    {
        tracing::error!("{}", ELearnError::file_operation(format!("{e}")));
        return Err(
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                ErrorCode::InternalServerError,
                "创建上传目录失败",
            )),
        );
    }

    // 扩展名校验
    let extension = Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default();

    if !config
        .upload
        .allowed_types
        .iter()
        .any(|t| t.to_lowercase() == extension)
    {
        return Err(HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
            ErrorCode::FileTypeNotAllowed,
            "File type not allowed",
        )));
    }

    let stored_name = format!(
        "{}-{}{}",
        chrono::Utc::now().timestamp(),
        Uuid::new_v4(),
        extension
    );
    let file_path = format!("{upload_dir}/{stored_name}");
    let mut f = match File::create(&file_path) {
        Ok(file) => file,
        Err(e) => {
            tracing::error!("{}", ELearnError::file_operation(format!("{e}")));
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    "文件创建失败",
                )),
            );
        }
    };

    let mut total_size: usize = 0;
    let mut first_chunk = true;
    while let Some(chunk) = field.next().await {
        let data = match chunk {
            Ok(data) => data,
            Err(e) => {
                let _ = fs::remove_file(&file_path);
                tracing::error!("{}", ELearnError::file_operation(format!("{e}")));
                return Err(HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
                    ErrorCode::BadRequest,
                    "上传流读取失败",
                )));
            }
        };

        // 第一个 chunk 时验证魔术字节
        if first_chunk {
            first_chunk = false;
            if !validate_magic_bytes(&data, &extension) {
                let _ = fs::remove_file(&file_path);
                return Err(HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
                    ErrorCode::FileTypeNotAllowed,
                    "文件内容与扩展名不匹配",
                )));
            }
        }

        total_size += data.len();
        // 校验大小
        if total_size > config.upload.max_size {
            let _ = fs::remove_file(&file_path);
            return Err(HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
                ErrorCode::FileSizeExceeded,
                "File size exceeds the limit",
            )));
        }

        if let Err(e) = f.write_all(&data) {
            let _ = fs::remove_file(&file_path);
            tracing::error!("{}", ELearnError::file_operation(format!("{e}")));
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                    ErrorCode::InternalServerError,
                    "文件写入失败",
                )),
            );
        }
    }

    Ok(file_path)
}

// 解析入驻申请表单
async fn parse_registration_form(
    mut payload: Multipart,
) -> Result<RegistrationForm, HttpResponse> {
    let mut form = RegistrationForm::default();

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();
        let file_name = content_disposition
            .and_then(|cd| cd.get_filename())
            .map(|s| s.to_string());

        match name.as_str() {
            "cv" => {
                let original = file_name.unwrap_or_default();
                form.cv_path = Some(save_file_field(&mut field, &original).await?);
            }
            "certificates" => {
                let original = file_name.unwrap_or_default();
                form.certificate_paths
                    .push(save_file_field(&mut field, &original).await?);
            }
            "profile_photo" => {
                let original = file_name.unwrap_or_default();
                form.profile_photo_path = Some(save_file_field(&mut field, &original).await?);
            }
            _ => {
                let value = match read_text_field(&mut field).await {
                    Ok(value) => value,
                    Err(e) => {
                        return Err(HttpResponse::BadRequest().json(
                            ApiResponse::<()>::error_empty(
                                ErrorCode::BadRequest,
                                e.message().to_string(),
                            ),
                        ));
                    }
                };

                match name.as_str() {
                    "email" => form.email = value,
                    "password" => form.password = value,
                    "full_name" => form.full_name = value,
                    "phone" => form.phone = value,
                    "specialization" => form.specialization = value,
                    "qualifications" => form.qualifications = value,
                    "linkedin_url" if !value.is_empty() => form.linkedin_url = Some(value),
                    "hourly_rate" if !value.is_empty() => {
                        form.hourly_rate = value.parse::<f64>().ok();
                    }
                    _ => {}
                }
            }
        }
    }

    Ok(form)
}

/// 教师入驻申请
///
/// multipart 表单携带基础资料与证件文件（cv / certificates / profile_photo），
/// 账户创建后处于 pending，由管理员审核。
pub async fn handle_register(
    service: &TeacherAuthService,
    payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let form = match parse_registration_form(payload).await {
        Ok(form) => form,
        Err(response) => return Ok(response),
    };

    // 字段校验
    if let Err(msg) = validate_email(&form.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::EmailInvalid, msg)));
    }

    if let Err(msg) = validate_password_simple(&form.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::PasswordInvalid, msg)));
    }

    if let Err(msg) = validate_full_name(&form.full_name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::FullNameInvalid, msg)));
    }

    if let Err(msg) = validate_phone(&form.phone) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::PhoneInvalid, msg)));
    }

    if form.specialization.is_empty() || form.qualifications.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Specialization and qualifications are required",
        )));
    }

    // 邮箱查重
    match storage.get_teacher_by_email(&form.email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::EmailAlreadyExists,
                "Teacher already exists with this email",
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

    let password_hash = match hash_password(&form.password) {
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

    let params = CreateTeacherParams {
        email: form.email,
        password_hash,
        full_name: form.full_name,
        phone: form.phone,
        specialization: form.specialization,
        qualifications: form.qualifications,
        linkedin_url: form.linkedin_url,
        hourly_rate: form.hourly_rate,
        cv_path: form.cv_path,
        certificate_paths: form.certificate_paths,
        profile_photo_path: form.profile_photo_path,
    };

    match storage.create_teacher(params).await {
        Ok(teacher) => {
            tracing::info!("Teacher application submitted: {}", teacher.email);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                TeacherResponse { teacher },
                "Application submitted, pending review",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RegisterFailed,
                format!("注册失败: {e}"),
            )),
        ),
    }
}
