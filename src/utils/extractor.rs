//! 路径参数安全提取器
//!
//! 直接用 `web::Path<i64>` 时，非法输入会落到默认的 400 纯文本响应，
//! 这里统一换成 ApiResponse JSON 信封。

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(message: &str) -> Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
        ErrorCode::BadRequest,
        message,
    ));
    InternalError::from_response(message.to_string(), response).into()
}

/// 路径中的数字 ID（管理员、教师、题目等）
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = req
            .match_info()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|id| *id > 0)
            .map(SafeIDI64)
            .ok_or_else(|| bad_request("Invalid id in path"));
        ready(result)
    }
}

/// 路径中的学生 UUID
pub struct SafeStudentId(pub String);

impl FromRequest for SafeStudentId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = req
            .match_info()
            .get("id")
            .filter(|raw| uuid::Uuid::parse_str(raw).is_ok())
            .map(|raw| SafeStudentId(raw.to_string()))
            .ok_or_else(|| bad_request("Invalid student id in path"));
        ready(result)
    }
}
