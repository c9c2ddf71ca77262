use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::ErrorCode;

// 统一的 API 响应信封
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ApiResponse<T: TS> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T: TS> ApiResponse<T> {
    fn build(code: ErrorCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self::build(ErrorCode::Success, message, Some(data))
    }

    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self::build(code, message, Some(data))
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self::build(ErrorCode::Success, message, None)
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::build(code, message, None)
    }
}

// 批量删除响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct BulkDeleteResponse {
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_error_omits_data_field() {
        let body =
            serde_json::to_value(ApiResponse::error_empty(ErrorCode::NotFound, "Not found"))
                .unwrap();
        assert_eq!(body["code"], ErrorCode::NotFound as i32);
        assert!(body.get("data").is_none());
    }

    #[test]
    fn success_carries_payload() {
        let body = serde_json::to_value(ApiResponse::success(
            BulkDeleteResponse { deleted_count: 3 },
            "ok",
        ))
        .unwrap();
        assert_eq!(body["code"], ErrorCode::Success as i32);
        assert_eq!(body["data"]["deleted_count"], 3);
    }
}
