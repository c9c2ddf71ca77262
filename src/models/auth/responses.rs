use serde::Serialize;
use ts_rs::TS;

// 登录响应，user 按账户类型分别是 Admin / Teacher / Student
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginResponse<T: TS> {
    pub access_token: String,
    pub expires_in: i64,
    pub user: T,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub expires_in: i64,
}

// 首个管理员是否已注册
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct CheckAdminResponse {
    pub exists: bool,
    pub admin: Option<crate::models::admins::entities::Admin>,
}
