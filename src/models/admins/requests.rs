use serde::Deserialize;
use ts_rs::TS;

// 子管理员创建请求（仅主管理员）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/admin.ts")]
pub struct CreateSubAdminRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

// 管理员创建参数（存储层，密码已哈希）
#[derive(Debug, Clone)]
pub struct CreateAdminParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: super::entities::AdminRole,
    pub status: super::entities::AdminStatus,
}
