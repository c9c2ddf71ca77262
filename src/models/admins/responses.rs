use super::entities::Admin;
use serde::Serialize;
use ts_rs::TS;

// 管理员响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/admin.ts")]
pub struct AdminResponse {
    pub admin: Admin,
}

// 子管理员列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/admin.ts")]
pub struct SubAdminListResponse {
    pub items: Vec<Admin>,
    pub count: i64,
}
