use super::entities::TeacherStatus;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

/// 教师创建参数（存储层）
///
/// 由 multipart 注册表单解析而来，password 字段在进入存储层之前已哈希，
/// 文件路径指向已落盘的上传文件。
#[derive(Debug, Clone)]
pub struct CreateTeacherParams {
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub phone: String,
    pub specialization: String,
    pub qualifications: String,
    pub linkedin_url: Option<String>,
    pub hourly_rate: Option<f64>,
    pub cv_path: Option<String>,
    pub certificate_paths: Vec<String>,
    pub profile_photo_path: Option<String>,
}

// 教师信息更新请求，密码走独立的密码路由
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct UpdateTeacherRequest {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub specialization: Option<String>,
    pub qualifications: Option<String>,
    pub linkedin_url: Option<String>,
    pub hourly_rate: Option<f64>,
    // 通过该路由修改密码会被拒绝
    pub password: Option<String>,
}

// 教师密码更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct UpdateTeacherPasswordRequest {
    pub new_password: String,
}

// 教师入驻状态更新请求，驳回时必须给出原因
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct UpdateTeacherStatusRequest {
    pub status: TeacherStatus,
    pub rejection_reason: Option<String>,
}

// 批量删除请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct BulkDeleteTeachersRequest {
    pub teacher_ids: Vec<i64>,
}

// 教师查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<TeacherStatus>,
    pub search: Option<String>,
}

// 教师列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct TeacherListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<TeacherStatus>,
    pub search: Option<String>,
}
