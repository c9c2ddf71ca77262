use super::entities::StudentStatus;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 学生自助注册请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentRegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
    pub date_of_birth: Option<chrono::NaiveDate>,
    pub address: Option<String>,
}

// 管理端创建学生请求（创建即激活，无 OTP 流程）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
    pub date_of_birth: Option<chrono::NaiveDate>,
    pub address: Option<String>,
}

/// 学生创建参数（存储层，密码已哈希）
///
/// 自助注册时 status 为 inactive 并携带注册 OTP，
/// 管理端创建时 status 为 active 且没有 OTP。
#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub phone: String,
    pub date_of_birth: Option<chrono::NaiveDate>,
    pub address: Option<String>,
    pub status: StudentStatus,
    pub otp_hash: Option<String>,
    pub otp_expires: Option<i64>,
}

// 学生信息更新请求，密码走独立的密码路由
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<chrono::NaiveDate>,
    pub address: Option<String>,
    pub profile_photo: Option<String>,
    // 通过该路由修改密码会被拒绝
    pub password: Option<String>,
}

// 学生密码更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentPasswordRequest {
    pub new_password: String,
}

// 学生状态更新请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentStatusRequest {
    pub status: StudentStatus,
}

// 批量删除请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct BulkDeleteStudentsRequest {
    pub student_ids: Vec<String>,
}

// 学生查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<StudentStatus>,
    pub search: Option<String>,
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<StudentStatus>,
    pub search: Option<String>,
}
