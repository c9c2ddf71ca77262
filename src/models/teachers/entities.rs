use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 教师入驻状态：注册后 pending，管理员审核后 approved / rejected
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub enum TeacherStatus {
    Pending,
    Approved,
    Rejected,
}

impl<'de> Deserialize<'de> for TeacherStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "pending" => Ok(TeacherStatus::Pending),
            "approved" => Ok(TeacherStatus::Approved),
            "rejected" => Ok(TeacherStatus::Rejected),
            _ => Err(serde::de::Error::custom(format!(
                "无效的教师状态: '{s}'. 支持的状态: pending, approved, rejected"
            ))),
        }
    }
}

impl std::fmt::Display for TeacherStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeacherStatus::Pending => write!(f, "pending"),
            TeacherStatus::Approved => write!(f, "approved"),
            TeacherStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for TeacherStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TeacherStatus::Pending),
            "approved" => Ok(TeacherStatus::Approved),
            "rejected" => Ok(TeacherStatus::Rejected),
            _ => Err(format!("Invalid teacher status: {s}")),
        }
    }
}

// 教师实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct Teacher {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub full_name: String,
    pub phone: String,
    pub specialization: String,
    pub qualifications: String,
    pub linkedin_url: Option<String>,
    pub hourly_rate: Option<f64>,
    pub status: TeacherStatus,
    pub rejection_reason: Option<String>,
    pub cv_path: Option<String>,
    pub certificate_paths: Vec<String>,
    pub profile_photo_path: Option<String>,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub reset_code_hash: Option<String>,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub reset_code_expires: Option<i64>,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub reset_code_attempts: i32,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Teacher {
    // 生成 token 对（access + refresh）
    pub fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            &self.id.to_string(),
            crate::models::auth::AuthRole::TEACHER,
            refresh_token_expiry,
        )
        .map_err(|e| format!("生成 token 对失败: {e}"))
    }
}
