use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生状态：注册后处于 inactive，OTP 验证通过后转为 active
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub enum StudentStatus {
    Active,
    Inactive,
}

impl<'de> Deserialize<'de> for StudentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "active" => Ok(StudentStatus::Active),
            "inactive" => Ok(StudentStatus::Inactive),
            _ => Err(serde::de::Error::custom(format!(
                "无效的学生状态: '{s}'. 支持的状态: active, inactive"
            ))),
        }
    }
}

impl std::fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StudentStatus::Active => write!(f, "active"),
            StudentStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl std::str::FromStr for StudentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(StudentStatus::Active),
            "inactive" => Ok(StudentStatus::Inactive),
            _ => Err(format!("Invalid student status: {s}")),
        }
    }
}

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    /// 注册时生成的 UUID
    pub id: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub full_name: String,
    pub phone: String,
    pub date_of_birth: Option<chrono::NaiveDate>,
    pub address: Option<String>,
    pub profile_photo: Option<String>,
    pub status: StudentStatus,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub otp_hash: Option<String>,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub otp_expires: Option<i64>,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub reset_code_hash: Option<String>,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub reset_code_expires: Option<i64>,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub reset_code_attempts: i32,
    pub password_changed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Student {
    // 生成 token 对（access + refresh）
    pub fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            &self.id,
            crate::models::auth::AuthRole::STUDENT,
            refresh_token_expiry,
        )
        .map_err(|e| format!("生成 token 对失败: {e}"))
    }
}
