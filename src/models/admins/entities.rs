use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 管理员角色
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../frontend/src/types/generated/admin.ts")]
pub enum AdminRole {
    Admin,    // 主管理员
    SubAdmin, // 子管理员，由主管理员创建
}

impl<'de> Deserialize<'de> for AdminRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "admin" => Ok(AdminRole::Admin),
            "subadmin" => Ok(AdminRole::SubAdmin),
            _ => Err(serde::de::Error::custom(format!(
                "无效的管理员角色: '{s}'. 支持的角色: admin, subadmin"
            ))),
        }
    }
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminRole::Admin => write!(f, "admin"),
            AdminRole::SubAdmin => write!(f, "subadmin"),
        }
    }
}

impl std::str::FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(AdminRole::Admin),
            "subadmin" => Ok(AdminRole::SubAdmin),
            _ => Err(format!("Invalid admin role: {s}")),
        }
    }
}

// 管理员状态
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/admin.ts")]
pub enum AdminStatus {
    Active,    // 活跃
    Inactive,  // 非活跃
    Suspended, // 停用
}

impl<'de> Deserialize<'de> for AdminStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "active" => Ok(AdminStatus::Active),
            "inactive" => Ok(AdminStatus::Inactive),
            "suspended" => Ok(AdminStatus::Suspended),
            _ => Err(serde::de::Error::custom(format!(
                "无效的管理员状态: '{s}'. 支持的状态: active, inactive, suspended"
            ))),
        }
    }
}

impl std::fmt::Display for AdminStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminStatus::Active => write!(f, "active"),
            AdminStatus::Inactive => write!(f, "inactive"),
            AdminStatus::Suspended => write!(f, "suspended"),
        }
    }
}

impl std::str::FromStr for AdminStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(AdminStatus::Active),
            "inactive" => Ok(AdminStatus::Inactive),
            "suspended" => Ok(AdminStatus::Suspended),
            _ => Err(format!("Invalid admin status: {s}")),
        }
    }
}

// 管理员实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/admin.ts")]
pub struct Admin {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub role: AdminRole,
    pub status: AdminStatus,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub reset_code_hash: Option<String>,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub reset_code_expires: Option<i64>,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub reset_code_attempts: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Admin {
    // 生成 token 对（access + refresh）
    pub fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            &self.id.to_string(),
            &self.role.to_string(),
            refresh_token_expiry,
        )
        .map_err(|e| format!("生成 token 对失败: {e}"))
    }
}
