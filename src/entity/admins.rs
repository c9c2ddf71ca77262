//! 管理员实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "admins")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub status: String,
    pub reset_code_hash: Option<String>,
    pub reset_code_expires: Option<i64>,
    pub reset_code_attempts: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_admin(self) -> crate::models::admins::entities::Admin {
        use crate::models::admins::entities::{Admin, AdminRole, AdminStatus};
        use chrono::{DateTime, Utc};

        Admin {
            id: self.id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role.parse::<AdminRole>().unwrap_or(AdminRole::SubAdmin),
            status: self
                .status
                .parse::<AdminStatus>()
                .unwrap_or(AdminStatus::Inactive),
            reset_code_hash: self.reset_code_hash,
            reset_code_expires: self.reset_code_expires,
            reset_code_attempts: self.reset_code_attempts,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
