//! 学生实体
//!
//! 学生主键是注册时生成的 UUID 字符串，而不是自增整数。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub phone: String,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub profile_photo: Option<String>,
    pub status: String,
    pub otp_hash: Option<String>,
    pub otp_expires: Option<i64>,
    pub reset_code_hash: Option<String>,
    pub reset_code_expires: Option<i64>,
    pub reset_code_attempts: i32,
    pub password_changed_at: Option<i64>,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::students::entities::{Student, StudentStatus};
        use chrono::{DateTime, NaiveDate, Utc};

        Student {
            id: self.id,
            email: self.email,
            password_hash: self.password_hash,
            full_name: self.full_name,
            phone: self.phone,
            date_of_birth: self
                .date_of_birth
                .and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok()),
            address: self.address,
            profile_photo: self.profile_photo,
            status: self
                .status
                .parse::<StudentStatus>()
                .unwrap_or(StudentStatus::Inactive),
            otp_hash: self.otp_hash,
            otp_expires: self.otp_expires,
            reset_code_hash: self.reset_code_hash,
            reset_code_expires: self.reset_code_expires,
            reset_code_attempts: self.reset_code_attempts,
            password_changed_at: self
                .password_changed_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            last_login: self
                .last_login
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
