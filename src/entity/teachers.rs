//! 教师实体
//!
//! certificate_paths 以 JSON 数组文本存储。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub phone: String,
    pub specialization: String,
    pub qualifications: String,
    pub linkedin_url: Option<String>,
    pub hourly_rate: Option<f64>,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub cv_path: Option<String>,
    pub certificate_paths: Option<String>,
    pub profile_photo_path: Option<String>,
    pub reset_code_hash: Option<String>,
    pub reset_code_expires: Option<i64>,
    pub reset_code_attempts: i32,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mcqs::Entity")]
    Mcqs,
    #[sea_orm(has_many = "super::questions::Entity")]
    Questions,
}

impl Related<super::mcqs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mcqs.def()
    }
}

impl Related<super::questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Questions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_teacher(self) -> crate::models::teachers::entities::Teacher {
        use crate::models::teachers::entities::{Teacher, TeacherStatus};
        use chrono::{DateTime, Utc};

        Teacher {
            id: self.id,
            email: self.email,
            password_hash: self.password_hash,
            full_name: self.full_name,
            phone: self.phone,
            specialization: self.specialization,
            qualifications: self.qualifications,
            linkedin_url: self.linkedin_url,
            hourly_rate: self.hourly_rate,
            status: self
                .status
                .parse::<TeacherStatus>()
                .unwrap_or(TeacherStatus::Pending),
            rejection_reason: self.rejection_reason,
            cv_path: self.cv_path,
            certificate_paths: self
                .certificate_paths
                .and_then(|raw| serde_json::from_str(&raw).ok())
                .unwrap_or_default(),
            profile_photo_path: self.profile_photo_path,
            reset_code_hash: self.reset_code_hash,
            reset_code_expires: self.reset_code_expires,
            reset_code_attempts: self.reset_code_attempts,
            last_login: self
                .last_login
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
