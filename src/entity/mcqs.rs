//! 选择题实体
//!
//! options 以 JSON 数组文本存储，答案是选项下标。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "mcqs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub question: String,
    pub options: String,
    pub correct_answer: i32,
    pub category: Option<String>,
    pub difficulty: String,
    pub explanation: Option<String>,
    pub created_by: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::CreatedBy",
        to = "super::teachers::Column::Id"
    )]
    Teachers,
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teachers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_mcq(self) -> crate::models::mcqs::entities::Mcq {
        use crate::models::mcqs::entities::{Mcq, McqCategory, McqDifficulty};
        use chrono::{DateTime, Utc};

        Mcq {
            id: self.id,
            question: self.question,
            options: serde_json::from_str(&self.options).unwrap_or_default(),
            correct_answer: self.correct_answer,
            category: self
                .category
                .and_then(|c| c.parse::<McqCategory>().ok()),
            difficulty: self
                .difficulty
                .parse::<McqDifficulty>()
                .unwrap_or(McqDifficulty::Medium),
            explanation: self.explanation,
            created_by: self.created_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
