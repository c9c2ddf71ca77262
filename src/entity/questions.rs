//! 题目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub content: String,
    pub question_type: String,
    pub number: i32,
    pub tags: Option<String>,
    pub author: i64,
    pub views: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::Author",
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
    pub fn into_question(self) -> crate::models::questions::entities::Question {
        use crate::models::questions::entities::Question;
        use chrono::{DateTime, Utc};

        Question {
            id: self.id,
            title: self.title,
            content: self.content,
            question_type: self.question_type,
            number: self.number,
            tags: self
                .tags
                .and_then(|raw| serde_json::from_str(&raw).ok())
                .unwrap_or_default(),
            author: self.author,
            views: self.views,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
