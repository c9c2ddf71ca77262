use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 题目实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct Question {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub question_type: String,
    pub number: i32,
    pub tags: Vec<String>,
    /// 出题教师 ID
    pub author: i64,
    /// 浏览次数，详情查询时自增
    pub views: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
