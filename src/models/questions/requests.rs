use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 题目创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct CreateQuestionRequest {
    pub title: String,
    pub content: String,
    pub question_type: String,
    pub number: i32,
    #[serde(default)]
    pub tags: Vec<String>,
}

// 题目更新请求，仅允许白名单字段
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct UpdateQuestionRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub question_type: Option<String>,
    pub number: Option<i32>,
    pub tags: Option<Vec<String>>,
}

// 题目查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct QuestionListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub question_type: Option<String>,
    pub search: Option<String>,
}

// 题目列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct QuestionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub question_type: Option<String>,
    pub search: Option<String>,
}
