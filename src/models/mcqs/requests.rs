use super::entities::{McqCategory, McqDifficulty};
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 选择题创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mcq.ts")]
pub struct CreateMcqRequest {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: i32,
    pub category: Option<McqCategory>,
    pub difficulty: McqDifficulty,
    pub explanation: Option<String>,
}

// 选择题更新请求，仅允许白名单字段
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mcq.ts")]
pub struct UpdateMcqRequest {
    pub question: Option<String>,
    pub options: Option<Vec<String>>,
    pub correct_answer: Option<i32>,
    pub category: Option<McqCategory>,
    pub difficulty: Option<McqDifficulty>,
    pub explanation: Option<String>,
}

// 选择题查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mcq.ts")]
pub struct McqListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub category: Option<McqCategory>,
    pub difficulty: Option<McqDifficulty>,
}

// 选择题列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct McqListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub category: Option<McqCategory>,
    pub difficulty: Option<McqDifficulty>,
}
