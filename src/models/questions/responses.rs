use super::entities::Question;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 题目响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct QuestionResponse {
    pub question: Question,
}

// 题目列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct QuestionListResponse {
    pub items: Vec<Question>,
    pub pagination: PaginationInfo,
}
