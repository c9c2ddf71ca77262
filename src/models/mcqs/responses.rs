use super::entities::Mcq;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 选择题响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mcq.ts")]
pub struct McqResponse {
    pub mcq: Mcq,
}

// 选择题列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mcq.ts")]
pub struct McqListResponse {
    pub items: Vec<Mcq>,
    pub pagination: PaginationInfo,
}
