use super::SeaOrmStorage;
use crate::entity::mcqs::{ActiveModel, Column, Entity as Mcqs};
use crate::errors::{ELearnError, Result};
use crate::models::{
    PaginationInfo,
    mcqs::{
        entities::Mcq,
        requests::{CreateMcqRequest, McqListQuery, UpdateMcqRequest},
        responses::McqListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建选择题，created_by 来自已认证的教师
    pub async fn create_mcq_impl(&self, req: CreateMcqRequest, created_by: i64) -> Result<Mcq> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            question: Set(req.question),
            options: Set(serde_json::to_string(&req.options)?),
            correct_answer: Set(req.correct_answer),
            category: Set(req.category.map(|c| c.to_string())),
            difficulty: Set(req.difficulty.to_string()),
            explanation: Set(req.explanation),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("创建选择题失败: {e}")))?;

        Ok(result.into_mcq())
    }

    /// 通过 ID 获取选择题
    pub async fn get_mcq_by_id_impl(&self, id: i64) -> Result<Option<Mcq>> {
        let result = Mcqs::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询选择题失败: {e}")))?;

        Ok(result.map(|m| m.into_mcq()))
    }

    /// 分页列出选择题，新题在前
    pub async fn list_mcqs_with_pagination_impl(
        &self,
        query: McqListQuery,
    ) -> Result<McqListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Mcqs::find();

        // 分类筛选
        if let Some(ref category) = query.category {
            select = select.filter(Column::Category.eq(category.to_string()));
        }

        // 难度筛选
        if let Some(ref difficulty) = query.difficulty {
            select = select.filter(Column::Difficulty.eq(difficulty.to_string()));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询选择题总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询选择题页数失败: {e}")))?;

        let mcqs = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询选择题列表失败: {e}")))?;

        Ok(McqListResponse {
            items: mcqs.into_iter().map(|m| m.into_mcq()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新选择题，仅创建者可操作
    pub async fn update_mcq_impl(
        &self,
        id: i64,
        created_by: i64,
        update: UpdateMcqRequest,
    ) -> Result<Option<Mcq>> {
        // 先确认题目存在且属于该教师
        let existing = Mcqs::find_by_id(id)
            .filter(Column::CreatedBy.eq(created_by))
            .one(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询选择题失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(question) = update.question {
            model.question = Set(question);
        }

        if let Some(options) = update.options {
            model.options = Set(serde_json::to_string(&options)?);
        }

        if let Some(correct_answer) = update.correct_answer {
            model.correct_answer = Set(correct_answer);
        }

        if let Some(category) = update.category {
            model.category = Set(Some(category.to_string()));
        }

        if let Some(difficulty) = update.difficulty {
            model.difficulty = Set(difficulty.to_string());
        }

        if let Some(explanation) = update.explanation {
            model.explanation = Set(Some(explanation));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("更新选择题失败: {e}")))?;

        self.get_mcq_by_id_impl(id).await
    }

    /// 删除选择题，仅创建者可操作
    pub async fn delete_mcq_impl(&self, id: i64, created_by: i64) -> Result<bool> {
        let result = Mcqs::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::CreatedBy.eq(created_by))
            .exec(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("删除选择题失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
