use super::SeaOrmStorage;
use crate::entity::questions::{ActiveModel, Column, Entity as Questions};
use crate::errors::{ELearnError, Result};
use crate::models::{
    PaginationInfo,
    questions::{
        entities::Question,
        requests::{CreateQuestionRequest, QuestionListQuery, UpdateQuestionRequest},
        responses::QuestionListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建题目，author 来自已认证的教师
    pub async fn create_question_impl(
        &self,
        req: CreateQuestionRequest,
        author: i64,
    ) -> Result<Question> {
        let now = chrono::Utc::now().timestamp();

        let tags = if req.tags.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&req.tags)?)
        };

        let model = ActiveModel {
            title: Set(req.title),
            content: Set(req.content),
            question_type: Set(req.question_type),
            number: Set(req.number),
            tags: Set(tags),
            author: Set(author),
            views: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("创建题目失败: {e}")))?;

        Ok(result.into_question())
    }

    /// 通过 ID 获取题目
    pub async fn get_question_by_id_impl(&self, id: i64) -> Result<Option<Question>> {
        let result = Questions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询题目失败: {e}")))?;

        Ok(result.map(|m| m.into_question()))
    }

    /// 浏览计数自增
    pub async fn increment_question_views_impl(&self, id: i64) -> Result<bool> {
        use sea_orm::ExprTrait;
        let result = Questions::update_many()
            .col_expr(
                Column::Views,
                sea_orm::sea_query::Expr::col(Column::Views).add(1),
            )
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("更新浏览计数失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 分页列出题目，新题在前
    pub async fn list_questions_with_pagination_impl(
        &self,
        query: QuestionListQuery,
    ) -> Result<QuestionListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Questions::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::Content.contains(&escaped)),
            );
        }

        // 类型筛选
        if let Some(ref question_type) = query.question_type {
            select = select.filter(Column::QuestionType.eq(question_type.clone()));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询题目总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询题目页数失败: {e}")))?;

        let questions = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询题目列表失败: {e}")))?;

        Ok(QuestionListResponse {
            items: questions.into_iter().map(|m| m.into_question()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新题目，仅作者可操作
    pub async fn update_question_impl(
        &self,
        id: i64,
        author: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        // 先确认题目存在且属于该教师
        let existing = Questions::find_by_id(id)
            .filter(Column::Author.eq(author))
            .one(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询题目失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(content) = update.content {
            model.content = Set(content);
        }

        if let Some(question_type) = update.question_type {
            model.question_type = Set(question_type);
        }

        if let Some(number) = update.number {
            model.number = Set(number);
        }

        if let Some(tags) = update.tags {
            model.tags = Set(Some(serde_json::to_string(&tags)?));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("更新题目失败: {e}")))?;

        self.get_question_by_id_impl(id).await
    }

    /// 删除题目
    pub async fn delete_question_impl(&self, id: i64) -> Result<bool> {
        let result = Questions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("删除题目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
