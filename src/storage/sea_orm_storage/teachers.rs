use super::SeaOrmStorage;
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::errors::{ELearnError, Result};
use crate::models::{
    PaginationInfo,
    teachers::{
        entities::{Teacher, TeacherStatus},
        requests::{CreateTeacherParams, TeacherListQuery, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建教师，入驻申请初始状态为 pending
    pub async fn create_teacher_impl(&self, params: CreateTeacherParams) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();

        let certificate_paths = if params.certificate_paths.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&params.certificate_paths)?)
        };

        let model = ActiveModel {
            email: Set(params.email),
            password_hash: Set(params.password_hash),
            full_name: Set(params.full_name),
            phone: Set(params.phone),
            specialization: Set(params.specialization),
            qualifications: Set(params.qualifications),
            linkedin_url: Set(params.linkedin_url),
            hourly_rate: Set(params.hourly_rate),
            status: Set(TeacherStatus::Pending.to_string()),
            cv_path: Set(params.cv_path),
            certificate_paths: Set(certificate_paths),
            profile_photo_path: Set(params.profile_photo_path),
            reset_code_attempts: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("创建教师失败: {e}")))?;

        Ok(result.into_teacher())
    }

    /// 通过 ID 获取教师
    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 通过邮箱获取教师
    pub async fn get_teacher_by_email_impl(&self, email: &str) -> Result<Option<Teacher>> {
        let result = Teachers::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 分页列出教师
    pub async fn list_teachers_with_pagination_impl(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Teachers::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::FullName.contains(&escaped))
                    .add(Column::Email.contains(&escaped))
                    .add(Column::Specialization.contains(&escaped)),
            );
        }

        // 状态筛选
        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询教师总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询教师页数失败: {e}")))?;

        let teachers = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(TeacherListResponse {
            items: teachers.into_iter().map(|m| m.into_teacher()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新教师信息（密码字段在服务层被拒绝，这里不处理）
    pub async fn update_teacher_impl(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        // 先检查教师是否存在
        let existing = self.get_teacher_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(email) = update.email {
            model.email = Set(email);
        }

        if let Some(full_name) = update.full_name {
            model.full_name = Set(full_name);
        }

        if let Some(phone) = update.phone {
            model.phone = Set(phone);
        }

        if let Some(specialization) = update.specialization {
            model.specialization = Set(specialization);
        }

        if let Some(qualifications) = update.qualifications {
            model.qualifications = Set(qualifications);
        }

        if let Some(linkedin_url) = update.linkedin_url {
            model.linkedin_url = Set(Some(linkedin_url));
        }

        if let Some(hourly_rate) = update.hourly_rate {
            model.hourly_rate = Set(Some(hourly_rate));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("更新教师失败: {e}")))?;

        self.get_teacher_by_id_impl(id).await
    }

    /// 更新教师密码，同时清除重置码
    pub async fn update_teacher_password_impl(&self, id: i64, password_hash: &str) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            password_hash: Set(password_hash.to_string()),
            reset_code_hash: Set(None),
            reset_code_expires: Set(None),
            reset_code_attempts: Set(0),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("更新教师密码失败: {e}")))?;

        Ok(true)
    }

    /// 更新教师入驻状态，驳回时写入原因，其余状态清除原因
    pub async fn update_teacher_status_impl(
        &self,
        id: i64,
        status: TeacherStatus,
        rejection_reason: Option<String>,
    ) -> Result<Option<Teacher>> {
        let existing = self.get_teacher_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let reason = if status == TeacherStatus::Rejected {
            rejection_reason
        } else {
            None
        };

        let model = ActiveModel {
            id: Set(id),
            status: Set(status.to_string()),
            rejection_reason: Set(reason),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("更新教师状态失败: {e}")))?;

        self.get_teacher_by_id_impl(id).await
    }

    /// 删除教师
    pub async fn delete_teacher_impl(&self, id: i64) -> Result<bool> {
        let result = Teachers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("删除教师失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量删除教师
    pub async fn delete_teachers_impl(&self, ids: &[i64]) -> Result<u64> {
        let result = Teachers::delete_many()
            .filter(Column::Id.is_in(ids.iter().copied()))
            .exec(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("批量删除教师失败: {e}")))?;

        Ok(result.rows_affected)
    }

    /// 更新教师最后登录时间
    pub async fn update_teacher_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Teachers::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("更新最后登录时间失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 写入密码重置码并重置尝试计数
    pub async fn set_teacher_reset_code_impl(
        &self,
        id: i64,
        code_hash: &str,
        expires: i64,
    ) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            reset_code_hash: Set(Some(code_hash.to_string())),
            reset_code_expires: Set(Some(expires)),
            reset_code_attempts: Set(0),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("写入重置码失败: {e}")))?;

        Ok(true)
    }

    /// 累加重置码校验失败次数
    pub async fn bump_teacher_reset_attempts_impl(&self, id: i64) -> Result<i32> {
        let existing = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询教师失败: {e}")))?
            .ok_or_else(|| ELearnError::not_found(format!("教师不存在: {id}")))?;

        let attempts = existing.reset_code_attempts + 1;
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            reset_code_attempts: Set(attempts),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("更新重置码计数失败: {e}")))?;

        Ok(attempts)
    }

    /// 清除密码重置码
    pub async fn clear_teacher_reset_code_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            reset_code_hash: Set(None),
            reset_code_expires: Set(None),
            reset_code_attempts: Set(0),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("清除重置码失败: {e}")))?;

        Ok(true)
    }
}
