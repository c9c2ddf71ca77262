use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{ELearnError, Result};
use crate::models::{
    PaginationInfo,
    students::{
        entities::{Student, StudentStatus},
        requests::{CreateStudentParams, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建学生，主键为新生成的 UUID
    pub async fn create_student_impl(&self, params: CreateStudentParams) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            email: Set(params.email),
            password_hash: Set(params.password_hash),
            full_name: Set(params.full_name),
            phone: Set(params.phone),
            date_of_birth: Set(params.date_of_birth.map(|d| d.to_string())),
            address: Set(params.address),
            status: Set(params.status.to_string()),
            otp_hash: Set(params.otp_hash),
            otp_expires: Set(params.otp_expires),
            reset_code_attempts: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: &str) -> Result<Option<Student>> {
        let result = Students::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过邮箱获取学生
    pub async fn get_student_by_email_impl(&self, email: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Students::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::FullName.contains(&escaped))
                    .add(Column::Email.contains(&escaped))
                    .add(Column::Phone.contains(&escaped)),
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
            .map_err(|e| ELearnError::database_operation(format!("查询学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询学生页数失败: {e}")))?;

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(StudentListResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学生信息（密码字段在服务层被拒绝，这里不处理）
    pub async fn update_student_impl(
        &self,
        id: &str,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        // 先检查学生是否存在
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id.to_string()),
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

        if let Some(date_of_birth) = update.date_of_birth {
            model.date_of_birth = Set(Some(date_of_birth.to_string()));
        }

        if let Some(address) = update.address {
            model.address = Set(Some(address));
        }

        if let Some(profile_photo) = update.profile_photo {
            model.profile_photo = Set(Some(profile_photo));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("更新学生失败: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    /// 更新学生密码，记录修改时间并清除重置码
    pub async fn update_student_password_impl(
        &self,
        id: &str,
        password_hash: &str,
    ) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id.to_string()),
            password_hash: Set(password_hash.to_string()),
            password_changed_at: Set(Some(now)),
            reset_code_hash: Set(None),
            reset_code_expires: Set(None),
            reset_code_attempts: Set(0),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("更新学生密码失败: {e}")))?;

        Ok(true)
    }

    /// 更新学生状态
    pub async fn update_student_status_impl(
        &self,
        id: &str,
        status: StudentStatus,
    ) -> Result<Option<Student>> {
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id.to_string()),
            status: Set(status.to_string()),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("更新学生状态失败: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, id: &str) -> Result<bool> {
        let result = Students::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量删除学生
    pub async fn delete_students_impl(&self, ids: &[String]) -> Result<u64> {
        let result = Students::delete_many()
            .filter(Column::Id.is_in(ids.iter().cloned()))
            .exec(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("批量删除学生失败: {e}")))?;

        Ok(result.rows_affected)
    }

    /// 更新学生最后登录时间
    pub async fn update_student_last_login_impl(&self, id: &str) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Students::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("更新最后登录时间失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 写入注册验证 OTP
    pub async fn set_student_otp_impl(
        &self,
        id: &str,
        code_hash: &str,
        expires: i64,
    ) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id.to_string()),
            otp_hash: Set(Some(code_hash.to_string())),
            otp_expires: Set(Some(expires)),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("写入注册 OTP 失败: {e}")))?;

        Ok(true)
    }

    /// 激活学生账户并清除注册 OTP
    pub async fn activate_student_impl(&self, id: &str) -> Result<Option<Student>> {
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id.to_string()),
            status: Set(StudentStatus::Active.to_string()),
            otp_hash: Set(None),
            otp_expires: Set(None),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("激活学生失败: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    /// 写入密码重置码并重置尝试计数
    pub async fn set_student_reset_code_impl(
        &self,
        id: &str,
        code_hash: &str,
        expires: i64,
    ) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id.to_string()),
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
    pub async fn bump_student_reset_attempts_impl(&self, id: &str) -> Result<i32> {
        let existing = Students::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询学生失败: {e}")))?
            .ok_or_else(|| ELearnError::not_found(format!("学生不存在: {id}")))?;

        let attempts = existing.reset_code_attempts + 1;
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id.to_string()),
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
    pub async fn clear_student_reset_code_impl(&self, id: &str) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id.to_string()),
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
