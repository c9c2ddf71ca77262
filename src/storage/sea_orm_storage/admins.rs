use super::SeaOrmStorage;
use crate::entity::admins::{ActiveModel, Column, Entity as Admins};
use crate::errors::{ELearnError, Result};
use crate::models::admins::{
    entities::{Admin, AdminRole},
    requests::CreateAdminParams,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建管理员
    pub async fn create_admin_impl(&self, params: CreateAdminParams) -> Result<Admin> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            username: Set(params.username),
            email: Set(params.email),
            password_hash: Set(params.password_hash),
            role: Set(params.role.to_string()),
            status: Set(params.status.to_string()),
            reset_code_attempts: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("创建管理员失败: {e}")))?;

        Ok(result.into_admin())
    }

    /// 通过 ID 获取管理员
    pub async fn get_admin_by_id_impl(&self, id: i64) -> Result<Option<Admin>> {
        let result = Admins::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询管理员失败: {e}")))?;

        Ok(result.map(|m| m.into_admin()))
    }

    /// 通过邮箱获取管理员
    pub async fn get_admin_by_email_impl(&self, email: &str) -> Result<Option<Admin>> {
        let result = Admins::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询管理员失败: {e}")))?;

        Ok(result.map(|m| m.into_admin()))
    }

    /// 获取最早注册的管理员
    pub async fn first_admin_impl(&self) -> Result<Option<Admin>> {
        let result = Admins::find()
            .order_by_asc(Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询管理员失败: {e}")))?;

        Ok(result.map(|m| m.into_admin()))
    }

    /// 统计管理员数量
    pub async fn count_admins_impl(&self) -> Result<u64> {
        let count = Admins::find()
            .count(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("统计管理员数量失败: {e}")))?;

        Ok(count)
    }

    /// 列出全部子管理员，新账号在前
    pub async fn list_subadmins_impl(&self) -> Result<Vec<Admin>> {
        let result = Admins::find()
            .filter(Column::Role.eq(AdminRole::SubAdmin.to_string()))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询子管理员列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_admin()).collect())
    }

    /// 删除管理员
    pub async fn delete_admin_impl(&self, id: i64) -> Result<bool> {
        let result = Admins::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("删除管理员失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 写入密码重置码并重置尝试计数
    pub async fn set_admin_reset_code_impl(
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
    pub async fn bump_admin_reset_attempts_impl(&self, id: i64) -> Result<i32> {
        let existing = Admins::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ELearnError::database_operation(format!("查询管理员失败: {e}")))?
            .ok_or_else(|| ELearnError::not_found(format!("管理员不存在: {id}")))?;

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
    pub async fn clear_admin_reset_code_impl(&self, id: i64) -> Result<bool> {
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

    /// 更新管理员密码，同时清除重置码
    pub async fn update_admin_password_impl(&self, id: i64, password_hash: &str) -> Result<bool> {
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
            .map_err(|e| ELearnError::database_operation(format!("更新管理员密码失败: {e}")))?;

        Ok(true)
    }
}
