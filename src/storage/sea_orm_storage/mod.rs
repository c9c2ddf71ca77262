//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod admins;
mod mcqs;
mod questions;
mod students;
mod teachers;

use crate::config::AppConfig;
use crate::errors::{ELearnError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ELearnError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ELearnError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| ELearnError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ELearnError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ELearnError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    admins::{entities::Admin, requests::CreateAdminParams},
    mcqs::{
        entities::Mcq,
        requests::{CreateMcqRequest, McqListQuery, UpdateMcqRequest},
        responses::McqListResponse,
    },
    questions::{
        entities::Question,
        requests::{CreateQuestionRequest, QuestionListQuery, UpdateQuestionRequest},
        responses::QuestionListResponse,
    },
    students::{
        entities::{Student, StudentStatus},
        requests::{CreateStudentParams, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    teachers::{
        entities::{Teacher, TeacherStatus},
        requests::{CreateTeacherParams, TeacherListQuery, UpdateTeacherRequest},
        responses::TeacherListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 管理员模块
    async fn create_admin(&self, params: CreateAdminParams) -> Result<Admin> {
        self.create_admin_impl(params).await
    }

    async fn get_admin_by_id(&self, id: i64) -> Result<Option<Admin>> {
        self.get_admin_by_id_impl(id).await
    }

    async fn get_admin_by_email(&self, email: &str) -> Result<Option<Admin>> {
        self.get_admin_by_email_impl(email).await
    }

    async fn first_admin(&self) -> Result<Option<Admin>> {
        self.first_admin_impl().await
    }

    async fn count_admins(&self) -> Result<u64> {
        self.count_admins_impl().await
    }

    async fn list_subadmins(&self) -> Result<Vec<Admin>> {
        self.list_subadmins_impl().await
    }

    async fn delete_admin(&self, id: i64) -> Result<bool> {
        self.delete_admin_impl(id).await
    }

    async fn set_admin_reset_code(&self, id: i64, code_hash: &str, expires: i64) -> Result<bool> {
        self.set_admin_reset_code_impl(id, code_hash, expires).await
    }

    async fn bump_admin_reset_attempts(&self, id: i64) -> Result<i32> {
        self.bump_admin_reset_attempts_impl(id).await
    }

    async fn clear_admin_reset_code(&self, id: i64) -> Result<bool> {
        self.clear_admin_reset_code_impl(id).await
    }

    async fn update_admin_password(&self, id: i64, password_hash: &str) -> Result<bool> {
        self.update_admin_password_impl(id, password_hash).await
    }

    // 学生模块
    async fn create_student(&self, params: CreateStudentParams) -> Result<Student> {
        self.create_student_impl(params).await
    }

    async fn get_student_by_id(&self, id: &str) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>> {
        self.get_student_by_email_impl(email).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        id: &str,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn update_student_password(&self, id: &str, password_hash: &str) -> Result<bool> {
        self.update_student_password_impl(id, password_hash).await
    }

    async fn update_student_status(
        &self,
        id: &str,
        status: StudentStatus,
    ) -> Result<Option<Student>> {
        self.update_student_status_impl(id, status).await
    }

    async fn delete_student(&self, id: &str) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    async fn delete_students(&self, ids: &[String]) -> Result<u64> {
        self.delete_students_impl(ids).await
    }

    async fn update_student_last_login(&self, id: &str) -> Result<bool> {
        self.update_student_last_login_impl(id).await
    }

    async fn set_student_otp(&self, id: &str, code_hash: &str, expires: i64) -> Result<bool> {
        self.set_student_otp_impl(id, code_hash, expires).await
    }

    async fn activate_student(&self, id: &str) -> Result<Option<Student>> {
        self.activate_student_impl(id).await
    }

    async fn set_student_reset_code(
        &self,
        id: &str,
        code_hash: &str,
        expires: i64,
    ) -> Result<bool> {
        self.set_student_reset_code_impl(id, code_hash, expires)
            .await
    }

    async fn bump_student_reset_attempts(&self, id: &str) -> Result<i32> {
        self.bump_student_reset_attempts_impl(id).await
    }

    async fn clear_student_reset_code(&self, id: &str) -> Result<bool> {
        self.clear_student_reset_code_impl(id).await
    }

    // 教师模块
    async fn create_teacher(&self, params: CreateTeacherParams) -> Result<Teacher> {
        self.create_teacher_impl(params).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn get_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>> {
        self.get_teacher_by_email_impl(email).await
    }

    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        self.list_teachers_with_pagination_impl(query).await
    }

    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, update).await
    }

    async fn update_teacher_password(&self, id: i64, password_hash: &str) -> Result<bool> {
        self.update_teacher_password_impl(id, password_hash).await
    }

    async fn update_teacher_status(
        &self,
        id: i64,
        status: TeacherStatus,
        rejection_reason: Option<String>,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_status_impl(id, status, rejection_reason)
            .await
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    async fn delete_teachers(&self, ids: &[i64]) -> Result<u64> {
        self.delete_teachers_impl(ids).await
    }

    async fn update_teacher_last_login(&self, id: i64) -> Result<bool> {
        self.update_teacher_last_login_impl(id).await
    }

    async fn set_teacher_reset_code(&self, id: i64, code_hash: &str, expires: i64) -> Result<bool> {
        self.set_teacher_reset_code_impl(id, code_hash, expires)
            .await
    }

    async fn bump_teacher_reset_attempts(&self, id: i64) -> Result<i32> {
        self.bump_teacher_reset_attempts_impl(id).await
    }

    async fn clear_teacher_reset_code(&self, id: i64) -> Result<bool> {
        self.clear_teacher_reset_code_impl(id).await
    }

    // 选择题模块
    async fn create_mcq(&self, req: CreateMcqRequest, created_by: i64) -> Result<Mcq> {
        self.create_mcq_impl(req, created_by).await
    }

    async fn get_mcq_by_id(&self, id: i64) -> Result<Option<Mcq>> {
        self.get_mcq_by_id_impl(id).await
    }

    async fn list_mcqs_with_pagination(&self, query: McqListQuery) -> Result<McqListResponse> {
        self.list_mcqs_with_pagination_impl(query).await
    }

    async fn update_mcq(
        &self,
        id: i64,
        created_by: i64,
        update: UpdateMcqRequest,
    ) -> Result<Option<Mcq>> {
        self.update_mcq_impl(id, created_by, update).await
    }

    async fn delete_mcq(&self, id: i64, created_by: i64) -> Result<bool> {
        self.delete_mcq_impl(id, created_by).await
    }

    // 题目模块
    async fn create_question(&self, req: CreateQuestionRequest, author: i64) -> Result<Question> {
        self.create_question_impl(req, author).await
    }

    async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>> {
        self.get_question_by_id_impl(id).await
    }

    async fn increment_question_views(&self, id: i64) -> Result<bool> {
        self.increment_question_views_impl(id).await
    }

    async fn list_questions_with_pagination(
        &self,
        query: QuestionListQuery,
    ) -> Result<QuestionListResponse> {
        self.list_questions_with_pagination_impl(query).await
    }

    async fn update_question(
        &self,
        id: i64,
        author: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        self.update_question_impl(id, author, update).await
    }

    async fn delete_question(&self, id: i64) -> Result<bool> {
        self.delete_question_impl(id).await
    }
}
