use std::sync::Arc;

use crate::models::{
    admins::{
        entities::Admin,
        requests::CreateAdminParams,
    },
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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 管理员管理方法
    // 创建管理员（主管理员或子管理员）
    async fn create_admin(&self, params: CreateAdminParams) -> Result<Admin>;
    // 通过ID获取管理员
    async fn get_admin_by_id(&self, id: i64) -> Result<Option<Admin>>;
    // 通过邮箱获取管理员
    async fn get_admin_by_email(&self, email: &str) -> Result<Option<Admin>>;
    // 获取最早注册的管理员
    async fn first_admin(&self) -> Result<Option<Admin>>;
    // 统计管理员数量
    async fn count_admins(&self) -> Result<u64>;
    // 列出子管理员
    async fn list_subadmins(&self) -> Result<Vec<Admin>>;
    // 删除管理员
    async fn delete_admin(&self, id: i64) -> Result<bool>;
    // 写入密码重置码（哈希）并重置尝试计数
    async fn set_admin_reset_code(&self, id: i64, code_hash: &str, expires: i64) -> Result<bool>;
    // 累加重置码校验失败次数，返回新计数
    async fn bump_admin_reset_attempts(&self, id: i64) -> Result<i32>;
    // 清除密码重置码
    async fn clear_admin_reset_code(&self, id: i64) -> Result<bool>;
    // 更新管理员密码并清除重置码
    async fn update_admin_password(&self, id: i64, password_hash: &str) -> Result<bool>;

    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, params: CreateStudentParams) -> Result<Student>;
    // 通过ID获取学生
    async fn get_student_by_id(&self, id: &str) -> Result<Option<Student>>;
    // 通过邮箱获取学生
    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>>;
    // 分页列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 更新学生信息
    async fn update_student(
        &self,
        id: &str,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 更新学生密码，记录修改时间并清除重置码
    async fn update_student_password(&self, id: &str, password_hash: &str) -> Result<bool>;
    // 更新学生状态
    async fn update_student_status(
        &self,
        id: &str,
        status: StudentStatus,
    ) -> Result<Option<Student>>;
    // 删除学生
    async fn delete_student(&self, id: &str) -> Result<bool>;
    // 批量删除学生，返回删除数量
    async fn delete_students(&self, ids: &[String]) -> Result<u64>;
    // 更新学生最后登录时间
    async fn update_student_last_login(&self, id: &str) -> Result<bool>;
    // 写入注册验证 OTP（哈希）
    async fn set_student_otp(&self, id: &str, code_hash: &str, expires: i64) -> Result<bool>;
    // 激活学生账户并清除注册 OTP
    async fn activate_student(&self, id: &str) -> Result<Option<Student>>;
    // 写入密码重置码（哈希）并重置尝试计数
    async fn set_student_reset_code(
        &self,
        id: &str,
        code_hash: &str,
        expires: i64,
    ) -> Result<bool>;
    // 累加重置码校验失败次数，返回新计数
    async fn bump_student_reset_attempts(&self, id: &str) -> Result<i32>;
    // 清除密码重置码
    async fn clear_student_reset_code(&self, id: &str) -> Result<bool>;

    /// 教师管理方法
    // 创建教师（入驻申请）
    async fn create_teacher(&self, params: CreateTeacherParams) -> Result<Teacher>;
    // 通过ID获取教师
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    // 通过邮箱获取教师
    async fn get_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>>;
    // 分页列出教师
    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse>;
    // 更新教师信息
    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>>;
    // 更新教师密码并清除重置码
    async fn update_teacher_password(&self, id: i64, password_hash: &str) -> Result<bool>;
    // 更新教师入驻状态，驳回时写入原因，其余状态清除原因
    async fn update_teacher_status(
        &self,
        id: i64,
        status: TeacherStatus,
        rejection_reason: Option<String>,
    ) -> Result<Option<Teacher>>;
    // 删除教师
    async fn delete_teacher(&self, id: i64) -> Result<bool>;
    // 批量删除教师，返回删除数量
    async fn delete_teachers(&self, ids: &[i64]) -> Result<u64>;
    // 更新教师最后登录时间
    async fn update_teacher_last_login(&self, id: i64) -> Result<bool>;
    // 写入密码重置码（哈希）并重置尝试计数
    async fn set_teacher_reset_code(&self, id: i64, code_hash: &str, expires: i64) -> Result<bool>;
    // 累加重置码校验失败次数，返回新计数
    async fn bump_teacher_reset_attempts(&self, id: i64) -> Result<i32>;
    // 清除密码重置码
    async fn clear_teacher_reset_code(&self, id: i64) -> Result<bool>;

    /// 选择题管理方法
    // 创建选择题
    async fn create_mcq(&self, req: CreateMcqRequest, created_by: i64) -> Result<Mcq>;
    // 通过ID获取选择题
    async fn get_mcq_by_id(&self, id: i64) -> Result<Option<Mcq>>;
    // 分页列出选择题，新题在前
    async fn list_mcqs_with_pagination(&self, query: McqListQuery) -> Result<McqListResponse>;
    // 更新选择题，仅创建者可操作
    async fn update_mcq(
        &self,
        id: i64,
        created_by: i64,
        update: UpdateMcqRequest,
    ) -> Result<Option<Mcq>>;
    // 删除选择题，仅创建者可操作
    async fn delete_mcq(&self, id: i64, created_by: i64) -> Result<bool>;

    /// 题目管理方法
    // 创建题目
    async fn create_question(&self, req: CreateQuestionRequest, author: i64) -> Result<Question>;
    // 通过ID获取题目
    async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>>;
    // 浏览计数自增
    async fn increment_question_views(&self, id: i64) -> Result<bool>;
    // 分页列出题目，新题在前
    async fn list_questions_with_pagination(
        &self,
        query: QuestionListQuery,
    ) -> Result<QuestionListResponse>;
    // 更新题目，仅作者可操作
    async fn update_question(
        &self,
        id: i64,
        author: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>>;
    // 删除题目
    async fn delete_question(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
