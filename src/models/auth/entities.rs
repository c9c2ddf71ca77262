use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::admins::entities::{Admin, AdminRole, AdminStatus};
use crate::models::students::entities::{Student, StudentStatus};
use crate::models::teachers::entities::{Teacher, TeacherStatus};

// 认证角色，覆盖三类账户表
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub enum AuthRole {
    Admin,    // 主管理员
    SubAdmin, // 子管理员
    Teacher,  // 教师
    Student,  // 学生
}

impl AuthRole {
    pub const ADMIN: &'static str = "admin";
    pub const SUBADMIN: &'static str = "subadmin";
    pub const TEACHER: &'static str = "teacher";
    pub const STUDENT: &'static str = "student";

    /// 仅主管理员（子管理员管理、首个管理员注册）
    pub fn root_roles() -> &'static [&'static AuthRole] {
        &[&Self::Admin]
    }
    /// 管理端资源路由
    pub fn admin_roles() -> &'static [&'static AuthRole] {
        &[&Self::Admin, &Self::SubAdmin]
    }
    /// 教师资源路由
    pub fn teacher_roles() -> &'static [&'static AuthRole] {
        &[&Self::Teacher]
    }
    pub fn student_roles() -> &'static [&'static AuthRole] {
        &[&Self::Student]
    }
}

impl<'de> Deserialize<'de> for AuthRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<AuthRole>().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for AuthRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthRole::Admin => write!(f, "{}", AuthRole::ADMIN),
            AuthRole::SubAdmin => write!(f, "{}", AuthRole::SUBADMIN),
            AuthRole::Teacher => write!(f, "{}", AuthRole::TEACHER),
            AuthRole::Student => write!(f, "{}", AuthRole::STUDENT),
        }
    }
}

impl std::str::FromStr for AuthRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(AuthRole::Admin),
            "subadmin" => Ok(AuthRole::SubAdmin),
            "teacher" => Ok(AuthRole::Teacher),
            "student" => Ok(AuthRole::Student),
            _ => Err(format!(
                "无效的认证角色: '{s}'. 支持的角色: admin, subadmin, teacher, student"
            )),
        }
    }
}

/// 已认证主体，由 JWT 中间件写入请求扩展
///
/// 三类账户分别存放在不同的表里，按 token 中的角色加载。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Principal {
    Admin(Admin),
    Teacher(Teacher),
    Student(Student),
}

impl Principal {
    /// 主体在 JWT sub 中使用的标识
    pub fn subject_id(&self) -> String {
        match self {
            Principal::Admin(admin) => admin.id.to_string(),
            Principal::Teacher(teacher) => teacher.id.to_string(),
            Principal::Student(student) => student.id.clone(),
        }
    }

    pub fn role(&self) -> AuthRole {
        match self {
            Principal::Admin(admin) => match admin.role {
                AdminRole::Admin => AuthRole::Admin,
                AdminRole::SubAdmin => AuthRole::SubAdmin,
            },
            Principal::Teacher(_) => AuthRole::Teacher,
            Principal::Student(_) => AuthRole::Student,
        }
    }

    /// 账户当前是否允许访问受保护资源
    pub fn is_usable(&self) -> bool {
        match self {
            Principal::Admin(admin) => admin.status == AdminStatus::Active,
            Principal::Teacher(teacher) => teacher.status == TeacherStatus::Approved,
            Principal::Student(student) => student.status == StudentStatus::Active,
        }
    }

    pub fn as_admin(&self) -> Option<&Admin> {
        match self {
            Principal::Admin(admin) => Some(admin),
            _ => None,
        }
    }

    pub fn as_teacher(&self) -> Option<&Teacher> {
        match self {
            Principal::Teacher(teacher) => Some(teacher),
            _ => None,
        }
    }

    pub fn as_student(&self) -> Option<&Student> {
        match self {
            Principal::Student(student) => Some(student),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_auth_role_round_trip() {
        for raw in ["admin", "subadmin", "teacher", "student"] {
            let role = AuthRole::from_str(raw).unwrap();
            assert_eq!(role.to_string(), raw);
        }
    }

    #[test]
    fn test_auth_role_rejects_unknown() {
        assert!(AuthRole::from_str("superuser").is_err());
        assert!(AuthRole::from_str("").is_err());
    }

    #[test]
    fn test_admin_roles_include_subadmin() {
        assert!(AuthRole::admin_roles().contains(&&AuthRole::SubAdmin));
        assert!(!AuthRole::root_roles().contains(&&AuthRole::SubAdmin));
    }
}
