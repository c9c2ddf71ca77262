//! SeaORM 数据库实体

pub mod admins;
pub mod mcqs;
pub mod prelude;
pub mod questions;
pub mod students;
pub mod teachers;
