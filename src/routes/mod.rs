pub mod admin;

pub mod auth;

pub mod frontend;

pub mod mcqs;

pub mod questions;

pub mod student_auth;

pub mod teacher_auth;

pub use admin::configure_admin_routes;
pub use auth::configure_auth_routes;
pub use frontend::configure_frontend_routes;
pub use student_auth::configure_student_routes;
pub use teacher_auth::configure_teacher_routes;
