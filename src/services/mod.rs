pub mod auth;
pub mod mailer;
pub mod mcqs;
pub mod questions;
pub mod student_auth;
pub mod students;
pub mod teacher_auth;
pub mod teachers;

pub use auth::AuthService;
pub use mcqs::McqService;
pub use questions::QuestionService;
pub use student_auth::StudentAuthService;
pub use students::StudentService;
pub use teacher_auth::TeacherAuthService;
pub use teachers::TeacherService;
