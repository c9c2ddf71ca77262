pub use super::admins::Entity as Admins;
pub use super::mcqs::Entity as Mcqs;
pub use super::questions::Entity as Questions;
pub use super::students::Entity as Students;
pub use super::teachers::Entity as Teachers;
