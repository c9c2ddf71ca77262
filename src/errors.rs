//! 统一错误处理模块
//!
//! 使用宏生成错误枚举，每个变体携带错误代码、类型名称与详情。

use std::fmt;

macro_rules! define_elearn_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ELearnError {
            $($variant(String),)*
        }

        impl ELearnError {
            /// 错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ELearnError::$variant(_) => $code,)*
                }
            }

            /// 错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ELearnError::$variant(_) => $type_name,)*
                }
            }

            /// 错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ELearnError::$variant(msg) => msg,)*
                }
            }
        }

        impl fmt::Display for ELearnError {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}: {}", self.error_type(), self.message())
            }
        }

        // 蛇形命名的便捷构造函数
        paste::paste! {
            impl ELearnError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ELearnError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_elearn_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    DatabaseConfig("E002", "Database Configuration Error"),
    DatabaseConnection("E003", "Database Connection Error"),
    DatabaseOperation("E004", "Database Operation Error"),
    FileOperation("E005", "File Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Serialization("E008", "Serialization Error"),
    DateParse("E009", "Date Parse Error"),
    MailDelivery("E010", "Mail Delivery Error"),
}

impl std::error::Error for ELearnError {}

impl From<sea_orm::DbErr> for ELearnError {
    fn from(err: sea_orm::DbErr) -> Self {
        ELearnError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for ELearnError {
    fn from(err: std::io::Error) -> Self {
        ELearnError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ELearnError {
    fn from(err: serde_json::Error) -> Self {
        ELearnError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ELearnError {
    fn from(err: chrono::ParseError) -> Self {
        ELearnError::DateParse(err.to_string())
    }
}

impl From<reqwest::Error> for ELearnError {
    fn from(err: reqwest::Error) -> Self {
        ELearnError::MailDelivery(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ELearnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(ELearnError::cache_connection("x").code(), "E001");
        assert_eq!(ELearnError::validation("x").code(), "E006");
        assert_eq!(ELearnError::not_found("x").code(), "E007");
        assert_eq!(ELearnError::mail_delivery("x").code(), "E010");
    }

    #[test]
    fn display_includes_type_and_detail() {
        let err = ELearnError::validation("Invalid email");
        let text = err.to_string();
        assert!(text.contains("Validation Error"));
        assert!(text.contains("Invalid email"));
    }

    #[test]
    fn db_errors_convert() {
        let err: ELearnError = sea_orm::DbErr::Custom("boom".into()).into();
        assert_eq!(err.code(), "E004");
        assert!(err.message().contains("boom"));
    }
}
