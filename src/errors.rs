//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_intellgrade_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum IntellGradeError {
            $($variant(String),)*
        }

        impl IntellGradeError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(IntellGradeError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(IntellGradeError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(IntellGradeError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl IntellGradeError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        IntellGradeError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_intellgrade_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Serialization("E008", "Serialization Error"),
    DateParse("E009", "Date Parse Error"),
    Authentication("E010", "Authentication Error"),
    Authorization("E011", "Authorization Error"),
    Prediction("E012", "Prediction Error"),
}

impl IntellGradeError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for IntellGradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for IntellGradeError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for IntellGradeError {
    fn from(err: sea_orm::DbErr) -> Self {
        IntellGradeError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for IntellGradeError {
    fn from(err: std::io::Error) -> Self {
        IntellGradeError::DatabaseConnection(err.to_string())
    }
}

impl From<serde_json::Error> for IntellGradeError {
    fn from(err: serde_json::Error) -> Self {
        IntellGradeError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for IntellGradeError {
    fn from(err: chrono::ParseError) -> Self {
        IntellGradeError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IntellGradeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(IntellGradeError::cache_connection("test").code(), "E001");
        assert_eq!(IntellGradeError::database_config("test").code(), "E003");
        assert_eq!(IntellGradeError::validation("test").code(), "E006");
        assert_eq!(IntellGradeError::authentication("test").code(), "E010");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            IntellGradeError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            IntellGradeError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = IntellGradeError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = IntellGradeError::prediction("missing feature");
        let formatted = err.format_simple();
        assert!(formatted.contains("Prediction Error"));
        assert!(formatted.contains("missing feature"));
    }
}
