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
macro_rules! define_ecole_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum EcoleError {
            $($variant(String),)*
        }

        impl EcoleError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(EcoleError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EcoleError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(EcoleError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl EcoleError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EcoleError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_ecole_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Serialization("E008", "Serialization Error"),
    Authentication("E009", "Authentication Error"),
    Authorization("E010", "Authorization Error"),
}

impl EcoleError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for EcoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EcoleError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for EcoleError {
    fn from(err: sea_orm::DbErr) -> Self {
        EcoleError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for EcoleError {
    fn from(err: serde_json::Error) -> Self {
        EcoleError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EcoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(EcoleError::cache_connection("test").code(), "E001");
        assert_eq!(EcoleError::database_config("test").code(), "E003");
        assert_eq!(EcoleError::validation("test").code(), "E006");
        assert_eq!(EcoleError::authentication("test").code(), "E009");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            EcoleError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            EcoleError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = EcoleError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = EcoleError::not_found("Professeur 42");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Professeur 42"));
    }
}
