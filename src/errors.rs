//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

use sea_orm::{DbErr, SqlErr};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_gradebook_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum GradebookError {
            $($variant(String),)*
        }

        impl GradebookError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(GradebookError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(GradebookError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(GradebookError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl GradebookError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        GradebookError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_gradebook_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    DuplicateEmail("E006", "Duplicate Email"),
    DuplicateCode("E007", "Duplicate Enrollment Code"),
    InvalidCredentials("E008", "Invalid Credentials"),
    Forbidden("E009", "Forbidden"),
    IntegrityError("E010", "Referential Integrity Error"),
    ConstraintViolation("E011", "Constraint Violation"),
    PasswordHash("E012", "Password Hash Error"),
}

impl GradebookError {
    /// 格式化为彩色输出（用于开发环境）
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

    /// 将数据库错误按约束类型分类，`context` 描述失败的操作
    pub fn from_db(err: DbErr, context: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                GradebookError::ConstraintViolation(format!("{context}: {detail}"))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                GradebookError::IntegrityError(format!("{context}: {detail}"))
            }
            _ => {
                // 部分驱动不返回扩展错误码，回退到消息匹配
                let msg = err.to_string();
                if msg.contains("UNIQUE constraint failed") {
                    GradebookError::ConstraintViolation(format!("{context}: {msg}"))
                } else if msg.contains("FOREIGN KEY constraint failed") {
                    GradebookError::IntegrityError(format!("{context}: {msg}"))
                } else {
                    GradebookError::DatabaseOperation(format!("{context}: {msg}"))
                }
            }
        }
    }
}

impl fmt::Display for GradebookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GradebookError {}

// 为常见的错误类型实现 From trait
impl From<DbErr> for GradebookError {
    fn from(err: DbErr) -> Self {
        GradebookError::from_db(err, "database error")
    }
}

impl From<argon2::password_hash::Error> for GradebookError {
    fn from(err: argon2::password_hash::Error) -> Self {
        GradebookError::PasswordHash(err.to_string())
    }
}

impl From<tokio::task::JoinError> for GradebookError {
    fn from(err: tokio::task::JoinError) -> Self {
        GradebookError::PasswordHash(format!("hashing task failed: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, GradebookError>;
