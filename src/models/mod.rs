//! 业务数据模型
//!
//! 与 `entity` 中的数据库实体分离，供服务层与调用方使用。

pub mod auth;
pub mod classes;
pub mod grades;
pub mod students;
pub mod teachers;
