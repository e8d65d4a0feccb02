//! 配置管理
//!
//! 默认值 → config.toml → config.{APP_ENV}.toml → GRADEBOOK__* 环境变量。

mod r#impl;
mod structs;

pub use structs::*;
