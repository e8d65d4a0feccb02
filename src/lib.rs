//! Gradebook - 多租户成绩簿领域核心
//!
//! 教师注册、登录、创建班级，班级下有学生，学生累积成绩。
//! 表现层（HTTP、表单、会话）不在本 crate 内，通过服务层的函数调用接入。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `policy`: 基于所有权的访问控制
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod policy;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;
