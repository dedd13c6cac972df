//! 配置管理模块
//!
//! 提供应用凭证与导出格式两套配置记录的
//! 读取、默认值回退、校验和保存功能

pub mod store;
/// 配置类型定义
pub mod types;
pub mod validator;
