//! 应用层模块
//!
//! 包含配置、存储、错误处理和日志等非界面功能

pub mod config;
pub mod error;
pub mod logging;
pub mod storage;
