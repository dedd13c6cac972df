//! 飞书导出设置库
//!
//! 飞书云文档导出工具的设置组件
//!
//! ## 功能特性
//!
//! - 应用凭证与导出格式两套配置记录
//! - 基于键值存储的配置读写与默认值回退
//! - 表单校验（必填、长度、URL 格式）
//! - 设置页面与导出格式弹窗两种界面
//! - 统一错误处理
//!
//! ## 使用示例
//!
//! ```
//! use feishu_export::{ConfigStore, MemoryKvStore};
//!
//! // 创建配置存储（注入内存键值存储）
//! let mut store = ConfigStore::new(MemoryKvStore::new());
//!
//! // 空存储返回默认配置
//! let config = store.load_connection_config();
//! assert_eq!(config.endpoint, "https://open.feishu.cn/open-apis");
//! ```

pub mod app;
pub mod ui;

// 重新导出主要功能
pub use app::config::store::ConfigStore;
pub use app::config::types::{
    ConnectionConfig, DocumentFormat, ExportFormatConfig,
    MindnoteFormat, SlidesFormat, TableFormat,
};
pub use app::config::validator::{
    ConfigValidator, ConnectionFieldErrors,
};
pub use app::error::types::{Result, SettingsError};
pub use app::storage::{
    KvStore, LocalKvStore, MemoryKvStore, StoreError,
};
