//! 持久化键值存储模块
//!
//! 配置记录以字符串键值的形式持久化，存储本身
//! 作为依赖注入到配置层，便于在测试中替换。

pub mod local;
pub mod memory;
pub mod paths;

pub use local::LocalKvStore;
pub use memory::MemoryKvStore;

use std::io;
use thiserror::Error;

/// 键值存储错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    /// 底层读写错误
    #[error("Store I/O error: {0}")]
    Io(#[from] io::Error),

    /// 记录序列化错误
    #[error("Serialize error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// 存储位置不可用
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// 字符串键值存储接口
///
/// 读取缺失的键返回 `Ok(None)`；写入失败（例如磁盘
/// 配额不足）必须向调用方传播错误。
pub trait KvStore {
    /// 读取指定键的原始字符串值
    fn get(
        &self,
        key: &str,
    ) -> Result<Option<String>, StoreError>;

    /// 写入指定键的原始字符串值
    fn set(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), StoreError>;
}
