//! 内存键值存储
//!
//! 用于测试和宿主应用自带存储的场景

use std::collections::HashMap;

use super::{KvStore, StoreError};

/// 基于 HashMap 的内存键值存储
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    entries: HashMap<String, String>,
}

impl MemoryKvStore {
    /// 创建空的内存键值存储
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置指定键的原始字符串值（测试用）
    pub fn with_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl KvStore for MemoryKvStore {
    fn get(
        &self,
        key: &str,
    ) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), StoreError> {
        self.entries
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
