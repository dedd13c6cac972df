//! 配置存储模块
//!
//! 两条配置记录读写的唯一入口：读取时做类型化的
//! 形状校验并在失败时回退默认值，保存时只做序列化
//! 和写入，写入失败向调用方传播。

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::types::{ConnectionConfig, ExportFormatConfig};
use crate::app::storage::{KvStore, StoreError};

/// 应用凭证配置的存储键
pub const CONNECTION_CONFIG_KEY: &str = "feishu_config";
/// 导出格式配置的存储键
pub const EXPORT_FORMAT_CONFIG_KEY: &str =
    "export_format_config";

/// 配置存储
///
/// 持有注入的键值存储，两条记录使用相互独立的键：
/// 导出格式弹窗更新偏好时不需要读取或重写凭证记录。
pub struct ConfigStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> ConfigStore<S> {
    /// 创建新的配置存储
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 获取底层键值存储
    pub fn store(&self) -> &S {
        &self.store
    }

    /// 加载应用凭证配置
    ///
    /// 记录缺失、读取失败或形状不符时回退到默认配置，
    /// 不向调用方抛出错误。
    pub fn load_connection_config(
        &self,
    ) -> ConnectionConfig {
        self.load_or_default(CONNECTION_CONFIG_KEY)
    }

    /// 加载导出格式配置
    pub fn load_export_format_config(
        &self,
    ) -> ExportFormatConfig {
        self.load_or_default(EXPORT_FORMAT_CONFIG_KEY)
    }

    /// 保存应用凭证配置
    ///
    /// 字段校验由调用方完成，此处仅序列化并写入。
    pub fn save_connection_config(
        &mut self,
        config: &ConnectionConfig,
    ) -> Result<(), StoreError> {
        self.save(CONNECTION_CONFIG_KEY, config)
    }

    /// 保存导出格式配置
    pub fn save_export_format_config(
        &mut self,
        config: &ExportFormatConfig,
    ) -> Result<(), StoreError> {
        self.save(EXPORT_FORMAT_CONFIG_KEY, config)
    }

    /// 读取并反序列化指定键的记录
    ///
    /// 任何失败都等同于"尚无配置"：记录警告日志后
    /// 返回默认值，不做字段级合并。
    fn load_or_default<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(
                    "配置不存在，使用默认配置: {key}"
                );
                return T::default();
            }
            Err(e) => {
                tracing::warn!(
                    "读取配置失败，使用默认配置: {key}: {e}"
                );
                return T::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(config) => {
                tracing::debug!("配置加载成功: {key}");
                config
            }
            Err(e) => {
                tracing::warn!(
                    "解析配置失败，使用默认配置: {key}: {e}"
                );
                T::default()
            }
        }
    }

    /// 序列化并写入指定键的记录
    fn save<T: Serialize>(
        &mut self,
        key: &str,
        config: &T,
    ) -> Result<(), StoreError> {
        let raw = serde_json::to_string(config)?;
        self.store.set(key, &raw)?;

        tracing::info!("配置保存成功: {key}");
        Ok(())
    }
}
