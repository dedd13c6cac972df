//! 存储路径管理模块
//!
//! 负责解析本地键值存储的落盘目录

use std::path::{Path, PathBuf};

use super::StoreError;

/// 存储目录管理器
pub struct StorePaths {
    store_dir: PathBuf,
}

impl StorePaths {
    /// 创建新的存储路径管理器
    ///
    /// # 参数
    /// * `app_name` - 应用名称，用于构建存储目录路径
    ///
    /// # 示例
    /// ```
    /// use feishu_export::app::storage::paths::StorePaths;
    /// let paths = StorePaths::new("feishu-export").unwrap();
    /// assert!(paths.store_dir().ends_with("feishu-export"));
    /// ```
    pub fn new(
        app_name: &str,
    ) -> Result<Self, StoreError> {
        let store_dir = Self::resolve_store_dir(app_name)?;

        Ok(Self { store_dir })
    }

    /// 使用指定目录创建存储路径管理器
    pub fn from_dir(store_dir: PathBuf) -> Self {
        Self { store_dir }
    }

    /// 获取存储目录路径
    pub fn store_dir(&self) -> &Path {
        &self.store_dir
    }

    /// 获取指定键对应的文件路径
    pub fn key_file(&self, key: &str) -> PathBuf {
        self.store_dir.join(format!("{key}.json"))
    }

    /// 确保存储目录存在
    pub fn ensure_store_dir_exists(
        &self,
    ) -> Result<(), StoreError> {
        if !self.store_dir.exists() {
            std::fs::create_dir_all(&self.store_dir)?;
            tracing::info!(
                "存储目录创建成功: {:?}",
                self.store_dir
            );
        }
        Ok(())
    }

    /// 解析存储目录
    ///
    /// 优先使用系统用户配置目录，获取失败时回退到
    /// 当前工作目录。
    fn resolve_store_dir(
        app_name: &str,
    ) -> Result<PathBuf, StoreError> {
        if let Some(config_dir) = dirs::config_dir() {
            return Ok(config_dir.join(app_name));
        }

        tracing::warn!(
            "无法获取用户配置目录，回退到工作目录"
        );
        let current_dir = std::env::current_dir()
            .map_err(|e| {
                StoreError::Unavailable(format!(
                    "无法获取当前工作目录: {e}"
                ))
            })?;
        Ok(current_dir.join(app_name))
    }
}
