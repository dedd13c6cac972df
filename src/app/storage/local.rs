//! 文件型键值存储
//!
//! 每个键对应存储目录下的一个 JSON 文件，读写均为
//! 单次原子的文件系统调用。

use std::fs;
use std::io;
use std::path::PathBuf;

use super::paths::StorePaths;
use super::{KvStore, StoreError};

/// 基于本地文件的键值存储
pub struct LocalKvStore {
    paths: StorePaths,
}

impl LocalKvStore {
    /// 创建新的文件型键值存储
    ///
    /// # 参数
    /// * `app_name` - 应用名称，决定存储目录
    pub fn new(
        app_name: &str,
    ) -> Result<Self, StoreError> {
        let paths = StorePaths::new(app_name)?;

        Ok(Self { paths })
    }

    /// 在指定目录下创建键值存储（测试用）
    pub fn with_dir(dir: PathBuf) -> Self {
        Self {
            paths: StorePaths::from_dir(dir),
        }
    }

    /// 获取存储目录
    pub fn store_dir(&self) -> &std::path::Path {
        self.paths.store_dir()
    }
}

impl KvStore for LocalKvStore {
    fn get(
        &self,
        key: &str,
    ) -> Result<Option<String>, StoreError> {
        let key_file = self.paths.key_file(key);

        match fs::read_to_string(&key_file) {
            Ok(content) => Ok(Some(content)),
            Err(e)
                if e.kind() == io::ErrorKind::NotFound =>
            {
                Ok(None)
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn set(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<(), StoreError> {
        self.paths.ensure_store_dir_exists()?;

        let key_file = self.paths.key_file(key);
        fs::write(&key_file, value)?;

        tracing::debug!("键值写入成功: {:?}", key_file);
        Ok(())
    }
}
