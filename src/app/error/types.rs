//! 应用程序错误类型定义

use thiserror::Error;

use crate::app::storage::StoreError;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum SettingsError {
    /// 持久化存储错误
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// GUI 相关错误
    #[error("GUI error: {0}")]
    Gui(String),
}

impl SettingsError {
    /// 创建 GUI 错误
    pub fn gui(message: impl Into<String>) -> Self {
        Self::Gui(message.into())
    }
}

/// 结果类型别名
pub type Result<T> =
    std::result::Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_converts_to_settings_error() {
        // run_gui 通过 `?` 依赖这条 From 转换
        let err: SettingsError = StoreError::Unavailable(
            "no store dir".to_string(),
        )
        .into();
        assert!(matches!(err, SettingsError::Store(_)));
        assert!(err.to_string().contains("no store dir"));
    }
}
