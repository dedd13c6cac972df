//! 配置验证模块
//!
//! 负责在保存前验证应用凭证配置的各个字段

use super::types::ConnectionConfig;

/// 凭证字段的最小长度
pub const MIN_CREDENTIAL_LEN: usize = 10;

/// 应用凭证配置的逐字段错误
///
/// 每个字段对应一条可选的错误消息，供界面在对应
/// 输入框下方展示。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionFieldErrors {
    /// 应用 ID 字段错误
    pub app_id: Option<String>,
    /// 应用密钥字段错误
    pub app_secret: Option<String>,
    /// API 端点字段错误
    pub endpoint: Option<String>,
}

impl ConnectionFieldErrors {
    /// 是否没有任何字段错误
    pub fn is_empty(&self) -> bool {
        self.app_id.is_none()
            && self.app_secret.is_none()
            && self.endpoint.is_none()
    }
}

/// 配置验证器
pub struct ConfigValidator;

impl ConfigValidator {
    /// 验证应用凭证配置
    ///
    /// 返回逐字段错误，全部字段合法时结果为空。
    /// 验证失败时调用方不得执行任何保存操作。
    pub fn validate_connection_config(
        config: &ConnectionConfig,
    ) -> ConnectionFieldErrors {
        let mut errors =
            ConnectionFieldErrors::default();

        if config.app_id.is_empty() {
            errors.app_id =
                Some("请输入应用ID".to_string());
        } else if config.app_id.chars().count()
            < MIN_CREDENTIAL_LEN
        {
            errors.app_id = Some(
                "应用ID长度不能少于10位".to_string(),
            );
        }

        if config.app_secret.is_empty() {
            errors.app_secret =
                Some("请输入应用密钥".to_string());
        } else if config.app_secret.chars().count()
            < MIN_CREDENTIAL_LEN
        {
            errors.app_secret = Some(
                "应用密钥长度不能少于10位".to_string(),
            );
        }

        if config.endpoint.is_empty() {
            errors.endpoint =
                Some("请输入API端点".to_string());
        } else if !is_well_formed_url(&config.endpoint) {
            errors.endpoint = Some(
                "请输入有效的URL地址".to_string(),
            );
        }

        errors
    }
}

/// 检查字符串是否为格式正确的 http(s) URL
///
/// 要求带 http/https 协议前缀、主机名非空且不含
/// 空白字符。
fn is_well_formed_url(value: &str) -> bool {
    let rest = if let Some(rest) =
        value.strip_prefix("https://")
    {
        rest
    } else if let Some(rest) =
        value.strip_prefix("http://")
    {
        rest
    } else {
        return false;
    };

    let host = rest.split('/').next().unwrap_or("");
    !host.is_empty()
        && !value.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::types::DEFAULT_ENDPOINT;

    fn valid_config() -> ConnectionConfig {
        ConnectionConfig {
            app_id: "cli_a1b2c3d4e5".to_string(),
            app_secret: "secret1234567890".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    #[test]
    fn test_valid_config_has_no_errors() {
        let errors =
            ConfigValidator::validate_connection_config(
                &valid_config(),
            );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_short_app_id_rejected() {
        let mut config = valid_config();
        config.app_id = "short".to_string();

        let errors =
            ConfigValidator::validate_connection_config(
                &config,
            );
        assert!(errors.app_id.is_some());
        assert!(errors.app_secret.is_none());
    }

    #[test]
    fn test_empty_fields_all_reported() {
        let errors =
            ConfigValidator::validate_connection_config(
                &ConnectionConfig {
                    app_id: String::new(),
                    app_secret: String::new(),
                    endpoint: String::new(),
                },
            );
        assert!(errors.app_id.is_some());
        assert!(errors.app_secret.is_some());
        assert!(errors.endpoint.is_some());
    }

    #[test]
    fn test_url_rules() {
        assert!(is_well_formed_url(
            "https://open.feishu.cn/open-apis"
        ));
        assert!(is_well_formed_url("http://localhost"));
        assert!(!is_well_formed_url("open.feishu.cn"));
        assert!(!is_well_formed_url("ftp://example.com"));
        assert!(!is_well_formed_url("https://"));
        assert!(!is_well_formed_url(
            "https://open feishu.cn"
        ));
    }
}
