//! 配置记录数据结构定义

use serde::{Deserialize, Serialize};

/// 飞书开放平台默认 API 端点
pub const DEFAULT_ENDPOINT: &str =
    "https://open.feishu.cn/open-apis";

/// 应用凭证配置
///
/// 持久化为 JSON 对象，字段名与飞书前端约定保持
/// 一致（camelCase）。
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionConfig {
    /// 应用 ID (App ID)
    pub app_id: String,
    /// 应用密钥 (App Secret)
    pub app_secret: String,
    /// API 端点 (Endpoint)
    pub endpoint: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            app_secret: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// 文档类导出格式（Doc / Docx）
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// Word格式 (.docx)
    #[default]
    Docx,
    /// PDF格式 (.pdf)
    Pdf,
}

/// 表格类导出格式（Sheet / Bitable）
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// Excel格式 (.xlsx)
    #[default]
    Xlsx,
    /// CSV格式 (.csv)
    Csv,
}

/// 演示文稿导出格式（Slides）
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
)]
#[serde(rename_all = "lowercase")]
pub enum SlidesFormat {
    /// PowerPoint格式 (.pptx)
    #[default]
    Pptx,
    /// PDF格式 (.pdf)
    Pdf,
}

/// 思维笔记导出格式（Mindnote）
///
/// 思维笔记仅支持 PDF，枚举只有一个合法取值，字段
/// 为向前兼容保留。
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
)]
#[serde(rename_all = "lowercase")]
pub enum MindnoteFormat {
    /// PDF格式 (.pdf)
    #[default]
    Pdf,
}

/// 导出格式配置
///
/// 每个字段对应一类飞书文档的首选导出格式，经过
/// 默认值回退后不存在未设置状态。
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
)]
pub struct ExportFormatConfig {
    /// 飞书文档 (Doc)
    pub doc: DocumentFormat,
    /// 新版文档 (Docx)
    pub docx: DocumentFormat,
    /// 电子表格 (Sheet)
    pub sheet: TableFormat,
    /// 多维表格 (Bitable)
    pub bitable: TableFormat,
    /// 演示文稿 (Slides)
    pub slides: SlidesFormat,
    /// 思维笔记 (Mindnote)
    pub mindnote: MindnoteFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_config_default() {
        let config = ConnectionConfig::default();
        assert_eq!(config.app_id, "");
        assert_eq!(config.app_secret, "");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_connection_config_serde_field_names() {
        let config = ConnectionConfig {
            app_id: "cli_a1b2c3d4e5".to_string(),
            app_secret: "secret1234567890".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        };
        let json =
            serde_json::to_string(&config).unwrap();
        assert!(
            json.contains("\"appId\""),
            "App ID should serialize as camelCase"
        );
        assert!(json.contains("\"appSecret\""));
        assert!(json.contains("\"endpoint\""));
    }

    #[test]
    fn test_format_enum_values_are_lowercase() {
        let config = ExportFormatConfig::default();
        let json =
            serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            "{\"doc\":\"docx\",\"docx\":\"docx\",\
             \"sheet\":\"xlsx\",\"bitable\":\"xlsx\",\
             \"slides\":\"pptx\",\"mindnote\":\"pdf\"}"
        );
    }

    #[test]
    fn test_illegal_format_value_fails_to_parse() {
        // mindnote 不存在 pdf 以外的合法取值
        let result = serde_json::from_str::<
            ExportFormatConfig,
        >(
            "{\"doc\":\"docx\",\"docx\":\"docx\",\
             \"sheet\":\"xlsx\",\"bitable\":\"xlsx\",\
             \"slides\":\"pptx\",\"mindnote\":\"xlsx\"}",
        );
        assert!(result.is_err());
    }
}
