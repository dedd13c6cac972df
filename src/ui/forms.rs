//! 表单状态模块
//!
//! 界面持有的都是配置记录的临时副本，提交时再经
//! 校验转换回记录并保存。提交流程不依赖任何界面
//! 类型，便于单独测试。

use crate::app::config::store::ConfigStore;
use crate::app::config::types::{
    ConnectionConfig, DocumentFormat, ExportFormatConfig,
    MindnoteFormat, SlidesFormat, TableFormat,
};
use crate::app::config::validator::{
    ConfigValidator, ConnectionFieldErrors,
};
use crate::app::storage::{KvStore, StoreError};

/// 提交失败原因
#[derive(Debug)]
pub enum SubmitError {
    /// 字段校验未通过，未执行任何保存
    Invalid(ConnectionFieldErrors),
    /// 底层存储写入失败
    Store(StoreError),
}

/// 应用凭证表单状态
#[derive(Debug, Clone, Default)]
pub struct ConnectionForm {
    /// 应用 ID 输入内容
    pub app_id: String,
    /// 应用密钥输入内容（界面以密码形式展示）
    pub app_secret: String,
    /// API 端点输入内容
    pub endpoint: String,
}

impl ConnectionForm {
    /// 从配置记录创建表单状态
    pub fn from_config(config: &ConnectionConfig) -> Self {
        Self {
            app_id: config.app_id.clone(),
            app_secret: config.app_secret.clone(),
            endpoint: config.endpoint.clone(),
        }
    }

    /// 转换为配置记录（不校验）
    pub fn to_config(&self) -> ConnectionConfig {
        ConnectionConfig {
            app_id: self.app_id.trim().to_string(),
            app_secret: self.app_secret.trim().to_string(),
            endpoint: self.endpoint.trim().to_string(),
        }
    }
}

/// 导出格式表单状态
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportFormatForm {
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
    /// 思维笔记 (Mindnote)，仅支持 PDF，不可编辑
    pub mindnote: MindnoteFormat,
}

impl ExportFormatForm {
    /// 从配置记录创建表单状态
    pub fn from_config(
        config: &ExportFormatConfig,
    ) -> Self {
        Self {
            doc: config.doc,
            docx: config.docx,
            sheet: config.sheet,
            bitable: config.bitable,
            slides: config.slides,
            mindnote: config.mindnote,
        }
    }

    /// 转换为配置记录
    pub fn to_config(&self) -> ExportFormatConfig {
        ExportFormatConfig {
            doc: self.doc,
            docx: self.docx,
            sheet: self.sheet,
            bitable: self.bitable,
            slides: self.slides,
            mindnote: self.mindnote,
        }
    }

    /// 保存导出格式配置
    ///
    /// 弹窗的保存入口：只写导出格式一个键，不读取
    /// 也不改写凭证记录。
    pub fn save<S: KvStore>(
        &self,
        store: &mut ConfigStore<S>,
    ) -> Result<(), StoreError> {
        store.save_export_format_config(&self.to_config())
    }
}

/// 设置页面的完整表单状态
///
/// 设置页面把凭证字段和导出格式字段合并在同一个
/// 表单里，提交时按"先凭证、后格式"的顺序保存。
#[derive(Debug, Clone, Default)]
pub struct SettingsForm {
    /// 凭证字段
    pub connection: ConnectionForm,
    /// 导出格式字段
    pub formats: ExportFormatForm,
}

impl SettingsForm {
    /// 从配置存储加载两条记录到表单
    pub fn load<S: KvStore>(
        store: &ConfigStore<S>,
    ) -> Self {
        Self {
            connection: ConnectionForm::from_config(
                &store.load_connection_config(),
            ),
            formats: ExportFormatForm::from_config(
                &store.load_export_format_config(),
            ),
        }
    }

    /// 重置表单为默认配置（不写入存储）
    pub fn reset_defaults(&mut self) {
        self.connection = ConnectionForm::from_config(
            &ConnectionConfig::default(),
        );
        self.formats = ExportFormatForm::from_config(
            &ExportFormatConfig::default(),
        );
    }

    /// 提交表单：校验、依次保存两条记录
    ///
    /// 校验未通过时返回逐字段错误且不产生任何写入；
    /// 写入失败时错误向上传播，调用方不得提示成功。
    /// 成功时返回已保存的凭证配置，供宿主回调使用。
    pub fn try_submit<S: KvStore>(
        &self,
        store: &mut ConfigStore<S>,
    ) -> Result<ConnectionConfig, SubmitError> {
        let connection = self.connection.to_config();

        let errors =
            ConfigValidator::validate_connection_config(
                &connection,
            );
        if !errors.is_empty() {
            return Err(SubmitError::Invalid(errors));
        }

        store
            .save_connection_config(&connection)
            .map_err(SubmitError::Store)?;
        store
            .save_export_format_config(
                &self.formats.to_config(),
            )
            .map_err(SubmitError::Store)?;

        Ok(connection)
    }
}
