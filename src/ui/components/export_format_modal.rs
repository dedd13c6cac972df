//! 导出格式配置弹窗组件
//!
//! 独立于设置页面的轻量弹窗，只读写导出格式一条
//! 记录，保存成功后静默关闭。

use eframe::egui;

use crate::app::config::types::ExportFormatConfig;
use crate::ui::forms::ExportFormatForm;

use super::render_format_fields;

/// 弹窗动作枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// 无动作
    None,
    /// 保存配置
    Save,
    /// 取消并关闭
    Cancel,
}

/// 导出格式配置弹窗
#[derive(Debug, Default)]
pub struct ExportFormatModal {
    open: bool,
    /// 弹窗内的表单状态
    pub form: ExportFormatForm,
}

impl ExportFormatModal {
    /// 创建关闭状态的弹窗
    pub fn new() -> Self {
        Self::default()
    }

    /// 弹窗是否打开
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// 以指定配置打开弹窗
    ///
    /// 每次打开都重新加载配置到表单，丢弃上次未保存
    /// 的编辑。
    pub fn open_with(
        &mut self,
        config: &ExportFormatConfig,
    ) {
        self.form = ExportFormatForm::from_config(config);
        self.open = true;
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.open = false;
    }

    /// 渲染弹窗，返回用户动作
    pub fn show(
        &mut self,
        ctx: &egui::Context,
    ) -> ModalAction {
        if !self.open {
            return ModalAction::None;
        }

        let mut action = ModalAction::None;

        egui::Window::new("导出格式配置")
            .collapsible(false)
            .resizable(false)
            .anchor(
                egui::Align2::CENTER_CENTER,
                [0.0, 0.0],
            )
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(
                        "为不同类型的文档选择导出格式，\
                         配置将应用于所有后续的下载任务",
                    )
                    .weak(),
                );
                ui.add_space(8.0);

                render_format_fields(
                    ui,
                    "format_modal",
                    &mut self.form,
                );

                ui.add_space(12.0);
                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("取消").clicked() {
                        action = ModalAction::Cancel;
                    }
                    ui.with_layout(
                        egui::Layout::right_to_left(
                            egui::Align::Center,
                        ),
                        |ui| {
                            if ui
                                .button("保存配置")
                                .clicked()
                            {
                                action =
                                    ModalAction::Save;
                            }
                        },
                    );
                });

                ui.add_space(4.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(
                            "配置将保存在本地，并应用于\
                             所有新创建的下载任务",
                        )
                        .small()
                        .weak(),
                    );
                });
            });

        action
    }
}
