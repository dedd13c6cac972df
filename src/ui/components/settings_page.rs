//! 设置页面组件
//!
//! 飞书应用配置页面：凭证字段、配置指南、导出格式
//! 字段和操作按钮

use eframe::egui;

use crate::app::config::validator::ConnectionFieldErrors;
use crate::ui::forms::SettingsForm;

use super::{
    render_connection_fields, render_format_fields,
};

/// 用户动作枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// 无动作
    None,
    /// 保存配置
    Save,
    /// 重置为默认配置
    Reset,
    /// 返回宿主界面
    Back,
}

/// 渲染配置指南折叠区域
fn render_setup_guide(ui: &mut egui::Ui) {
    egui::CollapsingHeader::new(
        "配置指南（点击查看详细说明）",
    )
    .default_open(false)
    .show(ui, |ui| {
        ui.label(
            egui::RichText::new(
                "重定向URL配置（必须配置）：请在飞书应用\
                 设置中添加以下重定向URL：",
            )
            .strong(),
        );
        ui.monospace("http://localhost:3000/callback");
        ui.monospace("http://localhost:3001/callback");
        ui.label(
            egui::RichText::new(
                "注意：必须添加完整的URL（包含 /callback \
                 路径），否则会出现 4401 错误",
            )
            .small(),
        );
        ui.label(
            egui::RichText::new(
                "路径：飞书开放平台 → 应用管理 → 您的应用 \
                 → 安全设置 → 重定向URL",
            )
            .small(),
        );

        ui.add_space(8.0);

        ui.label(
            egui::RichText::new(
                "权限配置（必须配置）：请为应用开通以下\
                 权限范围（Scope）：",
            )
            .strong(),
        );
        ui.monospace(
            "contact:user.employee_id:readonly docs:doc \
             docs:document.media:download \
             docs:document:export docx:document \
             drive:drive drive:file drive:file:download \
             wiki:wiki offline_access",
        );
        ui.label(
            egui::RichText::new(
                "路径：飞书开放平台 → 应用管理 → 您的应用 \
                 → 权限管理 → 权限配置",
            )
            .small(),
        );
    });
}

/// 渲染设置页面，返回用户动作
///
/// # 参数
/// * `show_back` - 宿主注册了返回回调时显示返回按钮
pub fn render_settings_page(
    ui: &mut egui::Ui,
    form: &mut SettingsForm,
    errors: &ConnectionFieldErrors,
    show_back: bool,
) -> UserAction {
    let mut action = UserAction::None;

    ui.vertical_centered(|ui| {
        ui.heading("飞书应用配置");
        ui.label(
            "请配置您的飞书应用信息，这些信息将用于连接\
             飞书API",
        );
    });
    ui.add_space(8.0);

    render_setup_guide(ui);
    ui.add_space(12.0);

    render_connection_fields(
        ui,
        &mut form.connection,
        errors,
    );

    ui.add_space(12.0);
    ui.separator();
    ui.vertical_centered(|ui| {
        ui.strong("导出格式配置");
    });
    ui.label("为不同类型的文档选择导出格式");
    ui.add_space(8.0);

    render_format_fields(
        ui,
        "settings_page_formats",
        &mut form.formats,
    );

    ui.add_space(12.0);
    ui.separator();

    ui.horizontal(|ui| {
        if show_back && ui.button("返回").clicked() {
            action = UserAction::Back;
        }
        if ui.button("重置").clicked() {
            action = UserAction::Reset;
        }

        ui.with_layout(
            egui::Layout::right_to_left(
                egui::Align::Center,
            ),
            |ui| {
                if ui.button("保存配置").clicked() {
                    action = UserAction::Save;
                }
            },
        );
    });

    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(
                "配置信息将保存在本地，不会上传到服务器",
            )
            .small()
            .weak(),
        );
    });

    action
}
