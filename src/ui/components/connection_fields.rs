//! 应用凭证输入组件
//!
//! 渲染 App ID、App Secret、API 端点三个输入框以及
//! 对应的字段级校验错误。App Secret 以密码形式展示。

use eframe::egui;

use crate::app::config::validator::ConnectionFieldErrors;
use crate::ui::forms::ConnectionForm;

/// 在字段下方渲染一条校验错误
fn render_field_error(
    ui: &mut egui::Ui,
    error: &Option<String>,
) {
    if let Some(message) = error {
        ui.label("");
        ui.colored_label(
            ui.visuals().error_fg_color,
            egui::RichText::new(message).small(),
        );
        ui.end_row();
    }
}

/// 渲染应用凭证配置区域
pub fn render_connection_fields(
    ui: &mut egui::Ui,
    form: &mut ConnectionForm,
    errors: &ConnectionFieldErrors,
) {
    egui::Grid::new("connection_config")
        .num_columns(2)
        .min_col_width(110.0) // 标题列固定最小宽度
        .spacing([20.0, 8.0])
        .striped(true)
        .show(ui, |ui| {
            ui.label("应用ID (App ID)");
            ui.add(
                egui::TextEdit::singleline(
                    &mut form.app_id,
                )
                .hint_text("请输入飞书应用的App ID"),
            );
            ui.end_row();
            render_field_error(ui, &errors.app_id);

            ui.label("应用密钥 (App Secret)");
            ui.add(
                egui::TextEdit::singleline(
                    &mut form.app_secret,
                )
                .password(true)
                .hint_text("请输入飞书应用的App Secret"),
            );
            ui.end_row();
            render_field_error(ui, &errors.app_secret);

            ui.label("API端点 (Endpoint)");
            ui.add(
                egui::TextEdit::singleline(
                    &mut form.endpoint,
                )
                .hint_text(
                    "https://open.feishu.cn/open-apis",
                ),
            );
            ui.end_row();
            render_field_error(ui, &errors.endpoint);
        });
}
