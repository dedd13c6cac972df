//! 导出格式选择组件
//!
//! 设置页面和导出格式弹窗共用的六个格式选择框

use eframe::egui;

use crate::app::config::types::{
    DocumentFormat, MindnoteFormat, SlidesFormat,
    TableFormat,
};
use crate::ui::forms::ExportFormatForm;

fn document_format_label(
    format: DocumentFormat,
) -> &'static str {
    match format {
        DocumentFormat::Docx => "Word格式 (.docx)",
        DocumentFormat::Pdf => "PDF格式 (.pdf)",
    }
}

fn table_format_label(
    format: TableFormat,
) -> &'static str {
    match format {
        TableFormat::Xlsx => "Excel格式 (.xlsx)",
        TableFormat::Csv => "CSV格式 (.csv)",
    }
}

fn slides_format_label(
    format: SlidesFormat,
) -> &'static str {
    match format {
        SlidesFormat::Pptx => "PowerPoint格式 (.pptx)",
        SlidesFormat::Pdf => "PDF格式 (.pdf)",
    }
}

fn mindnote_format_label(
    format: MindnoteFormat,
) -> &'static str {
    match format {
        MindnoteFormat::Pdf => "PDF格式 (.pdf)",
    }
}

/// 渲染文档类格式选择组合框
fn render_document_format_combo(
    ui: &mut egui::Ui,
    id_salt: &str,
    format: &mut DocumentFormat,
) {
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(document_format_label(*format))
        .show_ui(ui, |ui| {
            ui.selectable_value(
                format,
                DocumentFormat::Docx,
                document_format_label(
                    DocumentFormat::Docx,
                ),
            );
            ui.selectable_value(
                format,
                DocumentFormat::Pdf,
                document_format_label(DocumentFormat::Pdf),
            );
        });
}

/// 渲染表格类格式选择组合框
fn render_table_format_combo(
    ui: &mut egui::Ui,
    id_salt: &str,
    format: &mut TableFormat,
) {
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(table_format_label(*format))
        .show_ui(ui, |ui| {
            ui.selectable_value(
                format,
                TableFormat::Xlsx,
                table_format_label(TableFormat::Xlsx),
            );
            ui.selectable_value(
                format,
                TableFormat::Csv,
                table_format_label(TableFormat::Csv),
            );
        });
}

/// 渲染演示文稿格式选择组合框
fn render_slides_format_combo(
    ui: &mut egui::Ui,
    id_salt: &str,
    format: &mut SlidesFormat,
) {
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(slides_format_label(*format))
        .show_ui(ui, |ui| {
            ui.selectable_value(
                format,
                SlidesFormat::Pptx,
                slides_format_label(SlidesFormat::Pptx),
            );
            ui.selectable_value(
                format,
                SlidesFormat::Pdf,
                slides_format_label(SlidesFormat::Pdf),
            );
        });
}

/// 渲染导出格式配置区域
///
/// # 参数
/// * `id_salt` - 区分页面与弹窗两处实例的标识
pub fn render_format_fields(
    ui: &mut egui::Ui,
    id_salt: &str,
    form: &mut ExportFormatForm,
) {
    egui::Grid::new(format!("{id_salt}_grid"))
        .num_columns(2)
        .min_col_width(110.0) // 标题列固定最小宽度
        .spacing([20.0, 8.0])
        .striped(true)
        .show(ui, |ui| {
            ui.label("飞书文档 (Doc)");
            render_document_format_combo(
                ui,
                &format!("{id_salt}_doc"),
                &mut form.doc,
            );
            ui.end_row();

            ui.label("新版文档 (Docx)");
            render_document_format_combo(
                ui,
                &format!("{id_salt}_docx"),
                &mut form.docx,
            );
            ui.end_row();

            ui.label("电子表格 (Sheet)");
            render_table_format_combo(
                ui,
                &format!("{id_salt}_sheet"),
                &mut form.sheet,
            );
            ui.end_row();

            ui.label("多维表格 (Bitable)");
            render_table_format_combo(
                ui,
                &format!("{id_salt}_bitable"),
                &mut form.bitable,
            );
            ui.end_row();

            ui.label("演示文稿 (Slides)");
            render_slides_format_combo(
                ui,
                &format!("{id_salt}_slides"),
                &mut form.slides,
            );
            ui.end_row();

            // 思维笔记仅支持PDF格式，选择框禁用
            ui.label("思维笔记 (Mindnote)");
            ui.add_enabled_ui(false, |ui| {
                egui::ComboBox::from_id_salt(format!(
                    "{id_salt}_mindnote"
                ))
                .selected_text(mindnote_format_label(
                    form.mindnote,
                ))
                .show_ui(ui, |ui| {
                    ui.selectable_value(
                        &mut form.mindnote,
                        MindnoteFormat::Pdf,
                        mindnote_format_label(
                            MindnoteFormat::Pdf,
                        ),
                    );
                });
            })
            .response
            .on_hover_text("思维笔记仅支持PDF格式");
            ui.end_row();
        });
}
