//! GUI主应用程序模块

use std::time::{Duration, Instant};

use eframe::egui;

use crate::app::config::store::ConfigStore;
use crate::app::config::types::ConnectionConfig;
use crate::app::config::validator::ConnectionFieldErrors;
use crate::app::error::types::{Result, SettingsError};
use crate::app::storage::{KvStore, LocalKvStore};

use super::components::{
    render_settings_page, ExportFormatModal, ModalAction,
    UserAction,
};
use super::fonts::loader;
use super::forms::{SettingsForm, SubmitError};
use super::widgets::Notice;

/// 应用名称，决定本地存储目录
const APP_NAME: &str = "feishu-export";

/// 保存成功到执行返回回调的延迟
const BACK_DELAY: Duration = Duration::from_secs(1);

/// 凭证配置保存成功后的宿主回调
pub type ConfigSavedCallback =
    Box<dyn FnMut(&ConnectionConfig)>;
/// 返回宿主界面的回调
pub type BackCallback = Box<dyn FnMut()>;

/// 设置界面应用程序
pub struct SettingsApp<S: KvStore> {
    store: ConfigStore<S>,
    form: SettingsForm,
    field_errors: ConnectionFieldErrors,
    format_modal: ExportFormatModal,
    notice: Option<Notice>,
    // 保存成功后延迟执行返回回调的截止时间
    back_deadline: Option<Instant>,
    on_config_saved: Option<ConfigSavedCallback>,
    on_back: Option<BackCallback>,
}

impl<S: KvStore> SettingsApp<S> {
    /// 创建设置界面应用程序
    ///
    /// 构造时从配置存储加载两条记录到表单。
    pub fn new(store: ConfigStore<S>) -> Self {
        let form = SettingsForm::load(&store);

        Self {
            store,
            form,
            field_errors: ConnectionFieldErrors::default(),
            format_modal: ExportFormatModal::new(),
            notice: None,
            back_deadline: None,
            on_config_saved: None,
            on_back: None,
        }
    }

    /// 注册凭证保存成功回调
    pub fn with_config_saved_callback(
        mut self,
        callback: ConfigSavedCallback,
    ) -> Self {
        self.on_config_saved = Some(callback);
        self
    }

    /// 注册返回回调
    ///
    /// 注册后设置页面显示返回按钮，保存成功约一秒后
    /// 自动执行。
    pub fn with_back_callback(
        mut self,
        callback: BackCallback,
    ) -> Self {
        self.on_back = Some(callback);
        self
    }

    /// 处理设置页面的保存动作
    fn save_settings(&mut self) {
        match self.form.try_submit(&mut self.store) {
            Ok(saved) => {
                self.field_errors =
                    ConnectionFieldErrors::default();
                self.notice = Some(Notice::success(
                    "配置保存成功！",
                ));

                // 通知宿主应用配置已保存
                if let Some(callback) =
                    &mut self.on_config_saved
                {
                    callback(&saved);
                }

                if self.on_back.is_some() {
                    self.back_deadline =
                        Some(Instant::now() + BACK_DELAY);
                }
            }
            Err(SubmitError::Invalid(errors)) => {
                self.field_errors = errors;
                self.notice = Some(Notice::error(
                    "请填写完整的配置信息",
                ));
            }
            Err(SubmitError::Store(e)) => {
                tracing::error!("保存配置失败: {e}");
                self.notice = Some(Notice::error(
                    "保存配置失败，请重试",
                ));
            }
        }
    }

    /// 处理弹窗的保存动作
    ///
    /// 只写导出格式一条记录；成功后静默关闭弹窗，
    /// 失败时保持弹窗打开并提示错误。
    fn save_format_config(&mut self) {
        match self
            .format_modal
            .form
            .save(&mut self.store)
        {
            Ok(()) => {
                // 同步设置页面上的格式字段
                self.form.formats = self.format_modal.form;
                self.format_modal.close();
            }
            Err(e) => {
                tracing::error!(
                    "保存导出格式配置失败: {e}"
                );
                self.notice = Some(Notice::error(
                    "保存配置失败，请重试",
                ));
            }
        }
    }

    /// 触发返回回调
    fn trigger_back(&mut self) {
        self.back_deadline = None;
        if let Some(callback) = &mut self.on_back {
            callback();
        }
    }

    /// 推进延迟返回与提示过期
    fn tick(&mut self, ctx: &egui::Context) {
        if let Some(deadline) = self.back_deadline {
            if Instant::now() >= deadline {
                self.trigger_back();
            } else {
                ctx.request_repaint_after(
                    deadline.saturating_duration_since(
                        Instant::now(),
                    ),
                );
            }
        }

        if let Some(notice) = &self.notice {
            if notice.is_expired() {
                self.notice = None;
            } else {
                ctx.request_repaint_after(
                    Duration::from_millis(200),
                );
            }
        }
    }
}

impl<S: KvStore + 'static> eframe::App
    for SettingsApp<S>
{
    fn update(
        &mut self,
        ctx: &egui::Context,
        _frame: &mut eframe::Frame,
    ) {
        self.tick(ctx);

        // 顶部工具栏：导出格式弹窗入口
        egui::TopBottomPanel::top("toolbar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.strong("飞书导出工具");
                    ui.with_layout(
                        egui::Layout::right_to_left(
                            egui::Align::Center,
                        ),
                        |ui| {
                            if ui
                                .button("导出格式配置")
                                .clicked()
                            {
                                let config = self
                                    .store
                                    .load_export_format_config();
                                self.format_modal
                                    .open_with(&config);
                            }
                        },
                    );
                });
                ui.add_space(4.0);
            });

        // 底部提示横幅
        if let Some(notice) = self.notice.clone() {
            egui::TopBottomPanel::bottom("notice_panel")
                .resizable(false)
                .show(ctx, |ui| {
                    ui.add_space(4.0);
                    notice.show(ui);
                    ui.add_space(4.0);
                });
        }

        // 主内容区域：设置页面
        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        render_settings_page(
                            ui,
                            &mut self.form,
                            &self.field_errors,
                            self.on_back.is_some(),
                        )
                    })
                    .inner
            })
            .inner;

        match action {
            UserAction::Save => self.save_settings(),
            UserAction::Reset => {
                self.form.reset_defaults();
                self.field_errors =
                    ConnectionFieldErrors::default();
            }
            UserAction::Back => self.trigger_back(),
            UserAction::None => {}
        }

        // 导出格式弹窗
        match self.format_modal.show(ctx) {
            ModalAction::Save => self.save_format_config(),
            ModalAction::Cancel => {
                self.format_modal.close()
            }
            ModalAction::None => {}
        }
    }
}

/// 启动设置界面应用程序
pub fn run_gui() -> Result<()> {
    let store = LocalKvStore::new(APP_NAME)?;
    let app = SettingsApp::new(ConfigStore::new(store));

    let viewport_builder =
        egui::ViewportBuilder::default()
            .with_inner_size([520.0, 680.0])
            .with_min_inner_size([460.0, 560.0])
            .with_resizable(true)
            .with_title("飞书导出设置");

    let options = eframe::NativeOptions {
        viewport: viewport_builder,
        hardware_acceleration:
            eframe::HardwareAcceleration::Preferred,
        ..Default::default()
    };

    eframe::run_native(
        "feishu-export-settings",
        options,
        Box::new(move |cc| {
            // 配置跨平台的中文字体支持
            loader::setup_fonts(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| SettingsError::gui(e.to_string()))
}
