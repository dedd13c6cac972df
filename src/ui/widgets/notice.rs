//! 消息提示组件
//!
//! 保存成功或失败后的临时横幅提示，数秒后自动消失。

use std::time::{Duration, Instant};

use eframe::egui;

/// 提示自动消失时间
const NOTICE_TTL: Duration = Duration::from_secs(3);

/// 提示类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// 成功提示
    Success,
    /// 错误提示
    Error,
}

/// 临时消息提示
#[derive(Debug, Clone)]
pub struct Notice {
    kind: NoticeKind,
    text: String,
    created: Instant,
}

impl Notice {
    /// 创建成功提示
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
            created: Instant::now(),
        }
    }

    /// 创建错误提示
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
            created: Instant::now(),
        }
    }

    /// 提示是否已过期
    pub fn is_expired(&self) -> bool {
        self.created.elapsed() >= NOTICE_TTL
    }

    /// 渲染提示横幅
    pub fn show(&self, ui: &mut egui::Ui) {
        let (icon, color) = match self.kind {
            NoticeKind::Success => (
                "✔",
                egui::Color32::from_rgb(0x52, 0xc4, 0x1a),
            ),
            NoticeKind::Error => {
                ("✖", ui.visuals().error_fg_color)
            }
        };

        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::symmetric(
                10.0, 6.0,
            ))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(color, icon);
                    ui.colored_label(color, &self.text);
                });
            });
    }
}
