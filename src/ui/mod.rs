//! UI模块 - 用户界面相关功能

pub mod app;
pub mod components;
pub mod fonts;
pub mod forms;
pub mod widgets;

use crate::app::error::types::Result;

/// 启动设置界面应用程序
pub fn run_gui() -> Result<()> {
    app::run_gui()
}
