// Windows GUI应用程序配置，隐藏控制台窗口
#![cfg_attr(
    not(debug_assertions),
    windows_subsystem = "windows"
)]

use anyhow::Context;
use feishu_export::app::logging;
use feishu_export::ui;

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::setup::init_logging();

    // 启动设置界面
    ui::run_gui().context("设置界面运行失败")?;

    Ok(())
}
