//! 字体设置模块 - 处理跨平台中文字体支持

use egui::{FontDefinitions, FontFamily};

/// 各平台常见中文字体的候选路径，按优先级排列
#[cfg(target_os = "windows")]
fn font_candidates() -> &'static [&'static str] {
    &[
        "C:/Windows/Fonts/msyh.ttc",
        "C:/Windows/Fonts/simsun.ttc",
    ]
}

#[cfg(target_os = "macos")]
fn font_candidates() -> &'static [&'static str] {
    &[
        "/System/Library/Fonts/PingFang.ttc",
        "/System/Library/Fonts/STHeiti Light.ttc",
        "/System/Library/Fonts/Hiragino Sans GB.ttc",
    ]
}

#[cfg(not(any(
    target_os = "windows",
    target_os = "macos"
)))]
fn font_candidates() -> &'static [&'static str] {
    &[
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    ]
}

/// 设置跨平台的中文字体支持
///
/// 依次尝试候选系统字体，加载第一个可读的字体并
/// 置于比例字体族首位；全部失败时保留 egui 默认
/// 字体（中文会显示为方块）。
pub fn setup_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();

    for path in font_candidates() {
        let font_data = match std::fs::read(path) {
            Ok(data) => data,
            Err(_) => continue,
        };

        let font_name = "system_cjk".to_owned();
        fonts.font_data.insert(
            font_name.clone(),
            egui::FontData::from_owned(font_data),
        );

        if let Some(family) = fonts
            .families
            .get_mut(&FontFamily::Proportional)
        {
            family.insert(0, font_name.clone());
        }
        if let Some(family) =
            fonts.families.get_mut(&FontFamily::Monospace)
        {
            family.push(font_name);
        }

        tracing::debug!("已加载系统中文字体: {path}");
        ctx.set_fonts(fonts);
        return;
    }

    tracing::warn!(
        "未找到可用的系统中文字体，使用默认字体"
    );
}
