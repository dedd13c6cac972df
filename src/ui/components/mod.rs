//! GUI组件模块 - 包含各种UI组件的实现

pub mod connection_fields;
pub mod export_format_modal;
pub mod format_fields;
pub mod settings_page;

// 重新导出主要组件
pub use connection_fields::render_connection_fields;
pub use export_format_modal::{
    ExportFormatModal, ModalAction,
};
pub use format_fields::render_format_fields;
pub use settings_page::{render_settings_page, UserAction};
