//! 自定义小部件模块

pub mod notice;

pub use notice::{Notice, NoticeKind};
