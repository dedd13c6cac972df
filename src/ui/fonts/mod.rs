//! 字体模块

pub mod loader;
