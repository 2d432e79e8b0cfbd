//! UI模块 - 用户界面相关功能

pub mod app;
pub mod components;
pub mod config;
pub mod widgets;

use crate::app::error::types::Result;
use crate::core::services::LauncherService;

/// 启动 GUI 应用程序
pub fn run_gui(service: LauncherService) -> Result<()> {
    app::run_gui(service)
}
