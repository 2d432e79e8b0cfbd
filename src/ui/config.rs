//! GUI状态定义
//!
//! 对话框的草稿数据，确认前不会影响配置。

use crate::app::config::types::{LauncherConfig, ServerForm};

/// 设置对话框草稿
#[derive(Debug, Clone, Default)]
pub struct SettingsDraft {
    pub executable_path: String,
    pub saves_directory: String,
}

impl SettingsDraft {
    /// 从当前配置复制
    pub fn from_config(config: &LauncherConfig) -> Self {
        Self {
            executable_path: config.executable_path.clone(),
            saves_directory: config.saves_directory.clone(),
        }
    }
}

/// 服务器对话框的用途
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerDialogMode {
    Add,
    Edit(usize),
}

/// 服务器对话框草稿
#[derive(Debug, Clone)]
pub struct ServerDraft {
    pub mode: ServerDialogMode,
    pub form: ServerForm,
}

/// 对话框结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Open,
    Accepted,
    Cancelled,
}

/// 需要用户确认的提示
#[derive(Debug, Clone)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    /// 创建提示
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}
