//! Factorio 快速启动器库
//!
//! ## 功能特性
//!
//! - 直接启动游戏
//! - 继续最近修改的本地存档
//! - 管理多人服务器，密码保存在系统钥匙串中
//! - 启动并直接连接到选中的服务器
//!
//! ## 使用示例
//!
//! ```no_run
//! use factorio_quicklaunch::app::config::manager::ConfigManager;
//! use factorio_quicklaunch::core::paths::PathGuesser;
//! use factorio_quicklaunch::core::services::LauncherService;
//!
//! let service = LauncherService::system(ConfigManager::from_user_config_dir()?);
//! let config = service.bootstrap(&PathGuesser::from_user_home());
//! service.continue_latest(&config)?;
//! # Ok::<(), factorio_quicklaunch::LauncherError>(())
//! ```

pub mod app;
pub mod core;
pub mod ui;
pub mod utils;

// 重新导出主要功能
pub use app::config::types::{LauncherConfig, ServerEntry, ServerForm};
pub use app::error::types::{LauncherError, Result};
pub use core::saves::{find_latest_save, SaveFile};
