//! 配置路径管理模块
//! 负责定位用户配置目录下的配置文件

use crate::app::error::types::{LauncherError, Result};
use std::path::{Path, PathBuf};

/// 配置目录名
pub const CONFIG_DIR_NAME: &str = "factorio_launcher";
/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "config.json";

/// 配置路径管理器
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    config_file: PathBuf,
}

impl ConfigPaths {
    /// 使用用户配置目录（Linux 下为 `~/.config`）创建路径管理器
    ///
    /// # 示例
    /// ```no_run
    /// use factorio_quicklaunch::app::config::paths::ConfigPaths;
    /// let paths = ConfigPaths::new().unwrap();
    /// assert!(paths.config_file().ends_with("factorio_launcher/config.json"));
    /// ```
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            LauncherError::config(
                "Unable to determine the user configuration directory",
            )
        })?;

        let config_file =
            config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        tracing::debug!("Using config file path: {:?}", config_file);

        Ok(Self { config_file })
    }

    /// 使用指定的配置文件路径
    pub fn with_file(config_file: impl Into<PathBuf>) -> Self {
        Self {
            config_file: config_file.into(),
        }
    }

    /// 获取配置文件路径
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// 确保配置文件所在目录存在
    pub fn ensure_config_dir_exists(&self) -> std::io::Result<()> {
        match self.config_file.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                std::fs::create_dir_all(dir)
            }
            _ => Ok(()),
        }
    }
}
