//! 配置管理模块
//! 负责加载和保存启动器配置

use anyhow::Context;
use std::fs;

use super::paths::ConfigPaths;
use super::types::LauncherConfig;
use crate::app::error::types::Result;

/// 配置管理器
///
/// 不持有配置本身：调用方持有当前的 [`LauncherConfig`]，
/// 每次修改后通过 [`ConfigManager::save`] 写回。
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_paths: ConfigPaths,
}

impl ConfigManager {
    /// 创建新的配置管理器
    pub fn new(config_paths: ConfigPaths) -> Self {
        Self { config_paths }
    }

    /// 使用默认的用户配置路径
    pub fn from_user_config_dir() -> Result<Self> {
        Ok(Self::new(ConfigPaths::new()?))
    }

    /// 配置路径
    pub fn paths(&self) -> &ConfigPaths {
        &self.config_paths
    }

    /// 加载配置文件
    ///
    /// 文件不存在时写入并返回默认配置；文件损坏时返回默认配置，
    /// 但不覆盖原文件。此方法不会返回错误。
    pub fn load(&self) -> LauncherConfig {
        let config_file = self.config_paths.config_file();

        if !config_file.exists() {
            tracing::info!(
                "Config file not found, creating default: {:?}",
                config_file
            );
            let config = LauncherConfig::default();
            if let Err(e) = self.save(&config) {
                tracing::warn!(
                    "Failed to write default config file: {}",
                    e
                );
            }
            return config;
        }

        match self.read(config_file) {
            Ok(config) => {
                tracing::info!(
                    "Config file loaded: {:?}",
                    config_file
                );
                config
            }
            Err(e) => {
                tracing::warn!(
                    "Config file unreadable, using defaults: {:#}",
                    e
                );
                LauncherConfig::default()
            }
        }
    }

    fn read(
        &self,
        config_file: &std::path::Path,
    ) -> anyhow::Result<LauncherConfig> {
        let content = fs::read_to_string(config_file)
            .with_context(|| {
                format!("Unable to read config file: {:?}", config_file)
            })?;

        serde_json::from_str(&content).with_context(|| {
            format!("Unable to parse config file: {:?}", config_file)
        })
    }

    /// 保存配置文件（整体覆盖）
    pub fn save(&self, config: &LauncherConfig) -> Result<()> {
        self.config_paths
            .ensure_config_dir_exists()
            .context("Unable to create config directory")?;

        let content = serde_json::to_string_pretty(config)
            .context("Unable to serialize config")?;

        let config_file = self.config_paths.config_file();
        fs::write(config_file, content).with_context(|| {
            format!("Unable to write config file: {:?}", config_file)
        })?;

        tracing::debug!("Config file saved: {:?}", config_file);
        Ok(())
    }
}
