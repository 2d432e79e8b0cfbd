//! 启动器服务
//!
//! 界面层触发的所有操作都经过这里。配置以显式值传入，
//! 修改后立即写回配置文件。

use crate::app::config::manager::ConfigManager;
use crate::app::config::types::{
    LauncherConfig, ServerEntry, ServerForm,
};
use crate::app::config::validator::ConfigValidator;
use crate::app::error::types::{AppError, Result};
use crate::core::credentials::{CredentialStore, SystemCredentialStore};
use crate::core::launcher::{
    DetachedSpawner, LaunchCommand, Launcher, ProcessSpawner,
};
use crate::core::paths::PathGuesser;
use crate::core::saves::find_latest_save_file;
use crate::utils::helpers::format_timestamp;

/// 启动器服务
pub struct LauncherService<
    C = SystemCredentialStore,
    S = DetachedSpawner,
> {
    pub config_manager: ConfigManager,
    credentials: C,
    launcher: Launcher<S>,
}

impl LauncherService {
    /// 使用系统钥匙串（不可用时退回进程内存储）与分离进程启动
    pub fn system(config_manager: ConfigManager) -> Self {
        Self::new(
            config_manager,
            SystemCredentialStore::detect(),
            Launcher::detached(),
        )
    }
}

impl<C: CredentialStore, S: ProcessSpawner> LauncherService<C, S> {
    /// 创建服务
    pub fn new(
        config_manager: ConfigManager,
        credentials: C,
        launcher: Launcher<S>,
    ) -> Self {
        Self {
            config_manager,
            credentials,
            launcher,
        }
    }

    /// 凭据存储
    pub fn credentials(&self) -> &C {
        &self.credentials
    }

    /// 启动时加载配置，并用猜测结果补全空路径
    pub fn bootstrap(&self, guesser: &PathGuesser) -> LauncherConfig {
        let mut config = self.config_manager.load();

        if config.executable_path.is_empty()
            || config.saves_directory.is_empty()
        {
            let guesses = guesser.guess();
            if config.executable_path.is_empty() {
                config.executable_path = guesses.executable_path;
            }
            if config.saves_directory.is_empty() {
                config.saves_directory = guesses.saves_directory;
            }
        }

        if let Err(e) = self.config_manager.save(&config) {
            tracing::warn!("Failed to save config file: {}", e);
        }
        config
    }

    /// 保存配置
    pub fn save(&self, config: &LauncherConfig) -> Result<()> {
        self.config_manager.save(config)
    }

    /// 更新可执行文件路径与存档目录
    pub fn update_settings(
        &self,
        config: &mut LauncherConfig,
        executable_path: &str,
        saves_directory: &str,
    ) -> Result<()> {
        config.executable_path = executable_path.trim().to_string();
        config.saves_directory = saves_directory.trim().to_string();
        self.save(config)?;
        tracing::info!("Settings saved");
        Ok(())
    }

    /// 以现有条目预填编辑表单（包括已保存的密码）
    pub fn server_form(
        &self,
        config: &LauncherConfig,
        index: usize,
    ) -> Option<ServerForm> {
        let entry = config.servers.get(index)?;
        Some(ServerForm::from_entry(
            entry,
            self.credentials.get(&entry.name),
        ))
    }

    /// 添加服务器
    pub fn add_server(
        &self,
        config: &mut LauncherConfig,
        form: &ServerForm,
    ) -> Result<()> {
        ConfigValidator::validate_server_form(form)?;
        let entry = form.to_entry();

        if !form.password.is_empty() {
            self.credentials.set(&entry.name, &form.password)?;
        }

        tracing::info!("Adding server {:?} ({})", entry.name, entry.address());
        config.servers.push(entry);
        self.save(config)
    }

    /// 编辑服务器
    ///
    /// 密码为空时保留原密码；改名时把原密码迁移到新名字下。
    /// 新名字已有密码时不迁移，避免覆盖其他同名服务器的密码；
    /// 旧名字仍被其他条目使用时不删除旧密码。
    pub fn edit_server(
        &self,
        config: &mut LauncherConfig,
        index: usize,
        form: &ServerForm,
    ) -> Result<()> {
        ConfigValidator::validate_server_form(form)?;
        let old_name = selected(config, index)?.name.clone();
        let entry = form.to_entry();
        let renamed = old_name != entry.name;

        if !form.password.is_empty() {
            self.credentials.set(&entry.name, &form.password)?;
        } else if renamed && self.credentials.get(&entry.name).is_none() {
            if let Some(secret) = self.credentials.get(&old_name) {
                self.credentials.set(&entry.name, &secret)?;
            }
        }

        tracing::info!("Updating server {:?}", entry.name);
        config.servers[index] = entry;
        self.save(config)?;

        if renamed && !name_in_use(config, &old_name) {
            self.forget_secret(&old_name);
        }
        Ok(())
    }

    /// 删除服务器及其密码
    ///
    /// 还有同名条目时保留密码。
    pub fn remove_server(
        &self,
        config: &mut LauncherConfig,
        index: usize,
    ) -> Result<ServerEntry> {
        selected(config, index)?;
        let removed = config.servers.remove(index);
        self.save(config)?;
        if !name_in_use(config, &removed.name) {
            self.forget_secret(&removed.name);
        }
        tracing::info!("Removed server {:?}", removed.name);
        Ok(removed)
    }

    fn forget_secret(&self, server_name: &str) {
        if let Err(e) = self.credentials.delete(server_name) {
            tracing::warn!(
                "Failed to delete credential for {:?}: {}",
                server_name,
                e
            );
        }
    }

    /// 直接启动游戏
    pub fn launch_normal(
        &self,
        config: &LauncherConfig,
    ) -> Result<LaunchCommand> {
        self.launcher.launch_normal(&config.executable_path)
    }

    /// 继续最新存档
    pub fn continue_latest(
        &self,
        config: &LauncherConfig,
    ) -> Result<LaunchCommand> {
        self.launcher.continue_latest(
            &config.executable_path,
            &config.saves_directory,
        )
    }

    /// 连接到第 `index` 个服务器
    pub fn connect_to_server(
        &self,
        config: &LauncherConfig,
        index: usize,
    ) -> Result<LaunchCommand> {
        let server = selected(config, index)?;
        let secret = self.credentials.get(&server.name);
        self.launcher.connect(
            &config.executable_path,
            server,
            secret.as_deref(),
        )
    }
}

fn selected(
    config: &LauncherConfig,
    index: usize,
) -> Result<&ServerEntry> {
    config.servers.get(index).ok_or_else(|| {
        AppError::validation("Server", "Select a server first")
    })
}

fn name_in_use(config: &LauncherConfig, name: &str) -> bool {
    config.servers.iter().any(|s| s.name == name)
}

/// 按名字查找服务器下标（同名时取第一个）
pub fn find_server(config: &LauncherConfig, name: &str) -> Option<usize> {
    config.servers.iter().position(|s| s.name == name)
}

/// 最新存档的描述文本
pub fn latest_save_summary(config: &LauncherConfig) -> String {
    match find_latest_save_file(&config.saves_directory) {
        Some(save) => format!(
            "Latest save: {} ({})",
            save.file_name(),
            format_timestamp(save.modified)
        ),
        None => "No saves found.".to_string(),
    }
}
