//! 游戏启动
//!
//! 三种启动方式都是一次性动作：检查路径、构建参数、创建进程。

use std::path::Path;

use super::command::LaunchCommand;
use super::spawner::{DetachedSpawner, ProcessSpawner};
use crate::app::config::types::ServerEntry;
use crate::app::error::types::{LauncherError, Result};
use crate::core::saves::find_latest_save;

/// 游戏启动器
#[derive(Debug, Default, Clone)]
pub struct Launcher<S = DetachedSpawner> {
    spawner: S,
}

impl Launcher<DetachedSpawner> {
    /// 使用分离进程启动
    pub fn detached() -> Self {
        Self {
            spawner: DetachedSpawner,
        }
    }
}

impl<S: ProcessSpawner> Launcher<S> {
    /// 使用自定义的进程创建方式
    pub fn with_spawner(spawner: S) -> Self {
        Self { spawner }
    }

    /// 内部的进程创建器
    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// 直接启动游戏
    pub fn launch_normal(
        &self,
        executable: impl AsRef<Path>,
    ) -> Result<LaunchCommand> {
        let executable = require_executable(executable.as_ref())?;
        self.spawn(LaunchCommand::normal(executable))
    }

    /// 载入最新存档
    pub fn continue_latest(
        &self,
        executable: impl AsRef<Path>,
        saves_directory: impl AsRef<Path>,
    ) -> Result<LaunchCommand> {
        let saves_directory = saves_directory.as_ref();
        let save_file = find_latest_save(saves_directory).ok_or_else(
            || LauncherError::NoSaveFound {
                directory: saves_directory.to_path_buf(),
            },
        )?;
        let executable = require_executable(executable.as_ref())?;
        self.spawn(LaunchCommand::resume(executable, &save_file))
    }

    /// 启动并连接到服务器
    pub fn connect(
        &self,
        executable: impl AsRef<Path>,
        server: &ServerEntry,
        secret: Option<&str>,
    ) -> Result<LaunchCommand> {
        let executable = require_executable(executable.as_ref())?;
        self.spawn(LaunchCommand::connect(executable, server, secret))
    }

    fn spawn(&self, command: LaunchCommand) -> Result<LaunchCommand> {
        self.spawner.spawn(&command).map_err(|e| {
            tracing::error!(
                "Failed to launch {}: {}",
                command.program.display(),
                e
            );
            LauncherError::launch_failed(e.to_string())
        })?;
        Ok(command)
    }
}

fn require_executable(executable: &Path) -> Result<&Path> {
    if executable.as_os_str().is_empty() || !executable.is_file() {
        return Err(LauncherError::path_not_found(executable));
    }
    Ok(executable)
}
