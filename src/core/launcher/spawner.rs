//! 进程创建

use std::io;
use std::process::{Command, Stdio};

use super::command::LaunchCommand;

/// 创建游戏进程
pub trait ProcessSpawner {
    /// 创建进程后立即返回，不等待
    fn spawn(&self, command: &LaunchCommand) -> io::Result<()>;
}

/// 分离启动：不等待、不跟踪子进程，也不建立管道
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedSpawner;

impl ProcessSpawner for DetachedSpawner {
    fn spawn(&self, command: &LaunchCommand) -> io::Result<()> {
        let child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .spawn()?;
        tracing::info!(
            "Spawned {} (pid {})",
            command.redacted(),
            child.id()
        );
        // 不回收子进程：游戏退出后在 Unix 上保留为僵尸进程，直到启动器退出
        drop(child);
        Ok(())
    }
}
