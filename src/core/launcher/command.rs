//! 游戏命令行参数构建

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::app::config::types::ServerEntry;

/// 载入存档参数
pub const ARG_LOAD_GAME: &str = "--load-game";
/// 连接服务器参数
pub const ARG_MP_CONNECT: &str = "--mp-connect";
/// 服务器密码参数
pub const ARG_PASSWORD: &str = "--password";

/// 待启动的命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl LaunchCommand {
    /// 不带参数直接启动
    pub fn normal(executable: impl Into<PathBuf>) -> Self {
        Self {
            program: executable.into(),
            args: Vec::new(),
        }
    }

    /// 载入指定存档
    pub fn resume(
        executable: impl Into<PathBuf>,
        save_file: &Path,
    ) -> Self {
        Self {
            program: executable.into(),
            args: vec![
                ARG_LOAD_GAME.into(),
                save_file.as_os_str().to_os_string(),
            ],
        }
    }

    /// 连接服务器，密码为空时不附加 `--password`
    pub fn connect(
        executable: impl Into<PathBuf>,
        server: &ServerEntry,
        secret: Option<&str>,
    ) -> Self {
        let mut args: Vec<OsString> =
            vec![ARG_MP_CONNECT.into(), server.address().into()];
        if let Some(secret) = secret.filter(|s| !s.is_empty()) {
            args.push(ARG_PASSWORD.into());
            args.push(secret.into());
        }
        Self {
            program: executable.into(),
            args,
        }
    }

    /// 用于日志的命令描述，不包含密码
    pub fn redacted(&self) -> String {
        let mut parts = vec![self.program.to_string_lossy().into_owned()];
        let mut hide_next = false;
        for arg in &self.args {
            if hide_next {
                parts.push("******".to_string());
                hide_next = false;
                continue;
            }
            hide_next = arg == ARG_PASSWORD;
            parts.push(arg.to_string_lossy().into_owned());
        }
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacted_hides_password() {
        let server = ServerEntry {
            name: "s".to_string(),
            host: "h".to_string(),
            port: 1,
            user: String::new(),
        };
        let cmd = LaunchCommand::connect("/bin/f", &server, Some("hunter2"));
        assert_eq!(
            cmd.redacted(),
            "/bin/f --mp-connect h:1 --password ******"
        );
    }
}
