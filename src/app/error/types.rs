use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum LauncherError {
    /// 文件系统错误
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 配置错误
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// 游戏可执行文件或存档不存在
    #[error("Path not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    /// 存档目录中没有可用的存档
    #[error("No save found in {}", directory.display())]
    NoSaveFound { directory: PathBuf },

    /// 凭据存储错误
    #[error("Credential store error: {0}")]
    Credential(String),

    /// 启动游戏进程失败
    #[error("Launch failed: {message}")]
    LaunchFailed { message: String },

    /// 验证错误
    #[error("Validation failed: {field} - {message}")]
    Validation { field: String, message: String },

    /// GUI 相关错误
    #[error("GUI error: {0}")]
    Gui(String),
}

impl From<anyhow::Error> for LauncherError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(io_error) =
            err.downcast_ref::<std::io::Error>()
        {
            return LauncherError::Io(std::io::Error::new(
                io_error.kind(),
                err.to_string(),
            ));
        }
        LauncherError::config(err.to_string())
    }
}

impl LauncherError {
    /// 创建配置错误
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// 创建路径不存在错误
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    /// 创建启动失败错误
    pub fn launch_failed(message: impl Into<String>) -> Self {
        Self::LaunchFailed {
            message: message.into(),
        }
    }

    /// 创建验证错误
    pub fn validation(
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 用于对话框标题的简短分类
    pub fn title(&self) -> &'static str {
        match self {
            Self::PathNotFound { .. } => "Error",
            Self::NoSaveFound { .. } => "Continue",
            Self::LaunchFailed { .. } => "Launch Failed",
            Self::Validation { .. } => "Invalid Input",
            Self::Credential(_) => "Credentials",
            Self::Io(_) | Self::Config { .. } => "Configuration",
            Self::Gui(_) => "GUI",
        }
    }
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, LauncherError>;
pub type AppError = LauncherError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anyhow_io_error_keeps_kind() {
        let err = anyhow::Error::from(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "denied",
        ))
        .context("writing config");
        match LauncherError::from(err) {
            LauncherError::Io(io_error) => assert_eq!(
                io_error.kind(),
                io::ErrorKind::PermissionDenied
            ),
            other => panic!("Expected Io variant, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_anyhow_error_becomes_config() {
        let err = anyhow::anyhow!("bad value");
        assert!(matches!(
            LauncherError::from(err),
            LauncherError::Config { .. }
        ));
    }

    #[test]
    fn test_path_not_found_message() {
        let err = LauncherError::path_not_found("/nowhere/factorio");
        assert_eq!(err.to_string(), "Path not found: /nowhere/factorio");
        assert_eq!(err.title(), "Error");
    }
}
