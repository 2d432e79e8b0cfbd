//! 安装路径与存档目录猜测

use std::path::{Path, PathBuf};

/// 猜测结果
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathGuesses {
    /// 可执行文件路径，未找到时为空
    pub executable_path: String,
    /// 存档目录，未找到时为回退路径
    pub saves_directory: String,
}

/// 路径猜测器
#[derive(Debug, Clone)]
pub struct PathGuesser {
    executable_candidates: Vec<PathBuf>,
    saves_candidates: Vec<PathBuf>,
    saves_fallback: PathBuf,
}

impl PathGuesser {
    /// 使用自定义候选列表
    pub fn new(
        executable_candidates: Vec<PathBuf>,
        saves_candidates: Vec<PathBuf>,
        saves_fallback: PathBuf,
    ) -> Self {
        Self {
            executable_candidates,
            saves_candidates,
            saves_fallback,
        }
    }

    /// 以给定主目录构建默认候选列表
    pub fn for_home(home: &Path) -> Self {
        Self::new(
            vec![
                PathBuf::from("/usr/bin/factorio"),
                PathBuf::from("/usr/local/bin/factorio"),
                home.join(".local/share/Steam/steamapps/common/Factorio/bin/x64/factorio"),
                home.join(".factorio/bin/x64/factorio"),
            ],
            vec![
                home.join(".factorio/saves"),
                home.join(".local/share/Factorio/saves"),
            ],
            home.join(".factorio/saves"),
        )
    }

    /// 使用当前用户的主目录
    pub fn from_user_home() -> Self {
        let home = dirs::home_dir().unwrap_or_default();
        Self::for_home(&home)
    }

    /// 依次探测候选路径
    pub fn guess(&self) -> PathGuesses {
        let executable_path = self
            .executable_candidates
            .iter()
            .find(|c| is_executable_file(c))
            .map(|c| c.to_string_lossy().into_owned())
            .unwrap_or_default();

        let saves_directory = self
            .saves_candidates
            .iter()
            .find(|c| c.is_dir())
            .unwrap_or(&self.saves_fallback)
            .to_string_lossy()
            .into_owned();

        tracing::debug!(
            "Guessed executable {:?}, saves {:?}",
            executable_path,
            saves_directory
        );

        PathGuesses {
            executable_path,
            saves_directory,
        }
    }
}

/// 是否为可执行的普通文件
///
/// 任一执行位（属主、属组或其他）置位即视为可执行，
/// 不检查当前用户是否真有执行权限。
#[cfg(unix)]
pub fn is_executable_file(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// 是否为可执行的普通文件
#[cfg(not(unix))]
pub fn is_executable_file(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_candidates_use_home() {
        let guesser = PathGuesser::for_home(Path::new("/home/u"));
        assert_eq!(guesser.executable_candidates.len(), 4);
        assert_eq!(
            guesser.saves_fallback,
            PathBuf::from("/home/u/.factorio/saves")
        );
    }
}
