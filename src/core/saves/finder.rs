//! 最新存档查找
//!
//! 只扫描目录的直接子项，按扩展名过滤后取修改时间最新的文件。

use path_absolutize::Absolutize;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// 视为存档的扩展名（不区分大小写）
pub const SAVE_EXTENSIONS: &[&str] =
    &["zip", "save", "dat", "autosave", "quicksave"];

/// 找到的存档文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFile {
    /// 绝对路径
    pub path: PathBuf,
    /// 修改时间
    pub modified: SystemTime,
}

impl SaveFile {
    /// 文件名（用于显示）
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// 判断文件扩展名是否属于存档
pub fn is_save_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SAVE_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// 查找最新存档的路径
pub fn find_latest_save(directory: impl AsRef<Path>) -> Option<PathBuf> {
    find_latest_save_file(directory).map(|save| save.path)
}

/// 查找最新存档
///
/// 目录为空、不存在或不是目录时返回 `None`。
/// 修改时间相同时取文件名字典序最小的一个。
pub fn find_latest_save_file(
    directory: impl AsRef<Path>,
) -> Option<SaveFile> {
    let directory = directory.as_ref();
    if directory.as_os_str().is_empty() || !directory.is_dir() {
        return None;
    }

    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(
                "Unable to read saves directory {:?}: {}",
                directory,
                e
            );
            return None;
        }
    };

    let mut latest: Option<(SystemTime, PathBuf)> = None;

    for entry in entries.flatten() {
        let path = entry.path();
        if !is_save_file(&path) {
            continue;
        }

        // fs::metadata 会跟随符号链接
        let modified = match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => match meta.modified() {
                Ok(time) => time,
                Err(_) => continue,
            },
            _ => continue,
        };

        let newer = match &latest {
            None => true,
            Some((best_time, best_path)) => {
                match modified.cmp(best_time) {
                    Ordering::Greater => true,
                    Ordering::Equal => {
                        path.file_name() < best_path.file_name()
                    }
                    Ordering::Less => false,
                }
            }
        };

        if newer {
            latest = Some((modified, path));
        }
    }

    let (modified, path) = latest?;
    let path = match path.absolutize() {
        Ok(abs) => abs.into_owned(),
        Err(_) => path,
    };

    tracing::debug!("Latest save: {:?}", path);
    Some(SaveFile { path, modified })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_save_file() {
        assert!(is_save_file(Path::new("world.zip")));
        assert!(is_save_file(Path::new("_autosave1.ZIP")));
        assert!(is_save_file(Path::new("quick.QuickSave")));
        assert!(!is_save_file(Path::new("notes.txt")));
        assert!(!is_save_file(Path::new("zip")));
        assert!(!is_save_file(Path::new(".autosave")));
    }

    #[test]
    fn test_empty_directory_argument() {
        assert_eq!(find_latest_save(""), None);
    }
}
