//! 配置类型定义
//!
//! 字段名与旧版启动器写出的 JSON 保持兼容（`factorio_path`、`saves_dir`）。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 启动器配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LauncherConfig {
    /// 游戏可执行文件路径
    #[serde(rename = "factorio_path")]
    pub executable_path: String,
    /// 存档目录
    #[serde(rename = "saves_dir")]
    pub saves_directory: String,
    /// 服务器列表（保持用户添加的顺序）
    pub servers: Vec<ServerEntry>,
    /// 未识别的顶层字段，原样写回
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 服务器条目
///
/// 密码不在这里，只保存在凭据存储中，以 `name` 为键。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerEntry {
    pub name: String,
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub user: String,
}

impl ServerEntry {
    /// `host:port` 形式的连接地址
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 添加/编辑服务器时的表单数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerForm {
    pub name: String,
    pub host: String,
    pub port: u16,
    pub user: String,
    /// 为空表示不修改已保存的密码
    pub password: String,
}

impl Default for ServerForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            host: String::new(),
            port: 34197,
            user: String::new(),
            password: String::new(),
        }
    }
}

impl ServerForm {
    /// 以现有条目预填表单，密码由调用方从凭据存储补上
    pub fn from_entry(
        entry: &ServerEntry,
        password: Option<String>,
    ) -> Self {
        Self {
            name: entry.name.clone(),
            host: entry.host.clone(),
            port: entry.port,
            user: entry.user.clone(),
            password: password.unwrap_or_default(),
        }
    }

    /// 去除首尾空白后的条目（密码不做处理）
    pub fn to_entry(&self) -> ServerEntry {
        ServerEntry {
            name: self.name.trim().to_string(),
            host: self.host.trim().to_string(),
            port: self.port,
            user: self.user.trim().to_string(),
        }
    }
}
