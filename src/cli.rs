use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Factorio 快速启动器
#[derive(Parser, Debug)]
#[command(name = "factorio-quicklaunch")]
#[command(about = "Launch Factorio, continue the latest save or connect to a saved server")]
#[command(version)]
pub struct Args {
    /// 指定配置文件（默认 ~/.config/factorio_launcher/config.json）
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// 子命令，不指定时启动 GUI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 直接启动游戏
    Launch,

    /// 继续最新存档
    Continue,

    /// 启动并连接到已保存的服务器
    Connect {
        /// 服务器名称
        name: String,
    },

    /// 显示最新存档
    LatestSave,

    /// 查看或修改路径设置
    Settings {
        /// 游戏可执行文件
        #[arg(long, value_name = "PATH")]
        executable: Option<String>,

        /// 存档目录
        #[arg(long, value_name = "DIR")]
        saves_dir: Option<String>,
    },

    /// 管理服务器
    #[command(subcommand)]
    Servers(ServerCommands),
}

/// 服务器管理子命令
#[derive(Subcommand, Debug)]
pub enum ServerCommands {
    /// 列出服务器
    List,

    /// 添加服务器
    Add(ServerFields),

    /// 编辑服务器
    Edit {
        /// 要编辑的服务器名称
        target: String,

        #[command(flatten)]
        fields: ServerEditFields,
    },

    /// 删除服务器及其密码
    Remove {
        /// 服务器名称
        name: String,
    },
}

/// 添加服务器的参数
#[derive(ClapArgs, Debug)]
pub struct ServerFields {
    /// 名称
    #[arg(long)]
    pub name: String,

    /// 主机
    #[arg(long)]
    pub host: String,

    /// 端口
    #[arg(long, default_value_t = 34197, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: u16,

    /// 用户名
    #[arg(long, default_value = "")]
    pub user: String,

    /// 密码（保存在系统钥匙串中）
    #[arg(long, default_value = "")]
    pub password: String,
}

/// 编辑服务器的参数，未给出的字段保持不变
#[derive(ClapArgs, Debug)]
pub struct ServerEditFields {
    /// 新名称
    #[arg(long)]
    pub name: Option<String>,

    /// 主机
    #[arg(long)]
    pub host: Option<String>,

    /// 端口
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// 用户名
    #[arg(long)]
    pub user: Option<String>,

    /// 新密码
    #[arg(long)]
    pub password: Option<String>,
}
