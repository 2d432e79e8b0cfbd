//! 核心功能：存档查找、凭据、路径猜测与游戏启动

pub mod credentials;
pub mod launcher;
pub mod paths;
pub mod saves;
pub mod services;
