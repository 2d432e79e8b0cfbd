//! 游戏进程启动

pub mod command;
pub mod invoker;
pub mod spawner;

pub use command::LaunchCommand;
pub use invoker::Launcher;
pub use spawner::{DetachedSpawner, ProcessSpawner};
