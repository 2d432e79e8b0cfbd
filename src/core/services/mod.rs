//! 业务服务

pub mod launcher_service;

pub use launcher_service::{
    find_server, latest_save_summary, LauncherService,
};
