//! 日志系统设置

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 初始化日志系统
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            // 默认日志级别：debug模式下显示debug信息，release模式下显示info信息
            if cfg!(debug_assertions) {
                EnvFilter::new("factorio_quicklaunch=debug,warn")
            } else {
                EnvFilter::new("factorio_quicklaunch=info,warn")
            }
        });

    // 日志写到 stderr，避免与 CLI 的标准输出混在一起
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .init();
}
