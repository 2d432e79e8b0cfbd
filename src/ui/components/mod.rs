//! GUI组件模块 - 包含各种UI组件的实现

pub mod app_renderer;
pub mod path_selector;
pub mod server_dialog;
pub mod server_table;
pub mod settings_dialog;

// 重新导出主要组件
pub use app_renderer::{AppRenderer, UserAction};
pub use path_selector::{PathKind, PathSelector};
pub use server_dialog::render_server_dialog;
pub use server_table::render_server_table;
pub use settings_dialog::render_settings_dialog;
