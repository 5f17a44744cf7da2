// ==========================================
// 印刷车间管理 - 应用层
// ==========================================
// 职责: 宿主集成 (页面启动、控制台、Tauri 命令)
// ==========================================

pub mod console;
pub mod host;
pub mod state;
pub mod tauri_commands;

// 重导出
pub use console::{ConsoleOutcome, ConsoleSession};
pub use host::{
    bootstrap, mount_layout, BootstrapReport, LayoutError, PageElement, PageHost, StaticPage,
    MAIN_CONTENT_ID,
};
pub use state::AppState;

#[cfg(feature = "tauri-app")]
pub use tauri_commands::*;
