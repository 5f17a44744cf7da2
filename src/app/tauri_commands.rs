// ==========================================
// 印刷车间管理 - Tauri 命令（按域拆分）
// ==========================================
// 职责: Tauri 命令定义,连接前端与后端 API
// ==========================================

#![cfg(feature = "tauri-app")]

mod catalog;
mod common;
mod lookup;
mod report;

pub use catalog::*;
pub use lookup::*;
pub use report::*;
