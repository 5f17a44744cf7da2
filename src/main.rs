// ==========================================
// 印刷车间管理 - 主入口
// ==========================================
// 默认: 控制台会话 (stdin 逐行命令)
// tauri-app 特性: Tauri 桌面应用
// ==========================================

// 禁止控制台窗口 (Windows)
#![cfg_attr(
    all(feature = "tauri-app", not(debug_assertions)),
    windows_subsystem = "windows"
)]

use printy_shop::app::AppState;
use printy_shop::{i18n, logging};

/// 加载配置并创建AppState
fn load_state() -> anyhow::Result<AppState> {
    tracing::info!("==================================================");
    tracing::info!("{} - 印刷车间管理", printy_shop::APP_NAME);
    tracing::info!("系统版本: {}", printy_shop::VERSION);
    tracing::info!("==================================================");

    let state = AppState::load_default()?;
    i18n::set_locale(&state.config.locale);
    Ok(state)
}

#[cfg(feature = "tauri-app")]
fn main() -> anyhow::Result<()> {
    use printy_shop::app::tauri_commands::*;

    logging::init();
    let app_state = load_state()?;

    tracing::info!("启动Tauri应用...");
    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // ==========================================
            // 数据查询相关命令
            // ==========================================
            list_tables,
            list_table,
            get_record,
            get_jobs_with_details,
            get_transactions_with_details,
            // ==========================================
            // 查找选择器相关命令
            // ==========================================
            register_lookup_trigger,
            unregister_lookup_trigger,
            activate_lookup,
            open_lookup,
            filter_lookup,
            select_lookup,
            close_lookup,
            // ==========================================
            // 生产报表相关命令
            // ==========================================
            get_job_progress,
            get_pending_orders,
            get_process_output,
            get_production_report,
            get_job_detail,
            get_production_dashboard,
        ])
        .run(tauri::generate_context!())?;

    tracing::info!("Tauri应用已退出");
    Ok(())
}

#[cfg(not(feature = "tauri-app"))]
fn main() -> anyhow::Result<()> {
    use printy_shop::app::{ConsoleOutcome, ConsoleSession};
    use std::io::{BufRead, Write};

    logging::init();
    let app_state = load_state()?;
    let mut session = ConsoleSession::new(&app_state);

    println!("{} v{} (输入 help 查看命令)", printy_shop::APP_NAME, printy_shop::VERSION);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match session.execute(&line) {
            ConsoleOutcome::Continue(text) if text.is_empty() => {}
            ConsoleOutcome::Continue(text) => println!("{}", text),
            ConsoleOutcome::Quit => break,
        }
    }

    Ok(())
}
