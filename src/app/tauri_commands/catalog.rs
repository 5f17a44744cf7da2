use crate::app::state::AppState;

use super::common::to_json;

// ==========================================
// 数据查询相关命令
// ==========================================

/// 列出全部数据表名
#[tauri::command(rename_all = "snake_case")]
pub async fn list_tables(state: tauri::State<'_, AppState>) -> Result<String, String> {
    to_json(&state.catalog_api.tables())
}

/// 按表名列出记录
#[tauri::command(rename_all = "snake_case")]
pub async fn list_table(
    state: tauri::State<'_, AppState>,
    table: String,
) -> Result<String, String> {
    to_json(&state.catalog_api.list_table(&table))
}

/// 按ID查询记录; 不存在时返回 "null"
#[tauri::command(rename_all = "snake_case")]
pub async fn get_record(
    state: tauri::State<'_, AppState>,
    table: String,
    id: serde_json::Value,
) -> Result<String, String> {
    to_json(&state.catalog_api.get_record(&table, &id))
}

#[tauri::command(rename_all = "snake_case")]
pub async fn get_jobs_with_details(state: tauri::State<'_, AppState>) -> Result<String, String> {
    to_json(&state.catalog_api.jobs_with_details())
}

#[tauri::command(rename_all = "snake_case")]
pub async fn get_transactions_with_details(
    state: tauri::State<'_, AppState>,
    type_filter: Option<String>,
) -> Result<String, String> {
    to_json(
        &state
            .catalog_api
            .transactions_with_details(type_filter.as_deref()),
    )
}
