use crate::app::state::AppState;
use crate::picker::TriggerDescriptor;

use super::common::{emit_frontend_event, map_api_error, to_json};

// ==========================================
// 查找选择器相关命令
// ==========================================

/// 注册页面上的选择器触发元素,返回句柄
#[tauri::command(rename_all = "snake_case")]
pub async fn register_lookup_trigger(
    state: tauri::State<'_, AppState>,
    table: String,
    target_id: String,
    target_name: String,
) -> Result<String, String> {
    let id = state
        .lookup_api
        .register(TriggerDescriptor::new(table, target_id, target_name))
        .map_err(map_api_error)?;
    Ok(id.to_string())
}

/// 注销触发元素（页面元素移除时调用）
#[tauri::command(rename_all = "snake_case")]
pub async fn unregister_lookup_trigger(
    state: tauri::State<'_, AppState>,
    trigger_id: String,
) -> Result<String, String> {
    let descriptor = state
        .lookup_api
        .unregister(&trigger_id)
        .map_err(map_api_error)?;
    to_json(&descriptor)
}

/// 激活触发元素（打开选择器）
#[tauri::command(rename_all = "snake_case")]
pub async fn activate_lookup(
    state: tauri::State<'_, AppState>,
    trigger_id: String,
) -> Result<String, String> {
    let view = state
        .lookup_api
        .activate(&trigger_id)
        .map_err(map_api_error)?;
    to_json(&view)
}

#[tauri::command(rename_all = "snake_case")]
pub async fn open_lookup(
    state: tauri::State<'_, AppState>,
    table: String,
    target_id: Option<String>,
    target_name: Option<String>,
) -> Result<String, String> {
    let view = state
        .lookup_api
        .open(
            &table,
            target_id.as_deref().unwrap_or(""),
            target_name.as_deref().unwrap_or(""),
        )
        .map_err(map_api_error)?;
    to_json(&view)
}

#[tauri::command(rename_all = "snake_case")]
pub async fn filter_lookup(
    state: tauri::State<'_, AppState>,
    query: String,
) -> Result<String, String> {
    let view = state.lookup_api.filter(&query).map_err(map_api_error)?;
    to_json(&view)
}

/// 选中记录; 成功时发送 lookup://selected 事件,载荷为字段写入清单
#[tauri::command(rename_all = "snake_case")]
pub async fn select_lookup(
    app: tauri::AppHandle,
    state: tauri::State<'_, AppState>,
    record_id: String,
) -> Result<String, String> {
    let selection = state
        .lookup_api
        .select(&record_id)
        .map_err(map_api_error)?;

    if let Some(outcome) = &selection.outcome {
        emit_frontend_event(
            &app,
            "lookup://selected",
            serde_json::json!({
                "recordId": outcome.record_id,
                "writes": selection.writes,
            }),
        );
    }

    to_json(&selection)
}

#[tauri::command(rename_all = "snake_case")]
pub async fn close_lookup(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let view = state.lookup_api.close().map_err(map_api_error)?;
    to_json(&view)
}
