use crate::app::state::AppState;

use super::common::{map_api_error, to_json};

// ==========================================
// 生产报表相关命令
// ==========================================

/// 工单进度（可按工单号、进度范围过滤）
#[tauri::command(rename_all = "snake_case")]
pub async fn get_job_progress(
    state: tauri::State<'_, AppState>,
    job_no: Option<String>,
    min_progress: Option<u32>,
    max_progress: Option<u32>,
) -> Result<String, String> {
    let rows = state
        .report_api
        .job_progress(job_no, min_progress, max_progress)
        .map_err(map_api_error)?;
    to_json(&rows)
}

#[tauri::command(rename_all = "snake_case")]
pub async fn get_pending_orders(state: tauri::State<'_, AppState>) -> Result<String, String> {
    to_json(&state.report_api.pending_orders())
}

#[tauri::command(rename_all = "snake_case")]
pub async fn get_process_output(
    state: tauri::State<'_, AppState>,
    process: String,
) -> Result<String, String> {
    let output = state
        .report_api
        .process_output(&process)
        .map_err(map_api_error)?;
    to_json(&output)
}

/// 生产明细报表
///
/// # 参数
/// - from / to: YYYY-MM-DD
/// - processes: 工序列表; 为空表示全部工序
/// - job_no: 工单号子串（可选）
#[tauri::command(rename_all = "snake_case")]
pub async fn get_production_report(
    state: tauri::State<'_, AppState>,
    from: String,
    to: String,
    processes: Option<Vec<String>>,
    job_no: Option<String>,
) -> Result<String, String> {
    let report = state
        .report_api
        .production_report(
            &from,
            &to,
            &processes.unwrap_or_default(),
            job_no.as_deref(),
        )
        .map_err(map_api_error)?;
    to_json(&report)
}

/// 工单明细（含按日期排序的生产记录）
#[tauri::command(rename_all = "snake_case")]
pub async fn get_job_detail(
    state: tauri::State<'_, AppState>,
    job_id: String,
) -> Result<String, String> {
    let detail = state
        .report_api
        .job_detail(&job_id)
        .map_err(map_api_error)?;
    to_json(&detail)
}

/// 生产看板
#[tauri::command(rename_all = "snake_case")]
pub async fn get_production_dashboard(
    state: tauri::State<'_, AppState>,
) -> Result<String, String> {
    to_json(&state.report_api.dashboard())
}
