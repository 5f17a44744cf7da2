// ==========================================
// 印刷车间管理 - 生产报表 API
// ==========================================
// 职责: 报表参数解析与校验,调用 ReportEngine
// ==========================================

use std::sync::Arc;

use chrono::NaiveDate;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::{IntoRecordId, TransactionType};
use crate::engine::{
    JobDetail, JobProgress, JobProgressFilter, ProcessOutput, ProductionDashboard,
    ProductionReport, ReportEngine,
};
use crate::repository::DataStore;

/// 解析工序名称（不区分大小写,接受 "printing" / "Printing"）
pub fn parse_process(value: &str) -> ApiResult<TransactionType> {
    let trimmed = value.trim();
    TransactionType::ALL
        .into_iter()
        .find(|t| t.as_str().eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| ApiError::InvalidInput(format!("未知工序类型: {}", value)))
}

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(value: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| ApiError::InvalidInput(format!("日期格式错误（应为YYYY-MM-DD）: {}", e)))
}

// ==========================================
// ReportApi - 生产报表 API
// ==========================================
pub struct ReportApi {
    store: Arc<DataStore>,
    engine: ReportEngine,
}

impl ReportApi {
    pub fn new(store: Arc<DataStore>, engine: ReportEngine) -> Self {
        Self { store, engine }
    }

    /// 工单进度
    ///
    /// # 参数
    /// - job_no: 工单号子串（可选）
    /// - min_progress / max_progress: 进度范围 0-100（可选）
    pub fn job_progress(
        &self,
        job_no: Option<String>,
        min_progress: Option<u32>,
        max_progress: Option<u32>,
    ) -> ApiResult<Vec<JobProgress>> {
        for bound in [min_progress, max_progress].into_iter().flatten() {
            if bound > 100 {
                return Err(ApiError::InvalidInput(format!(
                    "进度范围应为0-100: {}",
                    bound
                )));
            }
        }
        if let (Some(min), Some(max)) = (min_progress, max_progress) {
            if min > max {
                return Err(ApiError::InvalidInput(format!(
                    "进度下限({})不能大于上限({})",
                    min, max
                )));
            }
        }

        let filter = JobProgressFilter {
            job_no: job_no.filter(|s| !s.trim().is_empty()),
            min_progress,
            max_progress,
        };
        Ok(self.engine.job_progress_report(&self.store, &filter))
    }

    pub fn pending_orders(&self) -> Vec<JobProgress> {
        self.engine.pending_orders(&self.store)
    }

    pub fn process_output(&self, process: &str) -> ApiResult<ProcessOutput> {
        let process = parse_process(process)?;
        Ok(self.engine.process_output(&self.store, process))
    }

    /// 生产明细报表
    ///
    /// # 参数
    /// - from / to: YYYY-MM-DD
    /// - processes: 工序名称列表; 为空表示全部工序
    /// - job_no: 工单号子串（可选,不区分大小写）
    pub fn production_report(
        &self,
        from: &str,
        to: &str,
        processes: &[String],
        job_no: Option<&str>,
    ) -> ApiResult<ProductionReport> {
        let from = parse_date(from)?;
        let to = parse_date(to)?;
        if from > to {
            return Err(ApiError::InvalidInput(format!(
                "开始日期({})不能晚于结束日期({})",
                from, to
            )));
        }

        let processes: Vec<TransactionType> = if processes.is_empty() {
            TransactionType::ALL.to_vec()
        } else {
            processes
                .iter()
                .map(|p| parse_process(p))
                .collect::<ApiResult<_>>()?
        };

        Ok(self.engine.production_report(
            &self.store,
            from,
            to,
            &processes,
            job_no.map(str::trim),
        ))
    }

    /// 工单明细
    ///
    /// # 参数
    /// - job_id: 工单ID（数字字符串）
    pub fn job_detail(&self, job_id: &str) -> ApiResult<JobDetail> {
        let id = job_id
            .into_record_id()
            .ok_or_else(|| ApiError::InvalidInput(format!("工单ID格式错误: {}", job_id)))?;

        self.engine
            .job_detail(&self.store, id)
            .ok_or_else(|| ApiError::NotFound(format!("工单(id={})不存在", id)))
    }

    /// 生产看板（参考日期缺省为本地当天）
    pub fn dashboard(&self) -> ProductionDashboard {
        self.engine
            .dashboard(&self.store, chrono::Local::now().date_naive())
    }
}
