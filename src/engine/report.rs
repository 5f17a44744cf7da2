// ==========================================
// 印刷车间管理 - 生产报表引擎
// ==========================================
// 职责: 工单进度、待完成工单、工序产出汇总、生产明细报表
// 输入: DataStore (只读)
// 输出: 报表结构 (即时计算,不缓存)
// ==========================================

use crate::domain::{EnrichedJob, EnrichedTransaction, Job, RecordId, TransactionType};
use crate::repository::{DataStore, DetailJoiner};
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use tracing::instrument;

// ==========================================
// 工单进度
// ==========================================

/// 工单当前所处工序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum ProgressStage {
    /// 尚无任何生产记录
    Pending,
    /// 已推进到的最后一道工序
    Reached(TransactionType),
}

impl fmt::Display for ProgressStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressStage::Pending => write!(f, "Pending"),
            ProgressStage::Reached(t) => write!(f, "{}", t),
        }
    }
}

impl From<ProgressStage> for String {
    fn from(value: ProgressStage) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobProgress {
    pub job_id: RecordId,
    pub job_no: String,
    pub customer_name: String,
    pub item_name: String,
    pub qty: u32,
    pub due_date: NaiveDate,
    pub stage: ProgressStage,
    /// 0 - 100
    pub progress_pct: u32,
}

/// 工单进度过滤条件（均为可选）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobProgressFilter {
    /// 工单号子串（不区分大小写）
    pub job_no: Option<String>,
    pub min_progress: Option<u32>,
    pub max_progress: Option<u32>,
}

impl JobProgressFilter {
    fn matches(&self, row: &JobProgress) -> bool {
        if let Some(needle) = self.job_no.as_deref() {
            if !row.job_no.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }
        if self.min_progress.map_or(false, |min| row.progress_pct < min) {
            return false;
        }
        if self.max_progress.map_or(false, |max| row.progress_pct > max) {
            return false;
        }
        true
    }
}

// ==========================================
// 工序产出汇总
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessOutput {
    pub process: TransactionType,
    pub transaction_count: usize,
    pub total_input: f64,
    pub total_output: f64,
    pub total_waste: f64,
    /// 产出 / 投入 × 100; 投入为 0 时为 0
    pub yield_pct: f64,
    /// 损耗 / 投入 × 100; 投入为 0 时为 0
    pub waste_pct: f64,
    /// 该工序的生产记录,日期倒序
    pub transactions: Vec<EnrichedTransaction>,
}

// ==========================================
// 工单明细
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    pub job: EnrichedJob,
    pub job_no: String,
    /// 日期正序
    pub transactions: Vec<EnrichedTransaction>,
}

// ==========================================
// 生产看板: 以最新数据所在月份为参考
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub output_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineWaste {
    pub machine_name: String,
    pub waste: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionDashboard {
    /// 最新生产记录日期; 无记录时为调用方给出的当天
    pub reference_date: NaiveDate,
    /// 参考月份首日
    pub month_start: NaiveDate,
    pub total_output: f64,
    pub total_waste: f64,
    /// 损耗 / 产出 × 100; 产出为 0 时为 0
    pub waste_ratio_pct: f64,
    /// 参考月份内有分切记录的工单数
    pub completed_jobs: usize,
    /// 截至参考日期的最近 7 天产出（含无记录的日期）
    pub trend: Vec<TrendPoint>,
    /// 参考月份内按损耗降序的机台（最多 10 个）
    pub machine_waste: Vec<MachineWaste>,
}

/// 看板机台排行数量上限
pub const DASHBOARD_TOP_MACHINES: usize = 10;
/// 看板趋势天数
pub const DASHBOARD_TREND_DAYS: i64 = 7;

// ==========================================
// 生产明细报表: 工序 → 机台 → 日期
// ==========================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionTotals {
    pub output_weight: f64,
    pub waste: f64,
    pub minutes: i64,
    /// 损耗 / 产出 × 100; 产出为 0 时为 0
    pub wastage_pct: f64,
}

impl ProductionTotals {
    fn add_row(&mut self, row: &ProductionRow) {
        let t = &row.detail.transaction;
        self.output_weight += t.output_weight;
        self.waste += t.waste;
        self.minutes += t.duration_minutes();
    }

    fn add(&mut self, other: &ProductionTotals) {
        self.output_weight += other.output_weight;
        self.waste += other.waste;
        self.minutes += other.minutes;
    }

    fn finish(mut self) -> Self {
        self.wastage_pct = percent(self.waste, self.output_weight);
        self
    }
}

/// 明细行: 生产记录 + 产品名称 + 单行损耗率
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionRow {
    #[serde(flatten)]
    pub detail: EnrichedTransaction,
    pub product_name: String,
    /// 损耗 / 产出 × 100; 产出为 0 时为 0
    pub wastage_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateNode {
    pub date: NaiveDate,
    pub rows: Vec<ProductionRow>,
    pub totals: ProductionTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineNode {
    pub machine_name: String,
    pub dates: Vec<DateNode>,
    pub totals: ProductionTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessNode {
    pub process: TransactionType,
    pub machines: Vec<MachineNode>,
    pub totals: ProductionTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionReport {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub job_no: Option<String>,
    pub processes: Vec<ProcessNode>,
}

fn percent(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

// ==========================================
// ReportEngine - 报表引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ReportEngine {
    joiner: DetailJoiner,
}

impl ReportEngine {
    pub fn new(joiner: DetailJoiner) -> Self {
        Self { joiner }
    }

    /// 计算单个工单的进度
    ///
    /// 工序优先级: Slitting > Laminating > Rewinding > Printing,
    /// 取已有生产记录的最后一道工序;
    /// 产量 = 该工序记录的 producedQty 之和（缺失时取 outputWeight）
    pub fn job_stage(&self, store: &DataStore, job: &Job) -> (ProgressStage, u32) {
        let reached = store
            .transactions_for_job(job.id)
            .map(|t| t.trans_type)
            .max();

        let Some(stage) = reached else {
            return (ProgressStage::Pending, 0);
        };

        let produced: f64 = store
            .transactions_for_job(job.id)
            .filter(|t| t.trans_type == stage)
            .map(|t| t.produced_qty.map_or(t.output_weight, f64::from))
            .sum();
        let target = if job.qty == 0 { 1.0 } else { f64::from(job.qty) };
        let progress = (produced / target * 100.0).floor().clamp(0.0, 100.0) as u32;

        (ProgressStage::Reached(stage), progress)
    }

    /// 工单进度报表（保持工单表顺序）
    #[instrument(skip(self, store))]
    pub fn job_progress_report(
        &self,
        store: &DataStore,
        filter: &JobProgressFilter,
    ) -> Vec<JobProgress> {
        self.joiner
            .jobs_with_details(store)
            .into_iter()
            .map(|enriched| {
                let (stage, progress_pct) = self.job_stage(store, &enriched.job);
                JobProgress {
                    job_id: enriched.job.id,
                    job_no: self.joiner.labels().job_no(enriched.job.id),
                    customer_name: enriched.customer_name,
                    item_name: enriched.item_name,
                    qty: enriched.job.qty,
                    due_date: enriched.job.due_date,
                    stage,
                    progress_pct,
                }
            })
            .filter(|row| filter.matches(row))
            .collect()
    }

    /// 待完成工单: 进度 < 100
    pub fn pending_orders(&self, store: &DataStore) -> Vec<JobProgress> {
        let filter = JobProgressFilter {
            max_progress: Some(99),
            ..JobProgressFilter::default()
        };
        self.job_progress_report(store, &filter)
    }

    /// 单一工序的产出汇总,附该工序全部生产记录（日期倒序）
    #[instrument(skip(self, store))]
    pub fn process_output(&self, store: &DataStore, process: TransactionType) -> ProcessOutput {
        let mut transactions = self
            .joiner
            .transactions_with_details(store, Some(process.as_str()));
        transactions.sort_by(|a, b| b.transaction.date.cmp(&a.transaction.date));

        let total_input: f64 = transactions.iter().map(|r| r.transaction.input_weight).sum();
        let total_output: f64 = transactions.iter().map(|r| r.transaction.output_weight).sum();
        let total_waste: f64 = transactions.iter().map(|r| r.transaction.waste).sum();

        ProcessOutput {
            process,
            transaction_count: transactions.len(),
            total_input,
            total_output,
            total_waste,
            yield_pct: percent(total_output, total_input),
            waste_pct: percent(total_waste, total_input),
            transactions,
        }
    }

    /// 单个工单及其生产记录（日期正序）
    ///
    /// # 返回
    /// - None: 工单不存在
    pub fn job_detail(&self, store: &DataStore, job_id: RecordId) -> Option<JobDetail> {
        let job = self
            .joiner
            .jobs_with_details(store)
            .into_iter()
            .find(|j| j.job.id == job_id)?;

        let mut transactions: Vec<EnrichedTransaction> = self
            .joiner
            .transactions_with_details(store, None)
            .into_iter()
            .filter(|t| t.transaction.job_id == job_id)
            .collect();
        transactions.sort_by_key(|t| t.transaction.date);

        Some(JobDetail {
            job_no: self.joiner.labels().job_no(job_id),
            job,
            transactions,
        })
    }

    /// 生产看板
    ///
    /// 参考日期取最新生产记录的日期,无记录时取 today
    #[instrument(skip(self, store))]
    pub fn dashboard(&self, store: &DataStore, today: NaiveDate) -> ProductionDashboard {
        let reference_date = store
            .transactions()
            .iter()
            .map(|t| t.date)
            .max()
            .unwrap_or(today);
        let month_start = reference_date
            .with_day(1)
            .unwrap_or(reference_date);

        let month_rows: Vec<EnrichedTransaction> = self
            .joiner
            .transactions_with_details(store, None)
            .into_iter()
            .filter(|r| r.transaction.date >= month_start && r.transaction.date <= reference_date)
            .collect();

        let total_output: f64 = month_rows.iter().map(|r| r.transaction.output_weight).sum();
        let total_waste: f64 = month_rows.iter().map(|r| r.transaction.waste).sum();

        let completed_jobs = month_rows
            .iter()
            .filter(|r| r.transaction.trans_type == TransactionType::Slitting)
            .map(|r| r.transaction.job_id)
            .collect::<HashSet<_>>()
            .len();

        let trend = (0..DASHBOARD_TREND_DAYS)
            .rev()
            .map(|offset| {
                let date = reference_date - Duration::days(offset);
                let output_weight = store
                    .transactions()
                    .iter()
                    .filter(|t| t.date == date)
                    .map(|t| t.output_weight)
                    .sum();
                TrendPoint {
                    date,
                    output_weight,
                }
            })
            .collect();

        let mut by_machine: BTreeMap<String, f64> = BTreeMap::new();
        for row in &month_rows {
            *by_machine.entry(row.machine_name.clone()).or_default() += row.transaction.waste;
        }
        let mut machine_waste: Vec<MachineWaste> = by_machine
            .into_iter()
            .map(|(machine_name, waste)| MachineWaste {
                machine_name,
                waste,
            })
            .collect();
        // 同损耗按机台名称排序（BTreeMap 顺序 + 稳定排序）
        machine_waste.sort_by(|a, b| b.waste.total_cmp(&a.waste));
        machine_waste.truncate(DASHBOARD_TOP_MACHINES);

        ProductionDashboard {
            reference_date,
            month_start,
            total_output,
            total_waste,
            waste_ratio_pct: percent(total_waste, total_output),
            completed_jobs,
            trend,
            machine_waste,
        }
    }

    /// 生产明细报表
    ///
    /// # 参数
    /// - from / to: 日期范围（含两端）
    /// - processes: 工序集合; 为空时不产生任何分组
    /// - job_no: 工单号子串（不区分大小写）; None 表示不过滤
    #[instrument(skip(self, store))]
    pub fn production_report(
        &self,
        store: &DataStore,
        from: NaiveDate,
        to: NaiveDate,
        processes: &[TransactionType],
        job_no: Option<&str>,
    ) -> ProductionReport {
        let needle = job_no.map(str::to_lowercase).filter(|n| !n.is_empty());

        let mut rows: Vec<ProductionRow> = self
            .joiner
            .transactions_with_details(store, None)
            .into_iter()
            .filter(|r| {
                let t = &r.transaction;
                t.date >= from && t.date <= to && processes.contains(&t.trans_type)
            })
            .filter(|r| {
                needle
                    .as_deref()
                    .map_or(true, |n| r.job_no.to_lowercase().contains(n))
            })
            .map(|detail| self.production_row(store, detail))
            .collect();

        rows.sort_by(|a, b| {
            let (a, b) = (&a.detail, &b.detail);
            a.transaction
                .trans_type
                .cmp(&b.transaction.trans_type)
                .then_with(|| a.machine_name.cmp(&b.machine_name))
                .then_with(|| a.transaction.date.cmp(&b.transaction.date))
        });

        // 排序后同组记录相邻,逐行追加到末尾分组即可
        let mut nodes: Vec<ProcessNode> = Vec::new();
        for row in rows {
            let process = row.detail.transaction.trans_type;
            if nodes.last().map(|p| p.process) != Some(process) {
                nodes.push(ProcessNode {
                    process,
                    machines: Vec::new(),
                    totals: ProductionTotals::default(),
                });
            }
            let Some(process_node) = nodes.last_mut() else {
                continue;
            };

            if process_node.machines.last().map(|m| m.machine_name.as_str())
                != Some(row.detail.machine_name.as_str())
            {
                process_node.machines.push(MachineNode {
                    machine_name: row.detail.machine_name.clone(),
                    dates: Vec::new(),
                    totals: ProductionTotals::default(),
                });
            }
            let Some(machine_node) = process_node.machines.last_mut() else {
                continue;
            };

            if machine_node.dates.last().map(|d| d.date) != Some(row.detail.transaction.date) {
                machine_node.dates.push(DateNode {
                    date: row.detail.transaction.date,
                    rows: Vec::new(),
                    totals: ProductionTotals::default(),
                });
            }
            if let Some(date_node) = machine_node.dates.last_mut() {
                date_node.totals.add_row(&row);
                date_node.rows.push(row);
            }
        }

        // 自底向上汇总
        for process_node in &mut nodes {
            let mut process_totals = ProductionTotals::default();
            for machine_node in &mut process_node.machines {
                let mut machine_totals = ProductionTotals::default();
                for date_node in &mut machine_node.dates {
                    date_node.totals = std::mem::take(&mut date_node.totals).finish();
                    machine_totals.add(&date_node.totals);
                }
                machine_node.totals = machine_totals.finish();
                process_totals.add(&machine_node.totals);
            }
            process_node.totals = process_totals.finish();
        }

        ProductionReport {
            from,
            to,
            job_no: job_no.map(str::to_string),
            processes: nodes,
        }
    }

    /// 产品名称: 工单 → 产品; 无法解析时取兜底文案
    fn production_row(&self, store: &DataStore, detail: EnrichedTransaction) -> ProductionRow {
        let product_name = store
            .find_job(detail.transaction.job_id)
            .and_then(|job| store.find_item(job.item_id))
            .map(|item| item.name.clone())
            .unwrap_or_else(|| self.joiner.labels().unknown.clone());
        let wastage_pct = percent(detail.transaction.waste, detail.transaction.output_weight);

        ProductionRow {
            detail,
            product_name,
            wastage_pct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> DataStore {
        DataStore::seeded().unwrap()
    }

    #[test]
    fn test_job_stage_已完成分切() {
        let store = store();
        let engine = ReportEngine::default();
        let job = store.find_job(RecordId(101)).unwrap();

        let (stage, progress) = engine.job_stage(&store, job);
        assert_eq!(stage, ProgressStage::Reached(TransactionType::Slitting));
        assert_eq!(progress, 100);
    }

    #[test]
    fn test_job_stage_按产出重量() {
        let store = store();
        let engine = ReportEngine::default();
        let job = store.find_job(RecordId(102)).unwrap();

        // (860 + 575) / 10000 → 14%
        let (stage, progress) = engine.job_stage(&store, job);
        assert_eq!(stage, ProgressStage::Reached(TransactionType::Printing));
        assert_eq!(progress, 14);
    }

    #[test]
    fn test_job_stage_无生产记录() {
        let store = store();
        let engine = ReportEngine::default();
        let job = store.find_job(RecordId(103)).unwrap();

        assert_eq!(engine.job_stage(&store, job), (ProgressStage::Pending, 0));
    }

    #[test]
    fn test_progress_stage_序列化() {
        let value = serde_json::to_value(ProgressStage::Reached(TransactionType::Laminating)).unwrap();
        assert_eq!(value, "Laminating");
        assert_eq!(serde_json::to_value(ProgressStage::Pending).unwrap(), "Pending");
    }

    #[test]
    fn test_job_detail_日期正序() {
        let store = store();
        let detail = ReportEngine::default().job_detail(&store, RecordId(101)).unwrap();

        assert_eq!(detail.job_no, "JO-101");
        assert_eq!(detail.job.customer_name, "Acme Corp");
        let ids: Vec<i64> = detail.transactions.iter().map(|t| t.transaction.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 4, 6]);
        assert!(ReportEngine::default().job_detail(&store, RecordId(999)).is_none());
    }

    #[test]
    fn test_percent_零分母() {
        assert_eq!(percent(5.0, 0.0), 0.0);
        assert_eq!(percent(5.0, 50.0), 10.0);
    }
}
