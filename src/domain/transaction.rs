// ==========================================
// 印刷车间管理 - 生产记录领域模型
// ==========================================
// 关联: Transaction → Job / Machine / Operator
// 约定: waste = inputWeight - outputWeight 仅为报表口径,本层不校验
// ==========================================

use crate::domain::types::{RecordId, TransactionType};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

// ==========================================
// Transaction - 工序生产记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: RecordId,
    pub job_id: RecordId, // → Job.id
    #[serde(rename = "type")]
    pub trans_type: TransactionType,
    pub date: NaiveDate,
    pub machine_id: RecordId,  // → Machine.id
    pub operator_id: RecordId, // → Operator.id

    // ===== 重量 (kg) =====
    pub input_weight: f64,
    pub output_weight: f64,
    pub waste: f64,

    // ===== 时间段 =====
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,

    // ===== 分切专用 =====
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slit_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub produced_qty: Option<u32>,
}

impl Transaction {
    /// 生产时长（分钟）; 跨零点的班次按次日结束计算
    pub fn duration_minutes(&self) -> i64 {
        let minutes = (self.end_time - self.start_time).num_minutes();
        if minutes < 0 {
            minutes + 24 * 60
        } else {
            minutes
        }
    }
}

// ==========================================
// EnrichedTransaction - 附带工单号/机台/操作员名称的记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedTransaction {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub job_no: String,
    pub machine_name: String,
    pub operator_name: String,
}
