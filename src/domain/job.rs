// ==========================================
// 印刷车间管理 - 工单领域模型
// ==========================================
// 关联: Job → Customer, Job → Item; Job 1:N Transaction
// ==========================================

use crate::domain::types::{JobPriority, JobStatus, RecordId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Job - 生产工单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: RecordId,
    pub customer_id: RecordId, // → Customer.id
    pub item_id: RecordId,     // → Item.id
    pub qty: u32,
    pub status: JobStatus,
    pub order_date: NaiveDate,
    pub due_date: NaiveDate,
    pub priority: JobPriority,
}

// ==========================================
// EnrichedJob - 附带客户/物料名称的工单
// ==========================================
// 原工单字段原样保留,名称字段为追加
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedJob {
    #[serde(flatten)]
    pub job: Job,
    pub customer_name: String,
    pub item_name: String,
}
