// ==========================================
// 印刷车间管理 - 领域模型层
// ==========================================
// 职责: 定义实体、类型、通用记录
// 红线: 不含数据访问逻辑,不含报表逻辑
// ==========================================

pub mod job;
pub mod master;
pub mod record;
pub mod transaction;
pub mod types;

// 重导出核心类型
pub use job::{EnrichedJob, Job};
pub use master::{Area, Category, Customer, Item, Machine, Operator};
pub use record::Record;
pub use transaction::{EnrichedTransaction, Transaction};
pub use types::{IntoRecordId, JobPriority, JobStatus, RecordId, TableName, TransactionType};
