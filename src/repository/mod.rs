// ==========================================
// 印刷车间管理 - 数据访问层
// ==========================================
// 职责: 实体表的只读访问、外键关联查询
// 红线: 查询不报错,未找到以 None / 空列表 / 兜底文案表达
// ==========================================

pub mod data_store;
pub mod details;
pub mod error;
pub mod seed;
pub mod source;

// 重导出核心仓储
pub use data_store::{DanglingReference, DataStore};
pub use details::DetailJoiner;
pub use error::{RepositoryError, RepositoryResult};
pub use seed::{seed_tables, SeedTables};
pub use source::RecordSource;
