// ==========================================
// 印刷车间管理 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 查询类操作不报错 (未找到 = None / 空列表),
//       错误仅出现在构建数据集时 (主键重复、种子数据非法)
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("主键重复: table={table}, id={id}")]
    DuplicateId { table: String, id: i64 },

    #[error("种子数据非法: {field}={value}")]
    InvalidSeed { field: String, value: String },
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
