// ==========================================
// 印刷车间管理 - 主数据查询 API
// ==========================================
// 职责: 按表名列表/按ID查询、工单与生产记录关联查询
// 说明: 未找到以 None / 空列表返回,不转为错误
// ==========================================

use std::sync::Arc;

use crate::domain::{EnrichedJob, EnrichedTransaction, IntoRecordId, Record, TableName};
use crate::repository::{DataStore, DetailJoiner};

// ==========================================
// CatalogApi - 主数据查询 API
// ==========================================
pub struct CatalogApi {
    store: Arc<DataStore>,
    joiner: DetailJoiner,
}

impl CatalogApi {
    pub fn new(store: Arc<DataStore>, joiner: DetailJoiner) -> Self {
        Self { store, joiner }
    }

    /// 已知表名列表
    pub fn tables(&self) -> Vec<&'static str> {
        TableName::ALL.iter().map(|t| t.as_str()).collect()
    }

    /// 按表名列出全部记录; 未知表名返回空列表
    pub fn list_table(&self, table: &str) -> Vec<Record> {
        self.store.list_table(table)
    }

    /// 按ID查询记录（ID可为数字或字符串）
    pub fn get_record<I: IntoRecordId>(&self, table: &str, id: I) -> Option<Record> {
        self.store.get_by_id(table, id)
    }

    /// 工单关联查询（兜底文案取自配置）
    pub fn jobs_with_details(&self) -> Vec<EnrichedJob> {
        self.joiner.jobs_with_details(&self.store)
    }

    /// 生产记录关联查询
    ///
    /// # 参数
    /// - type_filter: 工序类型,精确匹配; None 表示全部
    pub fn transactions_with_details(&self, type_filter: Option<&str>) -> Vec<EnrichedTransaction> {
        self.joiner.transactions_with_details(&self.store, type_filter)
    }
}
