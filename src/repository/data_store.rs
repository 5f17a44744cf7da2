// ==========================================
// 印刷车间管理 - 内存数据仓储
// ==========================================
// 职责: 持有全部实体表,提供按表名/按ID的只读访问
// 红线: 只读; 不插入、不修改、不删除
// 红线: 查询类操作从不报错 (未知表 → 空列表, 未找到 → None)
// ==========================================

use crate::domain::{
    Area, Category, Customer, EnrichedJob, EnrichedTransaction, IntoRecordId, Item, Job, Machine,
    Operator, Record, RecordId, TableName, Transaction,
};
use crate::repository::details::DetailJoiner;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::seed::{seed_tables, SeedTables};
use crate::repository::source::RecordSource;
use serde::Serialize;
use std::collections::HashSet;

// ==========================================
// DanglingReference - 无法解析的外键
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    pub table: TableName,
    pub record_id: RecordId,
    pub field: &'static str,
    pub target: TableName,
    pub target_id: RecordId,
}

// ==========================================
// DataStore - 内存数据仓储
// ==========================================
/// 实体表集合
///
/// 每个应用/页面生命周期构建一次,以引用方式传给需要的组件
#[derive(Debug, Clone)]
pub struct DataStore {
    areas: Vec<Area>,
    customers: Vec<Customer>,
    categories: Vec<Category>,
    items: Vec<Item>,
    machines: Vec<Machine>,
    operators: Vec<Operator>,
    jobs: Vec<Job>,
    transactions: Vec<Transaction>,
}

fn ensure_unique_ids(
    table: TableName,
    ids: impl Iterator<Item = RecordId>,
) -> RepositoryResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(RepositoryError::DuplicateId {
                table: table.to_string(),
                id: id.value(),
            });
        }
    }
    Ok(())
}

impl DataStore {
    /// 由原始数据构建仓储
    ///
    /// # 返回
    /// - Err(DuplicateId): 某张表内存在重复主键
    pub fn new(tables: SeedTables) -> RepositoryResult<Self> {
        ensure_unique_ids(TableName::Areas, tables.areas.iter().map(|r| r.id))?;
        ensure_unique_ids(TableName::Customers, tables.customers.iter().map(|r| r.id))?;
        ensure_unique_ids(TableName::Categories, tables.categories.iter().map(|r| r.id))?;
        ensure_unique_ids(TableName::Items, tables.items.iter().map(|r| r.id))?;
        ensure_unique_ids(TableName::Machines, tables.machines.iter().map(|r| r.id))?;
        ensure_unique_ids(TableName::Operators, tables.operators.iter().map(|r| r.id))?;
        ensure_unique_ids(TableName::Jobs, tables.jobs.iter().map(|r| r.id))?;
        ensure_unique_ids(TableName::Transactions, tables.transactions.iter().map(|r| r.id))?;

        let store = Self {
            areas: tables.areas,
            customers: tables.customers,
            categories: tables.categories,
            items: tables.items,
            machines: tables.machines,
            operators: tables.operators,
            jobs: tables.jobs,
            transactions: tables.transactions,
        };

        for dangling in store.dangling_references() {
            tracing::warn!(
                "外键无法解析: {}#{}.{} → {}#{}",
                dangling.table,
                dangling.record_id,
                dangling.field,
                dangling.target,
                dangling.target_id
            );
        }

        Ok(store)
    }

    /// 使用内置种子数据构建仓储
    pub fn seeded() -> RepositoryResult<Self> {
        Self::new(seed_tables()?)
    }

    // ==========================================
    // 按表名访问
    // ==========================================

    /// 按已知表名返回全部记录
    pub fn list(&self, table: TableName) -> Vec<Record> {
        match table {
            TableName::Areas => self.areas.iter().cloned().map(Record::Area).collect(),
            TableName::Customers => self.customers.iter().cloned().map(Record::Customer).collect(),
            TableName::Categories => self.categories.iter().cloned().map(Record::Category).collect(),
            TableName::Items => self.items.iter().cloned().map(Record::Item).collect(),
            TableName::Machines => self.machines.iter().cloned().map(Record::Machine).collect(),
            TableName::Operators => self.operators.iter().cloned().map(Record::Operator).collect(),
            TableName::Jobs => self.jobs.iter().cloned().map(Record::Job).collect(),
            TableName::Transactions => self
                .transactions
                .iter()
                .cloned()
                .map(Record::Transaction)
                .collect(),
        }
    }

    /// 按表名返回全部记录; 未知表名返回空列表
    pub fn list_table(&self, table: &str) -> Vec<Record> {
        match TableName::parse(table) {
            Some(t) => self.list(t),
            None => {
                tracing::debug!("未知表名: {:?}", table);
                Vec::new()
            }
        }
    }

    /// 按ID查找记录
    ///
    /// # 参数
    /// - table: 表名
    /// - id: 数字或字符串形式的ID,比较前先规范化
    ///
    /// # 返回
    /// - Some(Record): 找到
    /// - None: 未知表、ID无法规范化或记录不存在
    pub fn get_by_id<I: IntoRecordId>(&self, table: &str, id: I) -> Option<Record> {
        let Some(id) = id.into_record_id() else {
            tracing::debug!("无法解析的记录ID: table={}", table);
            return None;
        };
        let table = TableName::parse(table)?;

        // 线性扫描
        match table {
            TableName::Areas => self.find_area(id).cloned().map(Record::Area),
            TableName::Customers => self.find_customer(id).cloned().map(Record::Customer),
            TableName::Categories => self.find_category(id).cloned().map(Record::Category),
            TableName::Items => self.find_item(id).cloned().map(Record::Item),
            TableName::Machines => self.find_machine(id).cloned().map(Record::Machine),
            TableName::Operators => self.find_operator(id).cloned().map(Record::Operator),
            TableName::Jobs => self.find_job(id).cloned().map(Record::Job),
            TableName::Transactions => self.find_transaction(id).cloned().map(Record::Transaction),
        }
    }

    // ==========================================
    // 关联查询 (使用默认兜底文案)
    // ==========================================

    /// 工单 + 客户名称 + 物料名称
    pub fn jobs_with_details(&self) -> Vec<EnrichedJob> {
        DetailJoiner::default().jobs_with_details(self)
    }

    /// 生产记录 + 工单号 + 机台名称 + 操作员名称; 可按工序类型过滤
    pub fn transactions_with_details(&self, type_filter: Option<&str>) -> Vec<EnrichedTransaction> {
        DetailJoiner::default().transactions_with_details(self, type_filter)
    }

    // ==========================================
    // 类型化访问
    // ==========================================

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn find_area(&self, id: RecordId) -> Option<&Area> {
        self.areas.iter().find(|r| r.id == id)
    }

    pub fn find_customer(&self, id: RecordId) -> Option<&Customer> {
        self.customers.iter().find(|r| r.id == id)
    }

    pub fn find_category(&self, id: RecordId) -> Option<&Category> {
        self.categories.iter().find(|r| r.id == id)
    }

    pub fn find_item(&self, id: RecordId) -> Option<&Item> {
        self.items.iter().find(|r| r.id == id)
    }

    pub fn find_machine(&self, id: RecordId) -> Option<&Machine> {
        self.machines.iter().find(|r| r.id == id)
    }

    pub fn find_operator(&self, id: RecordId) -> Option<&Operator> {
        self.operators.iter().find(|r| r.id == id)
    }

    pub fn find_job(&self, id: RecordId) -> Option<&Job> {
        self.jobs.iter().find(|r| r.id == id)
    }

    pub fn find_transaction(&self, id: RecordId) -> Option<&Transaction> {
        self.transactions.iter().find(|r| r.id == id)
    }

    /// 某工单的全部生产记录（保持原顺序）
    pub fn transactions_for_job(&self, job_id: RecordId) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(move |t| t.job_id == job_id)
    }

    // ==========================================
    // 数据完整性
    // ==========================================

    /// 列出所有无法解析的外键
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut result = Vec::new();
        let mut check = |table: TableName,
                         record_id: RecordId,
                         field: &'static str,
                         target: TableName,
                         target_id: RecordId,
                         resolved: bool| {
            if !resolved {
                result.push(DanglingReference {
                    table,
                    record_id,
                    field,
                    target,
                    target_id,
                });
            }
        };

        for c in &self.customers {
            check(
                TableName::Customers,
                c.id,
                "areaId",
                TableName::Areas,
                c.area_id,
                self.find_area(c.area_id).is_some(),
            );
        }
        for i in &self.items {
            check(
                TableName::Items,
                i.id,
                "categoryId",
                TableName::Categories,
                i.category_id,
                self.find_category(i.category_id).is_some(),
            );
        }
        for m in &self.machines {
            check(
                TableName::Machines,
                m.id,
                "areaId",
                TableName::Areas,
                m.area_id,
                self.find_area(m.area_id).is_some(),
            );
        }
        for j in &self.jobs {
            check(
                TableName::Jobs,
                j.id,
                "customerId",
                TableName::Customers,
                j.customer_id,
                self.find_customer(j.customer_id).is_some(),
            );
            check(
                TableName::Jobs,
                j.id,
                "itemId",
                TableName::Items,
                j.item_id,
                self.find_item(j.item_id).is_some(),
            );
        }
        for t in &self.transactions {
            check(
                TableName::Transactions,
                t.id,
                "jobId",
                TableName::Jobs,
                t.job_id,
                self.find_job(t.job_id).is_some(),
            );
            check(
                TableName::Transactions,
                t.id,
                "machineId",
                TableName::Machines,
                t.machine_id,
                self.find_machine(t.machine_id).is_some(),
            );
            check(
                TableName::Transactions,
                t.id,
                "operatorId",
                TableName::Operators,
                t.operator_id,
                self.find_operator(t.operator_id).is_some(),
            );
        }

        result
    }
}

impl RecordSource for DataStore {
    fn list_table(&self, table: &str) -> Vec<Record> {
        DataStore::list_table(self, table)
    }

    fn find_record(&self, table: &str, id: RecordId) -> Option<Record> {
        self.get_by_id(table, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> DataStore {
        DataStore::seeded().unwrap()
    }

    #[test]
    fn test_seeded_无悬空外键() {
        assert!(store().dangling_references().is_empty());
    }

    #[test]
    fn test_list_table_保持插入顺序() {
        let ids: Vec<i64> = store()
            .list_table("customers")
            .iter()
            .map(|r| r.id().value())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_list_table_未知表名() {
        let store = store();
        assert!(store.list_table("suppliers").is_empty());
        assert!(store.list_table("").is_empty());
        assert!(store.list_table("Customers").is_empty());
    }

    #[test]
    fn test_get_by_id_数字与字符串() {
        let store = store();
        let by_num = store.get_by_id("customers", 1).unwrap();
        let by_str = store.get_by_id("customers", "1").unwrap();
        assert_eq!(by_num, by_str);
        assert_eq!(by_num.name(), Some("Acme Corp"));
    }

    #[test]
    fn test_get_by_id_未找到() {
        let store = store();
        assert!(store.get_by_id("jobs", 999).is_none());
        assert!(store.get_by_id("jobs", "abc").is_none());
        assert!(store.get_by_id("suppliers", 1).is_none());
    }

    #[test]
    fn test_new_主键重复() {
        let mut tables = seed_tables().unwrap();
        let duplicate = tables.areas[0].clone();
        tables.areas.push(duplicate);

        let err = DataStore::new(tables).unwrap_err();
        assert_eq!(
            err,
            RepositoryError::DuplicateId {
                table: "areas".to_string(),
                id: 1
            }
        );
    }

    #[test]
    fn test_dangling_references_报告() {
        let mut tables = seed_tables().unwrap();
        tables.jobs[0].customer_id = RecordId(42);

        let store = DataStore::new(tables).unwrap();
        let dangling = store.dangling_references();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].table, TableName::Jobs);
        assert_eq!(dangling[0].field, "customerId");
        assert_eq!(dangling[0].target_id, RecordId(42));
    }

    #[test]
    fn test_record_source_按id查找() {
        let store = store();
        let source: &dyn RecordSource = &store;
        let record = source.find_record("machines", RecordId(3)).unwrap();
        assert_eq!(record.name(), Some("Comexi"));
    }
}
