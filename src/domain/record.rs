// ==========================================
// 印刷车间管理 - 通用记录
// ==========================================
// 职责: 以统一形态承载任一实体表的一行,供按表名访问与选择器使用
// ==========================================

use crate::domain::job::Job;
use crate::domain::master::{Area, Category, Customer, Item, Machine, Operator};
use crate::domain::transaction::Transaction;
use crate::domain::types::{RecordId, TableName};
use serde::Serialize;

/// 任一实体表中的一条记录
///
/// 序列化为该实体自身的 JSON 形态（不带类型标签）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Area(Area),
    Customer(Customer),
    Category(Category),
    Item(Item),
    Machine(Machine),
    Operator(Operator),
    Job(Job),
    Transaction(Transaction),
}

impl Record {
    pub fn id(&self) -> RecordId {
        match self {
            Record::Area(r) => r.id,
            Record::Customer(r) => r.id,
            Record::Category(r) => r.id,
            Record::Item(r) => r.id,
            Record::Machine(r) => r.id,
            Record::Operator(r) => r.id,
            Record::Job(r) => r.id,
            Record::Transaction(r) => r.id,
        }
    }

    /// name 属性; 工单与生产记录没有 name
    pub fn name(&self) -> Option<&str> {
        match self {
            Record::Area(r) => Some(&r.name),
            Record::Customer(r) => Some(&r.name),
            Record::Category(r) => Some(&r.name),
            Record::Item(r) => Some(&r.name),
            Record::Machine(r) => Some(&r.name),
            Record::Operator(r) => Some(&r.name),
            Record::Job(_) | Record::Transaction(_) => None,
        }
    }

    pub fn table(&self) -> TableName {
        match self {
            Record::Area(_) => TableName::Areas,
            Record::Customer(_) => TableName::Customers,
            Record::Category(_) => TableName::Categories,
            Record::Item(_) => TableName::Items,
            Record::Machine(_) => TableName::Machines,
            Record::Operator(_) => TableName::Operators,
            Record::Job(_) => TableName::Jobs,
            Record::Transaction(_) => TableName::Transactions,
        }
    }
}
