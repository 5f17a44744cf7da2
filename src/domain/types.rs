// ==========================================
// 印刷车间管理 - 领域类型定义
// ==========================================
// 职责: 表名词汇、记录ID规范化、状态/工序枚举
// 红线: ID 比较前必须先规范化,不依赖隐式类型转换
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 实体表名 (Table Name)
// ==========================================
// 固定词汇表; 新增表需同时扩展此枚举与种子数据
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableName {
    Areas,
    Customers,
    Categories,
    Items,
    Machines,
    Operators,
    Jobs,
    Transactions,
}

impl TableName {
    /// 全部已知表（按声明顺序）
    pub const ALL: [TableName; 8] = [
        TableName::Areas,
        TableName::Customers,
        TableName::Categories,
        TableName::Items,
        TableName::Machines,
        TableName::Operators,
        TableName::Jobs,
        TableName::Transactions,
    ];

    /// 表名字符串（与前端 data-table 属性一致）
    pub fn as_str(&self) -> &'static str {
        match self {
            TableName::Areas => "areas",
            TableName::Customers => "customers",
            TableName::Categories => "categories",
            TableName::Items => "items",
            TableName::Machines => "machines",
            TableName::Operators => "operators",
            TableName::Jobs => "jobs",
            TableName::Transactions => "transactions",
        }
    }

    /// 解析表名（大小写敏感,未知表名返回 None）
    pub fn parse(name: &str) -> Option<TableName> {
        TableName::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 记录ID (Record Id)
// ==========================================
// 规范表示: i64
// 序列化为裸数字,与前端 JSON 保持一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId(value)
    }
}

/// 调用方传入的ID参数 → 规范ID
///
/// 数字与字符串两种表示都接受:
/// - 整数直接采用
/// - 字符串去除首尾空白后按整数解析; `"7.0"` 这类整值小数也视为 7
/// - 空串、非数字、非整值小数 → None（按“未找到”处理）
pub trait IntoRecordId {
    fn into_record_id(self) -> Option<RecordId>;
}

impl IntoRecordId for RecordId {
    fn into_record_id(self) -> Option<RecordId> {
        Some(self)
    }
}

impl IntoRecordId for i64 {
    fn into_record_id(self) -> Option<RecordId> {
        Some(RecordId(self))
    }
}

impl IntoRecordId for i32 {
    fn into_record_id(self) -> Option<RecordId> {
        Some(RecordId(i64::from(self)))
    }
}

impl IntoRecordId for u32 {
    fn into_record_id(self) -> Option<RecordId> {
        Some(RecordId(i64::from(self)))
    }
}

impl IntoRecordId for f64 {
    fn into_record_id(self) -> Option<RecordId> {
        if self.is_finite() && self.fract() == 0.0 && self.abs() < i64::MAX as f64 {
            Some(RecordId(self as i64))
        } else {
            None
        }
    }
}

impl IntoRecordId for &str {
    fn into_record_id(self) -> Option<RecordId> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<i64>() {
            Ok(v) => Some(RecordId(v)),
            Err(_) => trimmed.parse::<f64>().ok().and_then(IntoRecordId::into_record_id),
        }
    }
}

impl IntoRecordId for &String {
    fn into_record_id(self) -> Option<RecordId> {
        self.as_str().into_record_id()
    }
}

impl IntoRecordId for String {
    fn into_record_id(self) -> Option<RecordId> {
        self.as_str().into_record_id()
    }
}

impl IntoRecordId for &serde_json::Value {
    fn into_record_id(self) -> Option<RecordId> {
        match self {
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(v) => Some(RecordId(v)),
                None => n.as_f64().and_then(IntoRecordId::into_record_id),
            },
            serde_json::Value::String(s) => s.as_str().into_record_id(),
            _ => None,
        }
    }
}

// ==========================================
// 工单状态 (Job Status)
// ==========================================
// 开放集合: 未识别的状态原样保留,不影响渲染
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    Pending,
    InProgress,
    Completed,
    Other(String),
}

impl JobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Pending => "Pending",
            JobStatus::InProgress => "In Progress",
            JobStatus::Completed => "Completed",
            JobStatus::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for JobStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Pending" => JobStatus::Pending,
            "In Progress" => JobStatus::InProgress,
            "Completed" => JobStatus::Completed,
            _ => JobStatus::Other(value),
        }
    }
}

impl From<JobStatus> for String {
    fn from(value: JobStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 工单优先级 (Job Priority)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JobPriority {
    Low,
    Medium,
    High,
}

impl fmt::Display for JobPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobPriority::Low => write!(f, "Low"),
            JobPriority::Medium => write!(f, "Medium"),
            JobPriority::High => write!(f, "High"),
        }
    }
}

// ==========================================
// 生产工序类型 (Transaction Type)
// ==========================================
// 工序推进顺序: Printing → Rewinding → Laminating → Slitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Printing,
    Rewinding,
    Laminating,
    Slitting,
}

impl TransactionType {
    pub const ALL: [TransactionType; 4] = [
        TransactionType::Printing,
        TransactionType::Rewinding,
        TransactionType::Laminating,
        TransactionType::Slitting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Printing => "Printing",
            TransactionType::Rewinding => "Rewinding",
            TransactionType::Laminating => "Laminating",
            TransactionType::Slitting => "Slitting",
        }
    }

    /// 精确匹配（大小写敏感,不做归一化）
    pub fn parse(value: &str) -> Option<TransactionType> {
        TransactionType::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_name_parse_大小写敏感() {
        assert_eq!(TableName::parse("customers"), Some(TableName::Customers));
        assert_eq!(TableName::parse("Customers"), None);
        assert_eq!(TableName::parse("customer"), None);
    }

    #[test]
    fn test_into_record_id_宽松表示() {
        assert_eq!(1i64.into_record_id(), Some(RecordId(1)));
        assert_eq!("1".into_record_id(), Some(RecordId(1)));
        assert_eq!(" 101 ".into_record_id(), Some(RecordId(101)));
        assert_eq!("3.0".into_record_id(), Some(RecordId(3)));
        assert_eq!(2.0f64.into_record_id(), Some(RecordId(2)));
        assert_eq!((&serde_json::json!("7")).into_record_id(), Some(RecordId(7)));
        assert_eq!((&serde_json::json!(7)).into_record_id(), Some(RecordId(7)));
    }

    #[test]
    fn test_into_record_id_无效输入() {
        assert_eq!("".into_record_id(), None);
        assert_eq!("abc".into_record_id(), None);
        assert_eq!("1.5".into_record_id(), None);
        assert_eq!(f64::NAN.into_record_id(), None);
        // 2^63 超出 i64 范围
        assert_eq!(9223372036854775808.0f64.into_record_id(), None);
        assert_eq!("9223372036854775808".into_record_id(), None);
        assert_eq!((-9.3e18f64).into_record_id(), None);
        assert_eq!((&serde_json::Value::Null).into_record_id(), None);
    }

    #[test]
    fn test_job_status_开放集合() {
        let status: JobStatus = serde_json::from_str("\"On Hold\"").unwrap();
        assert_eq!(status, JobStatus::Other("On Hold".to_string()));
        assert_eq!(status.to_string(), "On Hold");

        let status: JobStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(status, JobStatus::InProgress);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"In Progress\"");
    }

    #[test]
    fn test_transaction_type_parse_精确匹配() {
        assert_eq!(TransactionType::parse("Printing"), Some(TransactionType::Printing));
        assert_eq!(TransactionType::parse("printing"), None);
    }
}
