// ==========================================
// 印刷车间管理 - 目标字段写入
// ==========================================
// 选择结果写入两个目标字段 (ID / 名称)
// 尽力而为: 每个字段独立写入,目标不存在只记日志,不报错
// ==========================================

use serde::Serialize;
use std::collections::BTreeMap;

/// 可写入的目标字段集合（由宿主界面实现）
pub trait FieldSink {
    /// 写入字段值
    ///
    /// # 返回
    /// - true: 字段存在并已写入
    /// - false: 字段无法解析,未写入
    fn write_field(&mut self, field: &str, value: &str) -> bool;
}

// ==========================================
// FormState - 已声明字段的表单状态
// ==========================================
/// 只接受预先声明过的字段
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    fields: BTreeMap<String, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以一组字段名创建（初始值为空串）
    pub fn with_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut form = Self::new();
        for field in fields {
            form.declare(field);
        }
        form
    }

    /// 声明字段; 已存在的字段保持原值
    pub fn declare(&mut self, field: impl Into<String>) {
        self.fields.entry(field.into()).or_default();
    }

    pub fn value(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }
}

impl FieldSink for FormState {
    fn write_field(&mut self, field: &str, value: &str) -> bool {
        match self.fields.get_mut(field) {
            Some(slot) => {
                *slot = value.to_string();
                true
            }
            None => {
                tracing::warn!("目标字段不存在,跳过写入: {}", field);
                false
            }
        }
    }
}

// ==========================================
// FieldWriteLog - 记录全部写入
// ==========================================
/// 宿主在前端自行落值时使用: 仅记录写入请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldWrite {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldWriteLog {
    writes: Vec<FieldWrite>,
}

impl FieldWriteLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> &[FieldWrite] {
        &self.writes
    }

    pub fn into_writes(self) -> Vec<FieldWrite> {
        self.writes
    }
}

impl FieldSink for FieldWriteLog {
    fn write_field(&mut self, field: &str, value: &str) -> bool {
        self.writes.push(FieldWrite {
            field: field.to_string(),
            value: value.to_string(),
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_state_未声明字段() {
        let mut form = FormState::with_fields(["customer_id"]);
        assert!(form.write_field("customer_id", "1"));
        assert!(!form.write_field("customer_name", "Acme Corp"));

        assert_eq!(form.value("customer_id"), Some("1"));
        assert_eq!(form.value("customer_name"), None);
    }

    #[test]
    fn test_form_state_重复声明保留原值() {
        let mut form = FormState::with_fields(["a"]);
        form.write_field("a", "x");
        form.declare("a");
        assert_eq!(form.value("a"), Some("x"));
    }

    #[test]
    fn test_field_write_log_记录顺序() {
        let mut log = FieldWriteLog::new();
        log.write_field("machine_id", "2");
        log.write_field("machine_name", "Rotoflex VLI");

        let fields: Vec<&str> = log.writes().iter().map(|w| w.field.as_str()).collect();
        assert_eq!(fields, vec!["machine_id", "machine_name"]);
    }
}
