// ==========================================
// 印刷车间管理 - 选择器渲染契约
// ==========================================
// 宿主按此结构渲染: 标题、搜索框、结果行 或 空状态提示
// ==========================================

use crate::domain::{Record, RecordId};
use crate::i18n::{t, t_with_args};
use serde::Serialize;

/// 结果列表中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerRow {
    pub id: RecordId,
    /// 记录的 name 属性; 无 name 的记录为空串
    pub label: String,
    /// 行尾编号徽标 (#id)
    pub badge: String,
}

impl PickerRow {
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.id(),
            label: record.name().unwrap_or_default().to_string(),
            badge: format!("#{}", record.id()),
        }
    }
}

/// 结果区内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PickerBody {
    Rows { rows: Vec<PickerRow> },
    /// 无结果时的显式提示
    Empty { message: String },
}

impl PickerBody {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let rows: Vec<PickerRow> = records.into_iter().map(PickerRow::from_record).collect();
        if rows.is_empty() {
            PickerBody::Empty {
                message: t("picker.empty"),
            }
        } else {
            PickerBody::Rows { rows }
        }
    }

    pub fn rows(&self) -> &[PickerRow] {
        match self {
            PickerBody::Rows { rows } => rows,
            PickerBody::Empty { .. } => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PickerBody::Empty { .. })
    }
}

/// 选择器当前画面
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerView {
    pub visible: bool,
    pub table: String,
    pub title: String,
    pub search_text: String,
    pub search_placeholder: String,
    pub body: PickerBody,
}

/// 由表名推导标题中的实体名
///
/// 仅去掉末尾一个 "s" (areas → area); 并非通用的单数化,
/// 例如 categories → categorie
pub fn title_entity(table: &str) -> &str {
    table.strip_suffix('s').unwrap_or(table)
}

/// 标题文案
pub fn title_for(table: &str) -> String {
    t_with_args("picker.title", &[("entity", title_entity(table))])
}

/// 搜索框占位文案
pub fn search_placeholder() -> String {
    t("picker.search_placeholder")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_entity_去除末尾s() {
        assert_eq!(title_entity("areas"), "area");
        assert_eq!(title_entity("customers"), "customer");
        assert_eq!(title_entity("categories"), "categorie");
        assert_eq!(title_entity("staff"), "staff");
        assert_eq!(title_entity(""), "");
    }

    #[test]
    fn test_body_空结果() {
        let body = PickerBody::from_records(std::iter::empty());
        assert!(body.is_empty());
        assert!(body.rows().is_empty());
    }
}
