// ==========================================
// 印刷车间管理 - 主数据领域模型
// ==========================================
// 职责: 区域、客户、品类、物料、机台、操作员
// 字段命名: 序列化为 camelCase,与前端表单字段一致
// ==========================================

use crate::domain::types::RecordId;
use serde::{Deserialize, Serialize};

// ==========================================
// Area - 生产区域
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: RecordId,
    pub name: String,
    pub description: String,
}

// ==========================================
// Customer - 客户
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: RecordId,
    pub name: String,
    pub contact: String,
    pub area_id: RecordId, // → Area.id
}

// ==========================================
// Category - 物料品类
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: RecordId,
    pub name: String,
    pub description: String,
}

// ==========================================
// Item - 物料/产品
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: RecordId,
    pub name: String,
    pub category_id: RecordId, // → Category.id
    pub price: f64,
    pub specs: String,
}

// ==========================================
// Machine - 机台
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    pub id: RecordId,
    pub name: String,
    pub area_id: RecordId, // → Area.id
    #[serde(rename = "type")]
    pub machine_type: String,
}

// ==========================================
// Operator - 操作员
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    pub id: RecordId,
    pub name: String,
    pub role: String,
    pub shift: String,
}
