// ==========================================
// 印刷车间管理 - 选择器触发元素
// ==========================================
// 触发元素声明三个关联属性: 来源表、ID目标字段、名称目标字段
// 宿主负责为每个交互元素调用 register; 选择器不依赖具体 UI 框架
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 元素属性名（与页面 data-* 属性一致）
pub const ATTR_TABLE: &str = "data-table";
pub const ATTR_TARGET_ID: &str = "data-target-id";
pub const ATTR_TARGET_NAME: &str = "data-target-name";

// ==========================================
// TriggerDescriptor - 触发元素描述
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerDescriptor {
    /// 来源表名
    pub table: String,
    /// ID 目标字段（空串表示不写入）
    pub id_field: String,
    /// 名称目标字段（空串表示不写入）
    pub name_field: String,
}

impl TriggerDescriptor {
    pub fn new(
        table: impl Into<String>,
        id_field: impl Into<String>,
        name_field: impl Into<String>,
    ) -> Self {
        Self {
            table: table.into(),
            id_field: id_field.into(),
            name_field: name_field.into(),
        }
    }

    /// 从元素属性集合解析
    ///
    /// 同时接受 `data-table` 与 dataset 形式 (`table` / `targetId` / `targetName`)。
    ///
    /// # 返回
    /// - None: 元素未声明来源表,不是选择器触发元素
    pub fn from_attributes<'a, I>(attributes: I) -> Option<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = None;
        let mut id_field = String::new();
        let mut name_field = String::new();

        for (key, value) in attributes {
            match key {
                ATTR_TABLE | "table" => table = Some(value.to_string()),
                ATTR_TARGET_ID | "targetId" => id_field = value.to_string(),
                ATTR_TARGET_NAME | "targetName" => name_field = value.to_string(),
                _ => {}
            }
        }

        table.map(|table| Self {
            table,
            id_field,
            name_field,
        })
    }
}

// ==========================================
// TriggerId - 注册句柄
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriggerId(Uuid);

impl TriggerId {
    fn generate() -> Self {
        TriggerId(Uuid::new_v4())
    }
}

impl fmt::Display for TriggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TriggerId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(TriggerId)
    }
}

// ==========================================
// TriggerRegistry - 已注册触发元素
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct TriggerRegistry {
    entries: Vec<(TriggerId, TriggerDescriptor)>,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册触发元素
    ///
    /// 相同描述只保留一条,重复注册返回已有句柄
    pub fn register(&mut self, descriptor: TriggerDescriptor) -> TriggerId {
        if let Some((id, _)) = self.entries.iter().find(|(_, d)| *d == descriptor) {
            tracing::debug!("触发元素已注册,复用句柄: id={}, table={}", id, descriptor.table);
            return *id;
        }

        let id = TriggerId::generate();
        tracing::debug!(
            "注册选择器触发元素: id={}, table={}, id_field={}, name_field={}",
            id,
            descriptor.table,
            descriptor.id_field,
            descriptor.name_field
        );
        self.entries.push((id, descriptor));
        id
    }

    /// 注销; 返回被移除的描述
    pub fn unregister(&mut self, id: TriggerId) -> Option<TriggerDescriptor> {
        let pos = self.entries.iter().position(|(k, _)| *k == id)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn get(&self, id: TriggerId) -> Option<&TriggerDescriptor> {
        self.entries.iter().find(|(k, _)| *k == id).map(|(_, d)| d)
    }

    /// 按注册顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (TriggerId, &TriggerDescriptor)> {
        self.entries.iter().map(|(k, d)| (*k, d))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
