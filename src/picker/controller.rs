// ==========================================
// 印刷车间管理 - 查找选择器
// ==========================================
// 状态机: Closed → Open (open)
//         Open → Open (filter, 任意次)
//         Open → Closed (select / close)
// 红线: 所有公开操作不报错; 无数据/无匹配以空状态表达
// ==========================================
// 单线程事件驱动: 每个用户动作处理完毕后才处理下一个
// currentResultSet 由选择器独占,每次 open 整体重写
// ==========================================

use crate::domain::{IntoRecordId, Record, RecordId};
use crate::picker::field::FieldSink;
use crate::picker::trigger::{TriggerDescriptor, TriggerId, TriggerRegistry};
use crate::picker::view::{search_placeholder, title_for, PickerBody, PickerView};
use crate::repository::RecordSource;
use serde::Serialize;

/// 选择器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PickerState {
    Closed,
    Open,
}

/// 一次选择的写入结果
///
/// ID 与名称独立写入,可能只有一个成功
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionOutcome {
    pub record_id: RecordId,
    pub id_written: bool,
    pub name_written: bool,
}

// ==========================================
// PickerController - 查找选择器控制器
// ==========================================
#[derive(Debug, Clone)]
pub struct PickerController {
    state: PickerState,
    active_table: String,
    target_id_field: String,
    target_name_field: String,
    current_result_set: Vec<Record>,
    query: String,
    triggers: TriggerRegistry,
}

impl Default for PickerController {
    fn default() -> Self {
        Self::new()
    }
}

impl PickerController {
    pub fn new() -> Self {
        Self {
            state: PickerState::Closed,
            active_table: String::new(),
            target_id_field: String::new(),
            target_name_field: String::new(),
            current_result_set: Vec::new(),
            query: String::new(),
            triggers: TriggerRegistry::new(),
        }
    }

    // ==========================================
    // 触发元素注册
    // ==========================================

    /// 注册触发元素
    pub fn register(&mut self, descriptor: TriggerDescriptor) -> TriggerId {
        self.triggers.register(descriptor)
    }

    pub fn unregister(&mut self, id: TriggerId) -> Option<TriggerDescriptor> {
        self.triggers.unregister(id)
    }

    pub fn triggers(&self) -> &TriggerRegistry {
        &self.triggers
    }

    /// 激活已注册的触发元素（等同于以其声明调用 open）
    ///
    /// # 返回
    /// - None: 触发元素未注册,状态不变
    pub fn activate(&mut self, id: TriggerId, source: &dyn RecordSource) -> Option<PickerView> {
        let Some(descriptor) = self.triggers.get(id).cloned() else {
            tracing::warn!("未注册的触发元素: {}", id);
            return None;
        };
        Some(self.open(
            source,
            &descriptor.table,
            &descriptor.id_field,
            &descriptor.name_field,
        ))
    }

    // ==========================================
    // 状态迁移
    // ==========================================

    /// 打开选择器
    ///
    /// 拉取整表快照、清空搜索词、渲染全部记录。
    /// 未知表或空表显示空状态,不视为错误。
    pub fn open(
        &mut self,
        source: &dyn RecordSource,
        table: &str,
        id_field: &str,
        name_field: &str,
    ) -> PickerView {
        self.active_table = table.to_string();
        self.target_id_field = id_field.to_string();
        self.target_name_field = name_field.to_string();
        self.current_result_set = source.list_table(table);
        self.query.clear();
        self.state = PickerState::Open;

        tracing::debug!(
            "打开选择器: table={}, records={}",
            table,
            self.current_result_set.len()
        );
        self.view()
    }

    /// 按名称过滤（不区分大小写的子串匹配）
    ///
    /// 只在上次 open 的快照上过滤,不重新拉取。
    /// 空搜索词显示全部记录; 无 name 的记录不参与非空搜索。
    /// 关闭状态下忽略。
    pub fn filter(&mut self, query: &str) -> PickerView {
        if self.state == PickerState::Closed {
            tracing::debug!("选择器未打开,忽略过滤: {:?}", query);
            return self.view();
        }
        self.query = query.to_string();
        self.view()
    }

    /// 选中记录: 写入 ID 与名称两个目标字段,然后关闭
    ///
    /// 每个字段独立写入; 目标字段未设置或无法解析时跳过该字段。
    /// 关闭状态下忽略,返回 None。
    pub fn select(&mut self, record: &Record, sink: &mut dyn FieldSink) -> Option<SelectionOutcome> {
        if self.state == PickerState::Closed {
            tracing::debug!("选择器未打开,忽略选择: id={}", record.id());
            return None;
        }

        let id_written = if self.target_id_field.is_empty() {
            false
        } else {
            sink.write_field(&self.target_id_field, &record.id().to_string())
        };

        let name_written = match record.name() {
            Some(name) if !self.target_name_field.is_empty() => {
                sink.write_field(&self.target_name_field, name)
            }
            _ => false,
        };

        tracing::info!(
            "选择器选中: table={}, id={}, id_written={}, name_written={}",
            self.active_table,
            record.id(),
            id_written,
            name_written
        );

        self.close();
        Some(SelectionOutcome {
            record_id: record.id(),
            id_written,
            name_written,
        })
    }

    /// 按ID选中当前可见结果中的记录
    ///
    /// # 返回
    /// - None: 选择器未打开,或该ID不在当前可见结果中
    pub fn select_by_id<I: IntoRecordId>(
        &mut self,
        id: I,
        sink: &mut dyn FieldSink,
    ) -> Option<SelectionOutcome> {
        let id = id.into_record_id()?;
        let record = self.visible_records().find(|r| r.id() == id).cloned()?;
        self.select(&record, sink)
    }

    /// 关闭选择器; 已写入的字段不受影响
    pub fn close(&mut self) {
        self.state = PickerState::Closed;
    }

    // ==========================================
    // 查询
    // ==========================================

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PickerState::Open
    }

    pub fn active_table(&self) -> &str {
        &self.active_table
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// 上次 open 拉取的完整快照（未过滤）
    pub fn current_result_set(&self) -> &[Record] {
        &self.current_result_set
    }

    /// 当前搜索词下可见的记录（保持快照顺序）
    pub fn visible_records(&self) -> impl Iterator<Item = &Record> {
        let needle = self.query.to_lowercase();
        self.current_result_set.iter().filter(move |r| {
            needle.is_empty()
                || r.name()
                    .map_or(false, |name| name.to_lowercase().contains(&needle))
        })
    }

    /// 渲染当前画面
    pub fn view(&self) -> PickerView {
        PickerView {
            visible: self.is_open(),
            table: self.active_table.clone(),
            title: title_for(&self.active_table),
            search_text: self.query.clone(),
            search_placeholder: search_placeholder(),
            body: PickerBody::from_records(self.visible_records()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::field::{FieldWriteLog, FormState};
    use crate::repository::DataStore;

    fn store() -> DataStore {
        DataStore::seeded().unwrap()
    }

    #[test]
    fn test_open_渲染全部记录() {
        let store = store();
        let mut picker = PickerController::new();
        let view = picker.open(&store, "machines", "machine_id", "machine_name");

        assert!(view.visible);
        assert_eq!(picker.state(), PickerState::Open);
        assert_eq!(view.body.rows().len(), 3);
        assert_eq!(view.body.rows()[0].label, "Heidelberg XL");
        assert_eq!(view.body.rows()[0].badge, "#1");
    }

    #[test]
    fn test_open_未知表显示空状态() {
        let store = store();
        let mut picker = PickerController::new();
        let view = picker.open(&store, "suppliers", "a", "b");

        assert!(view.visible);
        assert!(view.body.is_empty());
    }

    #[test]
    fn test_filter_不区分大小写() {
        let store = store();
        let mut picker = PickerController::new();
        picker.open(&store, "operators", "op_id", "op_name");

        let view = picker.filter("RACHEL");
        let labels: Vec<&str> = view.body.rows().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Rachel Zane"]);
    }

    #[test]
    fn test_filter_无匹配() {
        let store = store();
        let mut picker = PickerController::new();
        picker.open(&store, "areas", "area_id", "area_name");

        assert!(picker.filter("zzz").body.is_empty());
    }

    #[test]
    fn test_filter_关闭状态忽略() {
        let mut picker = PickerController::new();
        let view = picker.filter("acme");
        assert!(!view.visible);
        assert_eq!(picker.query(), "");
    }

    #[test]
    fn test_filter_无name记录不参与搜索() {
        let store = store();
        let mut picker = PickerController::new();
        picker.open(&store, "jobs", "job_id", "");

        assert_eq!(picker.filter("").body.rows().len(), 3);
        assert!(picker.filter("1").body.is_empty());
    }

    #[test]
    fn test_select_写入并关闭() {
        let store = store();
        let mut picker = PickerController::new();
        let mut form = FormState::with_fields(["item_id", "item_name"]);
        picker.open(&store, "items", "item_id", "item_name");

        let record = store.get_by_id("items", 2).unwrap();
        let outcome = picker.select(&record, &mut form).unwrap();

        assert!(outcome.id_written && outcome.name_written);
        assert_eq!(form.value("item_id"), Some("2"));
        assert_eq!(form.value("item_name"), Some("Burger Wrapper"));
        assert_eq!(picker.state(), PickerState::Closed);
        // 关闭后保留快照,下次 open 时覆盖
        assert_eq!(picker.active_table(), "items");
        assert_eq!(picker.current_result_set().len(), 3);
    }

    #[test]
    fn test_select_部分字段不可写() {
        let store = store();
        let mut picker = PickerController::new();
        let mut form = FormState::with_fields(["area_id"]);
        picker.open(&store, "areas", "area_id", "missing_field");

        let outcome = picker.select_by_id("3", &mut form).unwrap();
        assert!(outcome.id_written);
        assert!(!outcome.name_written);
        assert_eq!(form.value("area_id"), Some("3"));
        assert!(!picker.is_open());
    }

    #[test]
    fn test_select_未设置目标字段() {
        let store = store();
        let mut picker = PickerController::new();
        let mut log = FieldWriteLog::new();
        picker.open(&store, "customers", "", "customer_name");

        let outcome = picker.select_by_id(1, &mut log).unwrap();
        assert!(!outcome.id_written);
        assert_eq!(log.writes().len(), 1);
        assert_eq!(log.writes()[0].value, "Acme Corp");
    }

    #[test]
    fn test_select_by_id_不在可见结果中() {
        let store = store();
        let mut picker = PickerController::new();
        let mut log = FieldWriteLog::new();
        picker.open(&store, "customers", "cid", "cname");
        picker.filter("global");

        assert!(picker.select_by_id(1, &mut log).is_none());
        assert!(picker.is_open());
        assert!(log.writes().is_empty());
    }

    #[test]
    fn test_select_关闭状态忽略() {
        let store = store();
        let mut picker = PickerController::new();
        let mut log = FieldWriteLog::new();
        let record = store.get_by_id("areas", 1).unwrap();

        assert!(picker.select(&record, &mut log).is_none());
        assert!(log.writes().is_empty());
    }

    #[test]
    fn test_close_保留已写入字段() {
        let store = store();
        let mut picker = PickerController::new();
        let mut form = FormState::with_fields(["cid", "cname"]);
        picker.open(&store, "customers", "cid", "cname");
        picker.select_by_id(2, &mut form);

        picker.open(&store, "customers", "cid", "cname");
        picker.close();
        assert_eq!(form.value("cname"), Some("Global Prints"));
        assert!(!picker.view().visible);
    }

    #[test]
    fn test_reopen_从完整结果开始() {
        let store = store();
        let mut picker = PickerController::new();
        picker.open(&store, "customers", "cid", "cname");
        picker.filter("acme");
        picker.close();

        let view = picker.open(&store, "machines", "mid", "mname");
        assert_eq!(view.search_text, "");
        assert_eq!(view.table, "machines");
        assert_eq!(view.body.rows().len(), 3);
    }

    #[test]
    fn test_activate_已注册触发元素() {
        let store = store();
        let mut picker = PickerController::new();
        let id = picker.register(TriggerDescriptor::new("categories", "cat_id", "cat_name"));

        let view = picker.activate(id, &store).unwrap();
        assert_eq!(view.table, "categories");
        assert_eq!(view.body.rows().len(), 3);

        picker.close();
        picker.unregister(id);
        assert!(picker.activate(id, &store).is_none());
        assert!(!picker.is_open());
    }
}
