// ==========================================
// 印刷车间管理 - 查找选择器
// ==========================================
// 职责: 从任意实体表中选择一条记录,
//       把 ID 与名称写入两个目标字段
// 依赖: 只依赖 RecordSource,不依赖具体 UI 框架
// ==========================================

pub mod controller;
pub mod field;
pub mod trigger;
pub mod view;

pub use controller::{PickerController, PickerState, SelectionOutcome};
pub use field::{FieldSink, FieldWrite, FieldWriteLog, FormState};
pub use trigger::{TriggerDescriptor, TriggerId, TriggerRegistry};
pub use view::{PickerBody, PickerRow, PickerView};
