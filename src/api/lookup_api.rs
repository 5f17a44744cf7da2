// ==========================================
// 印刷车间管理 - 查找选择器 API
// ==========================================
// 职责: 供宿主驱动选择器 (注册/打开/过滤/选中/关闭)
// 说明: 选中结果以写入清单返回,由宿主前端落值
// ==========================================

use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;

use crate::api::error::{ApiError, ApiResult};
use crate::picker::{
    FieldWrite, FieldWriteLog, PickerController, PickerView, SelectionOutcome, TriggerDescriptor,
    TriggerId,
};
use crate::repository::DataStore;

/// 选中操作的返回
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupSelection {
    /// None: 选择器未打开或记录不在当前结果中
    pub outcome: Option<SelectionOutcome>,
    pub writes: Vec<FieldWrite>,
    pub view: PickerView,
}

// ==========================================
// LookupApi - 查找选择器 API
// ==========================================
pub struct LookupApi {
    store: Arc<DataStore>,
    picker: Mutex<PickerController>,
}

impl LookupApi {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self {
            store,
            picker: Mutex::new(PickerController::new()),
        }
    }

    fn picker(&self) -> ApiResult<MutexGuard<'_, PickerController>> {
        self.picker
            .lock()
            .map_err(|e| ApiError::LockError(e.to_string()))
    }

    /// 注册触发元素
    pub fn register(&self, descriptor: TriggerDescriptor) -> ApiResult<TriggerId> {
        Ok(self.picker()?.register(descriptor))
    }

    /// 注销触发元素; 返回被移除的描述
    ///
    /// # 参数
    /// - trigger_id: register 返回的句柄字符串
    pub fn unregister(&self, trigger_id: &str) -> ApiResult<TriggerDescriptor> {
        let id = parse_trigger_id(trigger_id)?;

        self.picker()?
            .unregister(id)
            .ok_or_else(|| ApiError::NotFound(format!("触发元素(id={})未注册", id)))
    }

    /// 已注册的触发元素（按注册顺序）
    pub fn triggers(&self) -> ApiResult<Vec<(TriggerId, TriggerDescriptor)>> {
        Ok(self
            .picker()?
            .triggers()
            .iter()
            .map(|(id, d)| (id, d.clone()))
            .collect())
    }

    /// 以显式参数打开选择器
    pub fn open(&self, table: &str, id_field: &str, name_field: &str) -> ApiResult<PickerView> {
        Ok(self
            .picker()?
            .open(self.store.as_ref(), table, id_field, name_field))
    }

    /// 激活已注册的触发元素
    ///
    /// # 参数
    /// - trigger_id: register 返回的句柄字符串
    pub fn activate(&self, trigger_id: &str) -> ApiResult<PickerView> {
        let id = parse_trigger_id(trigger_id)?;

        self.picker()?
            .activate(id, self.store.as_ref())
            .ok_or_else(|| ApiError::NotFound(format!("触发元素(id={})未注册", id)))
    }

    pub fn filter(&self, query: &str) -> ApiResult<PickerView> {
        Ok(self.picker()?.filter(query))
    }

    /// 按ID选中当前结果中的记录
    pub fn select(&self, record_id: &str) -> ApiResult<LookupSelection> {
        let mut picker = self.picker()?;
        let mut log = FieldWriteLog::new();
        let outcome = picker.select_by_id(record_id, &mut log);

        Ok(LookupSelection {
            outcome,
            writes: log.into_writes(),
            view: picker.view(),
        })
    }

    pub fn close(&self) -> ApiResult<PickerView> {
        let mut picker = self.picker()?;
        picker.close();
        Ok(picker.view())
    }

    pub fn view(&self) -> ApiResult<PickerView> {
        Ok(self.picker()?.view())
    }
}

fn parse_trigger_id(raw: &str) -> ApiResult<TriggerId> {
    raw.parse()
        .map_err(|e| ApiError::InvalidInput(format!("触发元素句柄格式错误: {}", e)))
}
