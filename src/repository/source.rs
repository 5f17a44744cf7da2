// ==========================================
// 印刷车间管理 - 记录来源接口
// ==========================================
// 选择器只依赖此接口; 静态种子数据与实时查询均可实现
// 契约: 每次调用都返回最新数据,不做缓存
// ==========================================

use crate::domain::{Record, RecordId};

/// 按表名提供记录的数据来源
pub trait RecordSource {
    /// 返回指定表的全部记录（保持插入顺序）; 未知表名返回空列表
    fn list_table(&self, table: &str) -> Vec<Record>;

    /// 按规范ID查找记录; 默认实现为线性扫描
    fn find_record(&self, table: &str, id: RecordId) -> Option<Record> {
        self.list_table(table).into_iter().find(|r| r.id() == id)
    }
}
