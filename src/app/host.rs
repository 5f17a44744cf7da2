// ==========================================
// 印刷车间管理 - 宿主页面接入
// ==========================================
// 页面契约:
// 1. 必须存在且仅存在一个主内容容器 (#main-content), 由布局组件增强
// 2. 声明了 data-table / data-target-id / data-target-name 的元素为选择器触发元素
// 启动顺序: 布局挂载 → 选择器触发元素注册; 两步相互独立
// ==========================================

use crate::i18n::t_with_args;
use crate::picker::{PickerController, TriggerDescriptor, TriggerId};
use thiserror::Error;

/// 主内容容器ID
pub const MAIN_CONTENT_ID: &str = "main-content";

/// 布局错误 (页面配置错误)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("主内容容器不存在: #{id}")]
    ContainerMissing { id: String },

    #[error("主内容容器重复: #{id} 出现 {count} 次")]
    DuplicateContainer { id: String, count: usize },
}

// ==========================================
// PageElement / PageHost - 宿主页面抽象
// ==========================================

/// 页面上的一个元素
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageElement {
    pub id: Option<String>,
    pub attributes: Vec<(String, String)>,
}

impl PageElement {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            attributes: Vec::new(),
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// 解析为选择器触发元素
    pub fn as_trigger(&self) -> Option<TriggerDescriptor> {
        TriggerDescriptor::from_attributes(
            self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        )
    }
}

/// 宿主页面（由具体 UI 实现）
pub trait PageHost {
    fn elements(&self) -> Vec<PageElement>;

    /// 指定ID的元素个数
    fn count_elements(&self, id: &str) -> usize {
        self.elements()
            .iter()
            .filter(|e| e.id.as_deref() == Some(id))
            .count()
    }
}

/// 静态元素列表构成的页面
#[derive(Debug, Clone, Default)]
pub struct StaticPage {
    elements: Vec<PageElement>,
}

impl StaticPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(mut self, element: PageElement) -> Self {
        self.elements.push(element);
        self
    }

    /// 追加一个选择器触发按钮
    pub fn lookup_button(self, table: &str, id_field: &str, name_field: &str) -> Self {
        self.element(
            PageElement::default()
                .attr("class", "lookup-btn")
                .attr("data-table", table)
                .attr("data-target-id", id_field)
                .attr("data-target-name", name_field),
        )
    }
}

impl PageHost for StaticPage {
    fn elements(&self) -> Vec<PageElement> {
        self.elements.clone()
    }
}

// ==========================================
// 启动
// ==========================================

/// 启动结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub layout_mounted: bool,
    pub triggers: Vec<TriggerId>,
}

/// 布局挂载: 校验主内容容器
///
/// 容器缺失或重复时记录错误日志并返回 Err; 不影响页面其余初始化
pub fn mount_layout(host: &dyn PageHost) -> Result<(), LayoutError> {
    match host.count_elements(MAIN_CONTENT_ID) {
        1 => {
            tracing::debug!("布局已挂载: #{}", MAIN_CONTENT_ID);
            Ok(())
        }
        0 => {
            tracing::error!(
                "{}",
                t_with_args("layout.container_missing", &[("id", MAIN_CONTENT_ID)])
            );
            Err(LayoutError::ContainerMissing {
                id: MAIN_CONTENT_ID.to_string(),
            })
        }
        count => {
            let count_text = count.to_string();
            tracing::error!(
                "{}",
                t_with_args(
                    "layout.container_duplicate",
                    &[("id", MAIN_CONTENT_ID), ("count", count_text.as_str())]
                )
            );
            Err(LayoutError::DuplicateContainer {
                id: MAIN_CONTENT_ID.to_string(),
                count,
            })
        }
    }
}

/// 发现页面上的全部触发元素并注册到选择器
pub fn bind_triggers(host: &dyn PageHost, picker: &mut PickerController) -> Vec<TriggerId> {
    host.elements()
        .iter()
        .filter_map(PageElement::as_trigger)
        .map(|descriptor| picker.register(descriptor))
        .collect()
}

/// 页面启动: 布局挂载失败时中止该步骤,触发元素注册照常进行
pub fn bootstrap(host: &dyn PageHost, picker: &mut PickerController) -> BootstrapReport {
    let layout_mounted = mount_layout(host).is_ok();
    let triggers = bind_triggers(host, picker);
    tracing::info!(
        "页面启动完成: layout_mounted={}, triggers={}",
        layout_mounted,
        triggers.len()
    );

    BootstrapReport {
        layout_mounted,
        triggers,
    }
}
