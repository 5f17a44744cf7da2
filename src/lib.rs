// ==========================================
// 印刷车间管理 - 核心库
// ==========================================
// 技术栈: Rust (+ 可选 Tauri)
// 系统定位: 主数据查询、查找选择器、生产报表原型
// 数据源: 内存演示数据,只读
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 内存数据源与关联查询
pub mod repository;

// 查找选择器 - 状态机与渲染契约
pub mod picker;

// 引擎层 - 生产报表
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 宿主集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    IntoRecordId, JobPriority, JobStatus, Record, RecordId, TableName, TransactionType,
};

// 领域实体
pub use domain::{
    Area, Category, Customer, EnrichedJob, EnrichedTransaction, Item, Job, Machine, Operator,
    Transaction,
};

// 数据源
pub use repository::{DataStore, DetailJoiner, RecordSource};

// 选择器
pub use picker::{FieldSink, FormState, PickerController, PickerState, PickerView};

// 引擎
pub use engine::ReportEngine;

// API
pub use api::{CatalogApi, LookupApi, ReportApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Printy Productions";
