// ==========================================
// 印刷车间管理 - API 层
// ==========================================
// 职责: 面向宿主 (控制台 / Tauri) 的业务接口
// ==========================================

pub mod catalog_api;
pub mod error;
pub mod lookup_api;
pub mod report_api;

pub use catalog_api::CatalogApi;
pub use error::{ApiError, ApiResult};
pub use lookup_api::{LookupApi, LookupSelection};
pub use report_api::ReportApi;
