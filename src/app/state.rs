// ==========================================
// 印刷车间管理 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享数据源和API实例
// ==========================================

use std::path::Path;
use std::sync::Arc;

use crate::api::{ApiResult, CatalogApi, LookupApi, ReportApi};
use crate::config::{default_config_path, AppConfig};
use crate::engine::ReportEngine;
use crate::repository::{DataStore, DetailJoiner};

/// 应用状态
///
/// 所有 API 共享同一个只读 DataStore
pub struct AppState {
    pub config: AppConfig,

    /// 内存数据源（演示数据）
    pub store: Arc<DataStore>,

    /// 主数据/业务数据查询API
    pub catalog_api: Arc<CatalogApi>,

    /// 查找选择器API
    pub lookup_api: Arc<LookupApi>,

    /// 生产报表API
    pub report_api: Arc<ReportApi>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 返回
    /// - Err(ApiError::DataError): 演示数据校验失败（ID 重复、日期非法）
    pub fn new(config: AppConfig) -> ApiResult<Self> {
        let store = DataStore::seeded()?;
        Ok(Self::with_store(config, store))
    }

    /// 从配置文件创建
    ///
    /// # 返回
    /// - Err(ApiError::ConfigError): 配置文件读取或解析失败
    pub fn load(config_path: &Path) -> ApiResult<Self> {
        let config = AppConfig::load(config_path)?;
        Self::new(config)
    }

    /// 从默认配置路径创建
    pub fn load_default() -> ApiResult<Self> {
        Self::load(&default_config_path())
    }

    /// 以给定数据源创建
    pub fn with_store(config: AppConfig, store: DataStore) -> Self {
        tracing::info!(
            "初始化AppState: locale={}, jobs={}, transactions={}",
            config.locale,
            store.jobs().len(),
            store.transactions().len()
        );

        let store = Arc::new(store);
        let joiner = DetailJoiner::new(config.fallbacks.clone());

        let catalog_api = Arc::new(CatalogApi::new(store.clone(), joiner.clone()));
        let lookup_api = Arc::new(LookupApi::new(store.clone()));
        let report_api = Arc::new(ReportApi::new(store.clone(), ReportEngine::new(joiner)));

        Self {
            config,
            store,
            catalog_api,
            lookup_api,
            report_api,
        }
    }
}
