// ==========================================
// 印刷车间管理 - 配置层
// ==========================================
// 职责: 应用配置加载 (兜底文案、语言)
// ==========================================

pub mod app_config;

pub use app_config::{
    default_config_path, AppConfig, ConfigError, ConfigResult, FallbackLabels, CONFIG_PATH_ENV,
};
