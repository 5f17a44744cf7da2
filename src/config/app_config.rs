// ==========================================
// 印刷车间管理 - 应用配置
// ==========================================
// 职责: 关联兜底文案、界面语言
// 存储: JSON 文件 (缺失即使用默认值)
// 查找顺序: 显式路径 → PRINTY_CONFIG_PATH → 用户配置目录
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "PRINTY_CONFIG_PATH";

/// 配置层错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 (path={path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败 (path={path}): {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// FallbackLabels - 关联失败时的兜底文案
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackLabels {
    /// 客户/物料/机台/操作员未解析时的名称
    pub unknown: String,
    /// 工单未解析时的工单号
    pub job_placeholder: String,
    /// 工单号前缀 (工单号 = 前缀 + 工单ID)
    pub job_no_prefix: String,
}

impl Default for FallbackLabels {
    fn default() -> Self {
        Self {
            unknown: "Unknown".to_string(),
            job_placeholder: "N/A".to_string(),
            job_no_prefix: "JO-".to_string(),
        }
    }
}

impl FallbackLabels {
    /// 格式化工单号
    pub fn job_no(&self, job_id: impl std::fmt::Display) -> String {
        format!("{}{}", self.job_no_prefix, job_id)
    }
}

// ==========================================
// AppConfig - 应用配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 界面语言（"en" 或 "zh-CN"）
    pub locale: String,
    pub fallbacks: FallbackLabels,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            fallbacks: FallbackLabels::default(),
        }
    }
}

impl AppConfig {
    /// 从指定文件加载配置
    ///
    /// # 返回
    /// - Ok(AppConfig): 文件不存在时返回默认配置
    /// - Err(ConfigError): 读取或解析失败
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            tracing::info!("配置文件不存在,使用默认配置: {}", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config: AppConfig = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        tracing::info!("已加载配置文件: {}", path.display());
        Ok(config)
    }

    /// 按默认查找顺序加载配置
    pub fn load_default() -> ConfigResult<Self> {
        Self::load(&default_config_path())
    }
}

/// 默认配置文件路径
///
/// 允许通过环境变量显式指定（便于调试/测试）
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    match dirs::config_dir() {
        Some(dir) => dir.join("printy-shop").join("config.json"),
        None => PathBuf::from("./printy-shop.json"),
    }
}
