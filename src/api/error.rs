// ==========================================
// 印刷车间管理 - API层错误类型
// ==========================================
// 职责: 宿主接口层的错误类型,统一下层错误为可展示的消息
// 说明: 核心查询不报错; 这里的错误来自输入解析、锁、配置、启动数据
// ==========================================

use crate::config::ConfigError;
use crate::repository::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("状态锁获取失败: {0}")]
    LockError(String),

    #[error("数据集错误: {0}")]
    DataError(String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("内部错误: {0}")]
    InternalError(String),
}

impl ApiError {
    /// 前端使用的错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::LockError(_) => "LOCK_ERROR",
            ApiError::DataError(_) => "DATA_ERROR",
            ApiError::ConfigError(_) => "CONFIG_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        ApiError::DataError(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_repository_error() {
        let err: ApiError = RepositoryError::DuplicateId {
            table: "areas".to_string(),
            id: 1,
        }
        .into();
        assert_eq!(err.code(), "DATA_ERROR");
        assert!(err.to_string().contains("areas"));
    }
}
