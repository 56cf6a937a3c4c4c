//! 错误类型定义
//!
//! 包含服务所有的错误类型，以及到 HTTP 状态码和 API 错误码的映射。

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// 服务错误类型
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    // 资源不存在
    #[error("人员不存在: {0}")]
    PersonNotFound(String),
    #[error("活动不存在: {0}")]
    ActivityNotFound(String),

    // 验证错误
    #[error("参数验证失败: {0}")]
    Validation(String),

    // 业务错误（正常的被拒绝结果，不是故障）
    #[error("余额不足: 需要 {required}, 剩余 {available}")]
    InsufficientBalance { required: i64, available: i64 },

    // 数据错误
    #[error("记录格式损坏: {entity} - {reason}")]
    MalformedRecord {
        entity: &'static str,
        reason: String,
    },

    // 系统错误
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
    #[error("内部错误: {0}")]
    Internal(String),
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, ServiceError>;

impl ServiceError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::PersonNotFound(_) | Self::ActivityNotFound(_) => StatusCode::NOT_FOUND,

            // 余额不足与参数问题同属请求方可修正的 400
            Self::Validation(_) | Self::InsufficientBalance { .. } => StatusCode::BAD_REQUEST,

            Self::MalformedRecord { .. } | Self::Database(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 返回错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::PersonNotFound(_) => "PERSON_NOT_FOUND",
            Self::ActivityNotFound(_) => "ACTIVITY_NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
            Self::MalformedRecord { .. } => "MALFORMED_RECORD",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// 是否为可重试的瞬时错误
    ///
    /// 仅用于只读路径；写路径没有幂等键，不允许重试。
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Database(_))
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 系统级错误只返回通用提示，详细信息仅记录日志，防止信息泄露
        let message = match &self {
            Self::Database(e) => {
                tracing::error!(error = %e, "数据库操作失败");
                "服务内部错误，请稍后重试".to_string()
            }
            Self::MalformedRecord { entity, reason } => {
                tracing::error!(entity = %entity, reason = %reason, "存储记录格式损坏");
                "服务内部错误，请稍后重试".to_string()
            }
            Self::Internal(e) => {
                tracing::error!(error = %e, "内部错误");
                "服务内部错误，请稍后重试".to_string()
            }
            other => other.to_string(),
        };

        let body = json!({
            "success": false,
            "code": self.error_code(),
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// 从 validator 错误转换
impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}
