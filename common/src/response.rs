//! Response types.
//!
//! Successful queries are relayed as the backend's own JSON; the only shape
//! the gateway defines itself is the one-field error envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::AppError;

/// Error envelope returned whenever a backend call fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Human-readable error message.
    pub error: String,
}

impl From<&AppError> for ErrorEnvelope {
    fn from(err: &AppError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Turns a backend result into an HTTP response.
///
/// Success relays the value as-is. Failure yields the error envelope, with
/// status 200 unless `strict_status` is set.
pub fn relay<T: Serialize>(result: Result<T, AppError>, strict_status: bool) -> Response {
    match result {
        Ok(value) => Json(value).into_response(),
        Err(err) if strict_status => err.into_response(),
        Err(err) => (StatusCode::OK, Json(ErrorEnvelope::from(&err))).into_response(),
    }
}

/// 健康检查响应
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// 服务状态
    pub status: String,
    /// 服务名称
    pub service: String,
    /// 服务版本
    pub version: String,
    /// 当前时间戳
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    /// Healthy response for the given service.
    pub fn healthy(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            service: service.into(),
            version: version.into(),
            timestamp: Utc::now(),
        }
    }
}
