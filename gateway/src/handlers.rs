//! Handler模块

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::{Html, Response},
    Json,
};
use utoipa::ToSchema;

use common::errors::AppError;
use common::response::{relay, ErrorEnvelope, HealthResponse};

use crate::page::LANDING_PAGE;
use crate::state::AppState;

/// 首页
#[utoipa::path(
    get,
    path = "/",
    tag = "gateway",
    responses(
        (status = 200, description = "静态首页", content_type = "text/html", body = String)
    )
)]
pub async fn root() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// 列出所有订阅
#[utoipa::path(
    get,
    path = "/subscription",
    tag = "subscription",
    responses(
        (status = 200, description = "Appwrite 文档列表，或错误信封", body = DocumentList),
        (status = 502, description = "后端调用失败（仅在 STRICT_ERROR_STATUS 开启时）", body = ErrorEnvelope)
    )
)]
pub async fn list_subscriptions(State(state): State<AppState>) -> Response {
    let result = state.subscriptions().list_all().await;
    relay(result, state.config.strict_error_status)
}

/// 按名称筛选订阅
#[utoipa::path(
    get,
    path = "/subscription/{name}",
    tag = "subscription",
    params(
        ("name" = String, Path, description = "订阅名称")
    ),
    responses(
        (status = 200, description = "名称匹配的文档列表，或错误信封", body = DocumentList),
        (status = 502, description = "后端调用失败（仅在 STRICT_ERROR_STATUS 开启时）", body = ErrorEnvelope)
    )
)]
pub async fn list_subscriptions_by_name(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> Response {
    let result = match name {
        Ok(Path(name)) => state.subscriptions().list_by_name(&name).await,
        Err(rejection) => Err(AppError::InvalidPath(rejection.body_text())),
    };
    relay(result, state.config.strict_error_status)
}

/// 健康检查端点
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "服务运行正常", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(
        state.config.service_name.clone(),
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Appwrite 文档列表（仅用于 API 文档，响应体原样转发）
#[derive(ToSchema)]
pub struct DocumentList {
    /// 匹配的文档总数
    pub total: u64,
    /// 文档列表
    #[schema(value_type = Vec<Object>)]
    pub documents: Vec<serde_json::Value>,
}
