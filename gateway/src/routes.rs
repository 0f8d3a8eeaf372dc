//! 网关路由模块

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

/// 创建网关路由
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/subscription", get(handlers::list_subscriptions))
        .route("/subscription/{name}", get(handlers::list_subscriptions_by_name))
        .route("/api/health", get(handlers::health_check))
}
