//! Appwrite 订阅查询网关
//!
//! 将只读查询转发到 Appwrite 文档数据库并原样返回 JSON：
//! - `GET /` 静态首页
//! - `GET /subscription` 列出所有订阅
//! - `GET /subscription/{name}` 按名称筛选订阅

pub mod client;
pub mod handlers;
pub mod page;
pub mod routes;
pub mod service;
pub mod state;

use axum::{http::HeaderValue, middleware, routing::get, Json, Router};
use common::config::AllowedOrigins;
use common::middleware::request_id::request_id_middleware;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub use state::AppState;

pub const SERVICE_NAME: &str = "subscription-gateway";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "订阅网关 API",
        version = "0.1.0",
        description = "Appwrite 订阅查询网关"
    ),
    paths(
        handlers::root,
        handlers::list_subscriptions,
        handlers::list_subscriptions_by_name,
        handlers::health_check,
    ),
    components(schemas(
        handlers::DocumentList,
        common::response::ErrorEnvelope,
        common::response::HealthResponse,
    )),
    tags(
        (name = "gateway", description = "网关端点"),
        (name = "subscription", description = "订阅查询端点"),
        (name = "health", description = "健康检查端点")
    )
)]
pub struct ApiDoc;

/// Builds the full application router with middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.allowed_origins);

    Router::new()
        .merge(routes::router())
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match origins {
        AllowedOrigins::Any => cors.allow_origin(Any),
        AllowedOrigins::List(list) => {
            let values: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %origin, "忽略无效的 CORS 来源");
                        None
                    }
                })
                .collect();
            cors.allow_origin(values)
        }
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
