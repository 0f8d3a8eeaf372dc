//! 订阅网关服务入口

use anyhow::Context;
use common::config::{load_local_env, AppConfig};
use common::telemetry::init_tracing;
use subscription_gateway::{create_router, AppState, SERVICE_NAME};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 本地测试时加载 .env，结果在日志初始化后输出
    let local_env = load_local_env();

    // 加载配置
    let config = AppConfig::load_with_service(SERVICE_NAME).context("加载配置失败")?;

    // 初始化日志追踪
    init_tracing(config.log_json);

    match local_env {
        Ok(true) => info!("已加载 .env 文件"),
        Ok(false) => {}
        Err(e) => warn!(error = %e, "未能加载 .env 文件"),
    }

    // 创建应用状态
    let state = AppState::new(config.clone()).context("初始化应用状态失败")?;

    // 创建路由
    let app = create_router(state);

    // 启动服务
    let addr = config.bind_address();
    info!(service = SERVICE_NAME, address = %addr, "启动订阅网关");

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("绑定地址失败: {addr}"))?;
    axum::serve(listener, app).await.context("服务启动失败")?;

    Ok(())
}
