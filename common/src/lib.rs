//! 订阅网关公共模块
//!
//! 提供网关共享的基础设施：
//! - 环境变量配置加载
//! - 统一错误类型与错误信封
//! - 文档查询模型
//! - 请求 ID 中间件与日志初始化

pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod response;
pub mod telemetry;
