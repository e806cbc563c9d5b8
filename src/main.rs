//! 主程序入口模块
//!
//! 负责服务器配置和启动

use tower_http::trace::TraceLayer; // HTTP请求追踪
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt}; // 日志订阅系统
mod api;

/// 默认监听地址 (演示拓扑里上游固定连 5638 端口)
const DEFAULT_ADDR: &str = "0.0.0.0:5638";

/// 主异步函数，使用tokio运行时
#[tokio::main]
async fn main() {
    // 初始化日志追踪
    tracing_subscriber::registry()
        .with( // 过滤规则: 默认显示debug级别
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer()) // 输出格式
        .init(); // 初始化

    // axum
    let app = api::otlp::factory_otlp_router()
        .layer(TraceLayer::new_for_http()); // 请求级日志
    let addr = std::env::var("OTLP_SERVER_ADDR") // 环境变量可覆盖监听地址
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr) // 绑定TCP监听端口
        .await
        .unwrap();
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap(); // 启动HTTP服务器
}
