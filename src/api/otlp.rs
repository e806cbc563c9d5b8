//! 链路追踪演示用的 Web API
//!
//! API接口设计：
//!
//! - `GET /`: 重定向到 `/test` (303, Location: /test)
//! - `GET /test`: 返回固定字符串 (text/plain)，供演示拓扑里的上游服务器调用
//!
//! 无状态、无共享数据，每个请求互相独立，可被任意并发处理。
//! 其余路径走 axum 默认的 404，不在此处实现

use axum::{
    response::Redirect,     // 重定向响应
    routing::{get},         // HTTP方法路由
    Router,                 // 路由器
};

/// GET /test 返回给调用方的固定内容
const TEST_BODY: &str = "Java Spring Return OK!";

/// 创建演示路由
pub fn factory_otlp_router() -> Router {
    let app = Router::new()
        .route("/", get(root))
        .route("/test", get(test));
    app
}

/// GET / 重定向到 /test，响应体为空
async fn root() -> Redirect {
    tracing::debug!("GET /");
    Redirect::to("/test") // 303 See Other
}

/// GET /test 返回固定字符串，测试是否服务器正常
async fn test() -> &'static str {
    tracing::debug!("GET /test");
    TEST_BODY
}
