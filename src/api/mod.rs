//! Axum 的 web api
//!
//! 目前只有一组路由 (链路追踪演示的纯HTTP端点)

pub mod otlp;
