//! Verein 服务端（verein-server）
//!
//! 在应用服务之上装配两个传输适配层：
//! - REST（`rest`）：HTTP 动词/路径/ETag 到服务调用的映射，响应带超媒体链接
//! - GraphQL（`graphql`）：查询/变更解析器与类型化错误
//!
//! 两个适配层都是薄而无状态的，共享完全一致的服务层语义。
//!
pub mod config;
pub mod graphql;
pub mod rest;
pub mod state;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

/// 组装完整的路由：REST、GraphQL 与健康检查
pub fn app(state: AppState) -> Router {
    let schema = graphql::schema(state.clone());

    let rest = rest::router().with_state(state);
    let gql = Router::new()
        .route(graphql::GRAPHQL_PATH, post(graphql::graphql_handler))
        .with_state(schema);

    Router::new()
        .merge(rest)
        .merge(gql)
        .route("/health", get(health))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "UP" }))
}
