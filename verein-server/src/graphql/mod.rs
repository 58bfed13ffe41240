//! GraphQL 传输适配层
//!
//! 查询与变更解析器 1:1 映射到读/写服务；领域错误渲染为带 `errorType`
//! 扩展的类型化 GraphQL 错误，部分结果按 GraphQL 惯例与错误并存返回。
//!
pub mod error;
pub mod input;
pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;

use crate::state::AppState;
use mutation::MutationRoot;
use query::QueryRoot;

/// GraphQL 端点路径
pub const GRAPHQL_PATH: &str = "/graphql";

pub type VereinSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// 构建 Schema，应用状态注入到解析器上下文
pub fn schema(state: AppState) -> VereinSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql_handler(
    State(schema): State<VereinSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}
