//! REST 传输适配层
//!
//! 把 HTTP 动词/路径/ETag 映射到应用服务调用，并把领域错误渲染为
//! RFC 7807 的 Problem Detail。适配层不承载业务规则。
//!
pub mod dto;
pub mod error;
pub mod model;
pub mod problem;

mod read;
mod write;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// REST 接口的基础路径
pub const VEREIN_PATH: &str = "/verein";

pub fn router() -> Router<AppState> {
    Router::new()
        .route(VEREIN_PATH, get(read::find).post(write::create))
        .route(
            "/verein/{id}",
            get(read::find_by_id)
                .put(write::update)
                .delete(write::delete_by_id),
        )
}
