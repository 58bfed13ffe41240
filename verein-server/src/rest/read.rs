//! 读接口：按 ID 与按搜索条件
//!
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use tracing::debug;
use uuid::Uuid;
use verein_domain::entity::Entity;

use super::error::RestError;
use super::model::{VereinModel, VereineModel};
use crate::state::AppState;
use verein_domain::verein::VereinId;

/// GET /verein/{id}
///
/// 200 带 ETag 与导航链接；`If-None-Match` 命中当前版本时 304；未知 ID 404。
pub(super) async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Response, RestError> {
    let id = VereinId::from_uuid(id);
    debug!(%id, "rest find_by_id");

    let verein = state
        .read_service
        .find_by_id(&id)
        .await
        .map_err(|e| RestError::new(e, &uri))?;

    let aktuelle_version = format!("\"{}\"", verein.version().value());
    let if_none_match = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|wert| wert.to_str().ok());
    if if_none_match == Some(aktuelle_version.as_str()) {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    let model = VereinModel::with_links(&verein);
    Ok(([(header::ETAG, aktuelle_version)], Json(model)).into_response())
}

/// GET /verein?name=...&plz=...
///
/// 无命中时返回 200 与空列表；未知条件键 400。
pub(super) async fn find(
    State(state): State<AppState>,
    Query(suchkriterien): Query<Vec<(String, String)>>,
    uri: Uri,
) -> Result<Json<VereineModel>, RestError> {
    debug!(?suchkriterien, "rest find");

    let vereine = state
        .read_service
        .find(&suchkriterien)
        .await
        .map_err(|e| RestError::new(e, &uri))?;

    Ok(Json(VereineModel::new(&vereine)))
}
