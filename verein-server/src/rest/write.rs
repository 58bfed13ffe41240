//! 写接口：新建、带版本前置条件的更新与幂等删除
//!
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use tracing::debug;
use uuid::Uuid;
use verein_domain::entity::Entity;
use verein_domain::error::{DomainError, DomainResult};
use verein_domain::value_object::Version;
use verein_domain::verein::VereinId;

use super::VEREIN_PATH;
use super::dto::VereinDTO;
use super::error::RestError;
use crate::state::AppState;

/// POST /verein
///
/// 201 带 Location；约束违例 400；邮箱已占用 409。
pub(super) async fn create(
    State(state): State<AppState>,
    uri: Uri,
    Json(dto): Json<VereinDTO>,
) -> Result<Response, RestError> {
    debug!(name = %dto.name, "rest create");

    let verein = state
        .write_service
        .create(dto.into_verein())
        .await
        .map_err(|e| RestError::new(e, &uri))?;

    let location = format!("{VEREIN_PATH}/{}", verein.id());
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]).into_response())
}

/// PUT /verein/{id}
///
/// `If-Match` 里是调用方最近读到的版本：成功 204 带新 ETag；
/// 缺失或格式不合法 400；过期 412；未知 ID 404。
pub(super) async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    uri: Uri,
    Json(dto): Json<VereinDTO>,
) -> Result<Response, RestError> {
    let id = VereinId::from_uuid(id);
    debug!(%id, "rest update");

    let expected = version_aus_if_match(&headers).map_err(|e| RestError::new(e, &uri))?;

    let verein = state
        .write_service
        .update(id, dto.into_verein(), expected)
        .await
        .map_err(|e| RestError::new(e, &uri))?;

    let neue_version = format!("\"{}\"", verein.version().value());
    Ok((StatusCode::NO_CONTENT, [(header::ETAG, neue_version)]).into_response())
}

/// DELETE /verein/{id}
///
/// 幂等，204 即使 ID 不存在。
pub(super) async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    uri: Uri,
) -> Result<StatusCode, RestError> {
    let id = VereinId::from_uuid(id);
    debug!(%id, "rest delete_by_id");

    state
        .write_service
        .delete_by_id(&id)
        .await
        .map_err(|e| RestError::new(e, &uri))?;

    Ok(StatusCode::NO_CONTENT)
}

/// 从 `If-Match` 提取版本号，形如 `"3"`
///
/// 缺失的头与格式不合法的令牌都归入 `VersionInvalid`，与“过期但格式正确”
/// 的 `VersionOutdated` 严格区分。
fn version_aus_if_match(headers: &HeaderMap) -> DomainResult<Version> {
    let Some(wert) = headers.get(header::IF_MATCH) else {
        return Err(DomainError::VersionInvalid {
            raw: "<missing>".to_string(),
        });
    };

    let wert = wert.to_str().map_err(|_| DomainError::VersionInvalid {
        raw: "<not ascii>".to_string(),
    })?;

    let unquoted = wert
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| DomainError::VersionInvalid {
            raw: wert.to_string(),
        })?;

    let version = unquoted
        .parse::<usize>()
        .map_err(|_| DomainError::VersionInvalid {
            raw: wert.to_string(),
        })?;

    Ok(Version::from_value(version))
}
