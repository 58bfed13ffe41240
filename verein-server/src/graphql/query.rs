//! 查询解析器（1:1 映射到读服务）
//!
use async_graphql::{Context, Error, ID, Object, Result};
use tracing::debug;
use verein_domain::verein::VereinId;

use super::error::domain_error;
use super::input::SuchkriterienInput;
use super::types::VereinPayload;
use crate::state::AppState;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// 按 ID 查找一个 Verein
    async fn verein(&self, ctx: &Context<'_>, id: ID) -> Result<VereinPayload> {
        debug!(id = %*id, "graphql verein");

        let id = parse_id(&id)?;
        let state = ctx.data_unchecked::<AppState>();
        let verein = state
            .read_service
            .find_by_id(&id)
            .await
            .map_err(domain_error)?;

        Ok(verein.into())
    }

    /// 按搜索条件查找；无条件时返回所有 Verein
    async fn vereine(
        &self,
        ctx: &Context<'_>,
        input: Option<SuchkriterienInput>,
    ) -> Result<Vec<VereinPayload>> {
        debug!(?input, "graphql vereine");

        let pairs = input.unwrap_or_default().into_pairs();
        let state = ctx.data_unchecked::<AppState>();
        let vereine = state.read_service.find(&pairs).await.map_err(domain_error)?;

        Ok(vereine.into_iter().map(VereinPayload::from).collect())
    }
}

/// ID 标量到领域标识；解析失败是输入层错误，不进入领域分类
pub(super) fn parse_id(id: &ID) -> Result<VereinId> {
    id.parse::<VereinId>()
        .map_err(|_| Error::new(format!("invalid id: {}", **id)))
}
