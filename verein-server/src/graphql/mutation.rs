//! 变更解析器（1:1 映射到写服务）
//!
use async_graphql::{Context, ID, Object, Result};
use tracing::debug;
use verein_domain::entity::Entity;
use verein_domain::error::DomainError;
use verein_domain::value_object::Version;

use super::error::domain_error;
use super::input::VereinInput;
use super::query::parse_id;
use super::types::{CreatePayload, UpdatePayload};
use crate::state::AppState;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// 新建一个 Verein，返回生成的标识
    async fn create_verein(&self, ctx: &Context<'_>, input: VereinInput) -> Result<CreatePayload> {
        debug!(name = %input.name, "graphql create_verein");

        let verein = input.into_verein().map_err(domain_error)?;
        let state = ctx.data_unchecked::<AppState>();
        let angelegt = state
            .write_service
            .create(verein)
            .await
            .map_err(domain_error)?;

        Ok(CreatePayload {
            id: ID(angelegt.id().to_string()),
        })
    }

    /// 按乐观锁版本更新，返回递增后的版本
    async fn update_verein(
        &self,
        ctx: &Context<'_>,
        id: ID,
        version: i64,
        input: VereinInput,
    ) -> Result<UpdatePayload> {
        debug!(id = %*id, version, "graphql update_verein");

        let id = parse_id(&id)?;
        let expected = usize::try_from(version).map_err(|_| {
            domain_error(DomainError::VersionInvalid {
                raw: version.to_string(),
            })
        })?;

        let verein = input.into_verein().map_err(domain_error)?;
        let state = ctx.data_unchecked::<AppState>();
        let aktualisiert = state
            .write_service
            .update(id, verein, Version::from_value(expected))
            .await
            .map_err(domain_error)?;

        Ok(UpdatePayload {
            version: aktualisiert.version().value() as u64,
        })
    }

    /// 按标识删除（幂等）
    async fn delete_verein(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        debug!(id = %*id, "graphql delete_verein");

        let id = parse_id(&id)?;
        let state = ctx.data_unchecked::<AppState>();
        state
            .write_service
            .delete_by_id(&id)
            .await
            .map_err(domain_error)?;

        Ok(true)
    }
}
