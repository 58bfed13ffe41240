//! Verein 的只读应用服务
//!
use std::sync::Arc;
use tracing::debug;
use verein_domain::entity::Entity;
use verein_domain::error::{DomainError, DomainResult};
use verein_domain::persist::VereinRepository;
use verein_domain::specification::Specification;
use verein_domain::suchkriterien::Suchkriterien;
use verein_domain::verein::{Verein, VereinId};

/// 只读访问：按标识或搜索条件查找，不产生任何状态变更，也不需要版本信息
pub struct VereinReadService<R> {
    repo: Arc<R>,
}

impl<R> VereinReadService<R>
where
    R: VereinRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 按标识查找一个 Verein
    ///
    /// 不存在时以 [`DomainError::NotFound`] 返回。
    pub async fn find_by_id(&self, id: &VereinId) -> DomainResult<Verein> {
        debug!(%id, "find_by_id");

        let verein = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { id: *id })?;

        debug!(name = verein.name(), version = %verein.version(), "find_by_id: gefunden");
        Ok(verein)
    }

    /// 按搜索条件查找
    ///
    /// 空条件返回所有聚合；未知条件键以 [`DomainError::InvalidCriteria`] 拒绝；
    /// 没有命中时返回空集合而不是错误。
    pub async fn find(&self, kriterien: &[(String, String)]) -> DomainResult<Vec<Verein>> {
        debug!(?kriterien, "find");

        let kriterien =
            Suchkriterien::parse(kriterien.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;

        let alle = self.repo.find_all().await?;
        let vereine = if kriterien.is_empty() {
            alle
        } else {
            alle.into_iter()
                .filter(|verein| kriterien.is_satisfied_by(verein))
                .collect()
        };

        debug!(anzahl = vereine.len(), "find: gefunden");
        Ok(vereine)
    }
}
