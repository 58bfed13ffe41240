//! Verein 的写应用服务
//!
//! 新建/更新/删除的唯一入口：传输层不直接构造持久化状态。写操作先做
//! 结构校验（fail fast，无部分写入），并发冲突在仓储的 CAS 提交点检测，
//! 核心不做自动重试，重试是调用方的决定。
//!
use std::sync::Arc;
use tracing::debug;
use verein_domain::entity::Entity;
use verein_domain::error::{DomainError, DomainResult};
use verein_domain::persist::VereinRepository;
use verein_domain::value_object::Version;
use verein_domain::verein::{Verein, VereinId};

/// 写访问：新建、按版本更新与幂等删除
pub struct VereinWriteService<R> {
    repo: Arc<R>,
}

impl<R> VereinWriteService<R>
where
    R: VereinRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 新建一个 Verein
    ///
    /// 校验失败以 [`DomainError::ConstraintViolations`] 返回；邮箱已被其他
    /// 聚合占用以 [`DomainError::EmailExists`] 返回。成功时分配新的随机标识，
    /// 版本为 0，并返回存储后的聚合。
    pub async fn create(&self, verein: Verein) -> DomainResult<Verein> {
        debug!(name = verein.name(), "create");

        verein.validate()?;

        // 标识与版本始终由写服务分配，传输层送入的值不生效
        let verein = verein
            .with_id(VereinId::random())
            .with_version(Version::new());

        let gespeichert = self.repo.insert(verein).await?;
        debug!(id = %gespeichert.id(), "create: angelegt");
        Ok(gespeichert)
    }

    /// 按乐观锁版本更新一个 Verein
    ///
    /// `expected` 是调用方最近读到的版本；与存储版本不一致时以
    /// [`DomainError::VersionOutdated`] 返回且存储状态保持不变。
    /// 成功时版本恰好递增 1。
    pub async fn update(
        &self,
        id: VereinId,
        daten: Verein,
        expected: Version,
    ) -> DomainResult<Verein> {
        debug!(%id, %expected, "update");

        daten.validate()?;

        let mut verein = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or(DomainError::NotFound { id })?;
        verein.set(daten);

        let gespeichert = self.repo.update(verein, expected).await?;
        debug!(id = %gespeichert.id(), version = %gespeichert.version(), "update: aktualisiert");
        Ok(gespeichert)
    }

    /// 按标识删除一个 Verein（幂等）
    ///
    /// 不存在的标识不算错误；内嵌的地址/邮箱/营业额随聚合一同删除。
    pub async fn delete_by_id(&self, id: &VereinId) -> DomainResult<()> {
        let geloescht = self.repo.delete_by_id(id).await?;
        debug!(%id, geloescht, "delete_by_id");
        Ok(())
    }
}
