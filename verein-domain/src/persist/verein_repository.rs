use crate::error::DomainResult;
use crate::value_object::Version;
use crate::verein::{Verein, VereinId};
use async_trait::async_trait;
use std::sync::Arc;

/// Verein 聚合的仓储接口
///
/// 每个方法都是对存储的一次原子逻辑操作：
/// - 邮箱的全局唯一约束在 `insert`/`update` 内部检查，冲突以
///   [`DomainError::EmailExists`](crate::error::DomainError::EmailExists) 返回；
/// - `update` 以 (id, version) 做 CAS：版本不匹配以
///   [`DomainError::VersionOutdated`](crate::error::DomainError::VersionOutdated) 返回，
///   成功时存储版本恰好递增 1；
/// - 读取不阻塞写入，也不被写入阻塞。
#[async_trait]
pub trait VereinRepository: Send + Sync {
    /// 按标识查找
    async fn find_by_id(&self, id: &VereinId) -> DomainResult<Option<Verein>>;

    /// 读取全部聚合
    async fn find_all(&self) -> DomainResult<Vec<Verein>>;

    /// 新建聚合（携带调用方设置的标识与版本）
    async fn insert(&self, verein: Verein) -> DomainResult<Verein>;

    /// CAS 更新：仅当存储版本等于 `expected` 时写入，并把版本递增 1
    async fn update(&self, verein: Verein, expected: Version) -> DomainResult<Verein>;

    /// 按标识删除，返回是否确有删除（不存在不算错误）
    async fn delete_by_id(&self, id: &VereinId) -> DomainResult<bool>;
}

#[async_trait]
impl<T> VereinRepository for Arc<T>
where
    T: VereinRepository + ?Sized,
{
    async fn find_by_id(&self, id: &VereinId) -> DomainResult<Option<Verein>> {
        (**self).find_by_id(id).await
    }

    async fn find_all(&self) -> DomainResult<Vec<Verein>> {
        (**self).find_all().await
    }

    async fn insert(&self, verein: Verein) -> DomainResult<Verein> {
        (**self).insert(verein).await
    }

    async fn update(&self, verein: Verein, expected: Version) -> DomainResult<Verein> {
        (**self).update(verein, expected).await
    }

    async fn delete_by_id(&self, id: &VereinId) -> DomainResult<bool> {
        (**self).delete_by_id(id).await
    }
}
