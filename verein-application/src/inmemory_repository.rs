//! 基于内存的 VereinRepository 实现
//!
//! 以 `Mutex<HashMap>` 承载全部聚合：每个仓储方法在一次持锁期间完成
//! 整个逻辑操作，因此邮箱唯一检查与 (id, version) 的 CAS 都是原子的。
//!
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use verein_domain::entity::Entity;
use verein_domain::error::{DomainError, DomainResult};
use verein_domain::persist::VereinRepository;
use verein_domain::value_object::Version;
use verein_domain::verein::{Verein, VereinId};

/// 进程内仓储；`Default` 产生空存储
#[derive(Default)]
pub struct InMemoryVereinRepository {
    vereine: Mutex<HashMap<VereinId, Verein>>,
}

impl InMemoryVereinRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// 是否有另一个聚合（id 不同）已占用 `verein` 的任一邮箱
fn email_konflikt(map: &HashMap<VereinId, Verein>, verein: &Verein) -> Option<String> {
    for email in verein.emails() {
        let belegt = map.values().any(|anderer| {
            anderer.id() != verein.id()
                && anderer
                    .emails()
                    .iter()
                    .any(|e| e.as_str().eq_ignore_ascii_case(email.as_str()))
        });
        if belegt {
            return Some(email.as_str().to_string());
        }
    }
    None
}

#[async_trait]
impl VereinRepository for InMemoryVereinRepository {
    async fn find_by_id(&self, id: &VereinId) -> DomainResult<Option<Verein>> {
        let map = self.sperren()?;
        Ok(map.get(id).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Verein>> {
        let map = self.sperren()?;
        Ok(map.values().cloned().collect())
    }

    async fn insert(&self, verein: Verein) -> DomainResult<Verein> {
        let mut map = self.sperren()?;

        if map.contains_key(verein.id()) {
            return Err(DomainError::Repository {
                reason: format!("duplicate id: {}", verein.id()),
            });
        }
        if let Some(email) = email_konflikt(&map, &verein) {
            return Err(DomainError::EmailExists { email });
        }

        map.insert(*verein.id(), verein.clone());
        Ok(verein)
    }

    async fn update(&self, verein: Verein, expected: Version) -> DomainResult<Verein> {
        let mut map = self.sperren()?;

        let aktuell = map
            .get(verein.id())
            .map(Entity::version)
            .ok_or(DomainError::NotFound { id: *verein.id() })?;
        if aktuell != expected {
            return Err(DomainError::VersionOutdated {
                expected,
                actual: aktuell,
            });
        }
        if let Some(email) = email_konflikt(&map, &verein) {
            return Err(DomainError::EmailExists { email });
        }

        let gespeichert = verein.with_version(expected.next());
        map.insert(*gespeichert.id(), gespeichert.clone());
        Ok(gespeichert)
    }

    async fn delete_by_id(&self, id: &VereinId) -> DomainResult<bool> {
        let mut map = self.sperren()?;
        Ok(map.remove(id).is_some())
    }
}

impl InMemoryVereinRepository {
    fn sperren(&self) -> DomainResult<std::sync::MutexGuard<'_, HashMap<VereinId, Verein>>> {
        self.vereine.lock().map_err(|_| DomainError::Repository {
            reason: "store lock poisoned".to_string(),
        })
    }
}
