//! 各请求共享的应用状态
//!
use std::sync::Arc;

use verein_application::{InMemoryVereinRepository, VereinReadService, VereinWriteService};

/// 当前装配的存储后端
pub type Repo = InMemoryVereinRepository;

/// 读/写服务共享同一个仓储；两个传输适配层共用同一服务语义
#[derive(Clone)]
pub struct AppState {
    pub read_service: Arc<VereinReadService<Repo>>,
    pub write_service: Arc<VereinWriteService<Repo>>,
}

impl AppState {
    pub fn new() -> Self {
        let repo = Arc::new(Repo::new());
        Self {
            read_service: Arc::new(VereinReadService::new(repo.clone())),
            write_service: Arc::new(VereinWriteService::new(repo)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
