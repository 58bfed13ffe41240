//! Verein 应用层（verein-application）
//!
//! 在领域层之上提供读/写分离的应用服务：
//! - [`VereinReadService`]：按标识与搜索条件的只读访问
//! - [`VereinWriteService`]：带校验、邮箱唯一与乐观锁的新建/更新/删除
//! - [`InMemoryVereinRepository`]：进程内的仓储实现（每个逻辑操作持锁原子执行）
//!
//! REST 与 GraphQL 适配层共用同一服务语义，业务规则不在适配层重复。
//!
pub mod inmemory_repository;
pub mod read_service;
pub mod write_service;

pub use inmemory_repository::InMemoryVereinRepository;
pub use read_service::VereinReadService;
pub use write_service::VereinWriteService;
