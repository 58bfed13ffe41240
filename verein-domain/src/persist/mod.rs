//! 持久化端口（persist）
//!
//! 定义 Verein 聚合的仓储接口：按标识读取、整表扫描、带邮箱唯一约束的写入，
//! 以及以 (id, version) 做比较交换（CAS）的更新。具体存储后端由上层提供实现并注入。
//!
mod verein_repository;

pub use verein_repository::VereinRepository;
