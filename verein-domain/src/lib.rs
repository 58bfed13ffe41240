//! Verein 领域层（verein-domain）
//!
//! 提供 Verein（协会/俱乐部）聚合的领域建模与契约：
//! - 聚合与实体（`verein`、`entity`）：带标识与版本（乐观锁）的 Verein 聚合
//! - 值对象（`value_object`）：版本号、地址、邮箱与营业额等不可变概念值
//! - 统一错误分类（`error`）：供 REST 与 GraphQL 适配层共享的封闭错误集合
//! - 搜索条件（`suchkriterien`）与规约（`specification`）：条件解析与匹配
//! - 持久化端口（`persist`）：以 (id, version) 做 CAS 的仓储接口
//!
//! 本 crate 与存储和传输实现解耦，仅定义领域层接口与最小必要的错误类型，
//! 具体存储后端与 HTTP/GraphQL 适配由上层 crate 提供并注入。
//!
pub mod entity;
pub mod error;
pub mod persist;
pub mod specification;
pub mod suchkriterien;
pub mod value_object;
pub mod verein;
