//! 领域层统一错误定义
//!
//! 封闭的失败分类，REST 与 GraphQL 适配层只消费该集合并各自渲染为
//! 协议相应的表示，业务规则不在适配层重复解释。
//!
use crate::value_object::Version;
use crate::verein::VereinId;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// 单个字段的约束违例
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// 违例字段（嵌套字段用点号路径，如 `adresse.plz`）
    pub field: String,
    /// 违例说明
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 为嵌套值对象的违例加上所属字段前缀
    #[must_use]
    pub fn prefixed(mut self, prefix: &str) -> Self {
        self.field = format!("{prefix}.{}", self.field);
        self
    }

    /// 覆盖违例的字段路径（用于集合元素，如 `emails[0]`）
    #[must_use]
    pub fn at(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// 统一错误类型（领域核心的封闭集合）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    /// 按 ID 查找不到 Verein
    #[error("verein not found: id={id}")]
    NotFound { id: VereinId },

    /// 乐观锁冲突：提交的版本不是当前存储版本
    #[error("version outdated: expected={expected}, actual={actual}")]
    VersionOutdated { expected: Version, actual: Version },

    /// 传输层送来的版本令牌格式不合法（与“过期但格式正确”区分）
    #[error("invalid version value: {raw}")]
    VersionInvalid { raw: String },

    /// 至少一个字段违反结构约束
    #[error("{count} constraint(s) violated", count = .violations.len())]
    ConstraintViolations { violations: Vec<Violation> },

    /// 邮箱已存在于另一个 Verein
    #[error("email already exists: {email}")]
    EmailExists { email: String },

    /// 未知的搜索条件键
    #[error("invalid search criterion: {key}")]
    InvalidCriteria { key: String },

    /// 日期字段无法解析
    #[error("cannot parse {field}: {raw}")]
    DateTimeParse { field: String, raw: String },

    /// 存储访问失败（由仓储实现转换而来）
    #[error("repository error: {reason}")]
    Repository { reason: String },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
