//! RFC 7807 Problem Detail
//!
use serde::Serialize;
use verein_domain::error::Violation;

/// Problem Detail 中 `type` 的基础路径
pub const PROBLEM_PATH: &str = "/problem/";

/// 错误的分类，作为 Problem Detail 中 `type` 的末段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemType {
    /// 字段约束违例
    Constraints,
    /// 版本前置条件不满足（412）
    Precondition,
    /// 语法或输入错误（400）
    BadRequest,
    /// 资源不存在（404）
    NotFound,
    /// 与现有状态冲突，如已占用的邮箱（409）
    Conflict,
    /// 服务端内部错误（500）
    Internal,
}

impl ProblemType {
    pub const fn value(self) -> &'static str {
        match self {
            Self::Constraints => "constraints",
            Self::Precondition => "precondition",
            Self::BadRequest => "badRequest",
            Self::NotFound => "notFound",
            Self::Conflict => "conflict",
            Self::Internal => "internal",
        }
    }
}

/// 响应体：`application/problem+json`
#[derive(Debug, Serialize)]
pub struct ProblemDetail {
    #[serde(rename = "type")]
    pub typ: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl ProblemDetail {
    pub fn new(
        problem_type: ProblemType,
        title: impl Into<String>,
        status: u16,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            typ: format!("{PROBLEM_PATH}{}", problem_type.value()),
            title: title.into(),
            status,
            detail: detail.into(),
            instance: None,
            violations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    #[must_use]
    pub fn with_violations(mut self, violations: Vec<Violation>) -> Self {
        self.violations = violations;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_uri() {
        let problem = ProblemDetail::new(ProblemType::Precondition, "Precondition Failed", 412, "x");
        assert_eq!(problem.typ, "/problem/precondition");
    }

    #[test]
    fn test_serialization_skips_empty_parts() {
        let problem = ProblemDetail::new(ProblemType::NotFound, "Not Found", 404, "nichts da");
        let json = serde_json::to_value(&problem).unwrap();
        assert!(json.get("instance").is_none());
        assert!(json.get("violations").is_none());
    }
}
