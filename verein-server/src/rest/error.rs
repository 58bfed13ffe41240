//! 领域错误到 HTTP 状态与 Problem Detail 的映射
//!
//! 适配层唯一的职责边界：分类 → 协议表示，不重新解释业务语义。
//!
use axum::Json;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use verein_domain::error::DomainError;

use super::problem::{ProblemDetail, ProblemType};

/// `application/problem+json`
const PROBLEM_JSON: &str = "application/problem+json";

/// 携带请求 URI 的领域错误包装，作为所有 REST Handler 的错误类型
pub struct RestError {
    error: DomainError,
    instance: String,
}

impl RestError {
    pub fn new(error: DomainError, uri: &Uri) -> Self {
        Self {
            error,
            instance: uri.to_string(),
        }
    }
}

/// 分类到状态码的封闭映射
pub fn status_code(error: &DomainError) -> StatusCode {
    match error {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::VersionOutdated { .. } => StatusCode::PRECONDITION_FAILED,
        DomainError::EmailExists { .. } => StatusCode::CONFLICT,
        DomainError::VersionInvalid { .. }
        | DomainError::ConstraintViolations { .. }
        | DomainError::InvalidCriteria { .. }
        | DomainError::DateTimeParse { .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn problem_type(error: &DomainError) -> ProblemType {
    match error {
        DomainError::NotFound { .. } => ProblemType::NotFound,
        DomainError::VersionOutdated { .. } => ProblemType::Precondition,
        DomainError::EmailExists { .. } => ProblemType::Conflict,
        DomainError::ConstraintViolations { .. } => ProblemType::Constraints,
        DomainError::VersionInvalid { .. }
        | DomainError::InvalidCriteria { .. }
        | DomainError::DateTimeParse { .. } => ProblemType::BadRequest,
        _ => ProblemType::Internal,
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = status_code(&self.error);
        let title = status.canonical_reason().unwrap_or("Error");

        let mut problem = ProblemDetail::new(
            problem_type(&self.error),
            title,
            status.as_u16(),
            self.error.to_string(),
        )
        .with_instance(self.instance);

        if let DomainError::ConstraintViolations { violations } = self.error {
            problem = problem.with_violations(violations);
        }

        (
            status,
            [(header::CONTENT_TYPE, PROBLEM_JSON)],
            Json(problem),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verein_domain::error::Violation;
    use verein_domain::value_object::Version;
    use verein_domain::verein::VereinId;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = DomainError::NotFound {
            id: VereinId::random(),
        };
        assert_eq!(status_code(&err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_version_outdated_maps_to_412() {
        let err = DomainError::VersionOutdated {
            expected: Version::new(),
            actual: Version::from_value(2),
        };
        assert_eq!(status_code(&err), StatusCode::PRECONDITION_FAILED);
    }

    #[test]
    fn test_email_exists_maps_to_409() {
        let err = DomainError::EmailExists {
            email: "a@x.com".to_string(),
        };
        assert_eq!(status_code(&err), StatusCode::CONFLICT);
    }

    #[test]
    fn test_bad_request_group_maps_to_400() {
        let errors = [
            DomainError::VersionInvalid { raw: "xyz".into() },
            DomainError::ConstraintViolations {
                violations: vec![Violation::new("name", "must not be empty")],
            },
            DomainError::InvalidCriteria { key: "foo".into() },
            DomainError::DateTimeParse {
                field: "gruendungsdatum".into(),
                raw: "gestern".into(),
            },
        ];
        for err in errors {
            assert_eq!(status_code(&err), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_repository_maps_to_500() {
        let err = DomainError::Repository {
            reason: "kaputt".into(),
        };
        assert_eq!(status_code(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
