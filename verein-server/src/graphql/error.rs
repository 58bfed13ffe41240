//! 领域错误到类型化 GraphQL 错误的映射
//!
use async_graphql::{Error, ErrorExtensions, Value, value};
use verein_domain::error::DomainError;

/// 分类到 `errorType` 扩展名的封闭映射
fn error_type(error: &DomainError) -> &'static str {
    match error {
        DomainError::NotFound { .. } => "NotFoundError",
        DomainError::VersionOutdated { .. } => "VersionOutdatedError",
        DomainError::VersionInvalid { .. } => "VersionInvalidError",
        DomainError::ConstraintViolations { .. } => "ConstraintViolationError",
        DomainError::EmailExists { .. } => "EmailExistsError",
        DomainError::InvalidCriteria { .. } => "InvalidCriteriaError",
        DomainError::DateTimeParse { .. } => "DateTimeParseError",
        _ => "InternalError",
    }
}

/// 把领域错误转换为带结构化扩展的 GraphQL 错误
pub fn domain_error(error: DomainError) -> Error {
    let typ = error_type(&error);

    Error::new(error.to_string()).extend_with(|_, ext| {
        ext.set("errorType", typ);
        match &error {
            DomainError::NotFound { id } => {
                ext.set("id", id.to_string());
            }
            DomainError::VersionOutdated { expected, actual } => {
                ext.set("expected", expected.value() as u64);
                ext.set("actual", actual.value() as u64);
            }
            DomainError::VersionInvalid { raw } => {
                ext.set("raw", raw.as_str());
            }
            DomainError::ConstraintViolations { violations } => {
                let liste = violations
                    .iter()
                    .map(|v| {
                        value!({
                            "field": v.field.as_str(),
                            "message": v.message.as_str(),
                        })
                    })
                    .collect();
                ext.set("violations", Value::List(liste));
            }
            DomainError::EmailExists { email } => {
                ext.set("email", email.as_str());
            }
            DomainError::InvalidCriteria { key } => {
                ext.set("key", key.as_str());
            }
            DomainError::DateTimeParse { field, raw } => {
                ext.set("field", field.as_str());
                ext.set("raw", raw.as_str());
            }
            _ => {}
        }
    })
}
