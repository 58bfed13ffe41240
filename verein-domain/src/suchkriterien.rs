//! 搜索条件（Suchkriterien）
//!
//! 把“字段名 → 搜索值”的键值对解析为类型化的条件，并在规约之上实现
//! 对 Verein 的匹配。未知键不会被静默忽略，而是以
//! [`DomainError::InvalidCriteria`] 拒绝。
//!
use crate::error::{DomainError, DomainResult};
use crate::specification::Specification;
use crate::verein::Verein;

/// 单个搜索条件
///
/// 匹配语义：
/// - `name` / `email`：大小写不敏感的子串匹配（email 对任一邮箱命中即可）
/// - `plz`：前缀匹配
/// - `ort`：大小写不敏感的前缀匹配
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suchkriterium {
    Name(String),
    Email(String),
    Plz(String),
    Ort(String),
}

impl Suchkriterium {
    /// 从键值对解析一个条件，未知键报 `InvalidCriteria`
    pub fn parse(key: &str, value: &str) -> DomainResult<Self> {
        let value = value.to_string();
        match key {
            "name" => Ok(Self::Name(value)),
            "email" => Ok(Self::Email(value)),
            "plz" => Ok(Self::Plz(value)),
            "ort" => Ok(Self::Ort(value)),
            _ => Err(DomainError::InvalidCriteria {
                key: key.to_string(),
            }),
        }
    }
}

impl Specification<Verein> for Suchkriterium {
    fn is_satisfied_by(&self, verein: &Verein) -> bool {
        match self {
            Self::Name(teil) => verein
                .name()
                .to_lowercase()
                .contains(&teil.to_lowercase()),
            Self::Email(teil) => {
                let teil = teil.to_lowercase();
                verein
                    .emails()
                    .iter()
                    .any(|email| email.as_str().to_lowercase().contains(&teil))
            }
            Self::Plz(prefix) => verein.adresse().plz().starts_with(prefix.as_str()),
            Self::Ort(prefix) => verein
                .adresse()
                .ort()
                .to_lowercase()
                .starts_with(&prefix.to_lowercase()),
        }
    }
}

/// 一组合取的搜索条件；空条件匹配所有聚合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suchkriterien(Vec<Suchkriterium>);

impl Suchkriterien {
    /// 解析键值对集合，任一未知键即整体失败
    pub fn parse<'a, I>(pairs: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let kriterien = pairs
            .into_iter()
            .map(|(key, value)| Suchkriterium::parse(key, value))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self(kriterien))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Specification<Verein> for Suchkriterien {
    fn is_satisfied_by(&self, verein: &Verein) -> bool {
        self.0.iter().all(|k| k.is_satisfied_by(verein))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_object::{Adresse, Email};

    fn testverein() -> Verein {
        Verein::builder()
            .name("FC Musterstadt")
            .adresse(Adresse::new("76133", "Karlsruhe"))
            .emails(vec![Email::new("Vorstand@FC-Musterstadt.de")])
            .build()
    }

    // 测试未知键被拒绝
    #[test]
    fn test_parse_unknown_key() {
        let err = Suchkriterium::parse("kategorie", "5").unwrap_err();
        assert!(matches!(err, DomainError::InvalidCriteria { key } if key == "kategorie"));
    }

    // 测试名称子串匹配大小写不敏感
    #[test]
    fn test_name_substring() {
        let verein = testverein();
        assert!(Suchkriterium::parse("name", "muster")
            .unwrap()
            .is_satisfied_by(&verein));
        assert!(!Suchkriterium::parse("name", "alpha")
            .unwrap()
            .is_satisfied_by(&verein));
    }

    // 测试邮箱对任一地址命中
    #[test]
    fn test_email_any_match() {
        let verein = testverein();
        assert!(Suchkriterium::parse("email", "vorstand@")
            .unwrap()
            .is_satisfied_by(&verein));
    }

    // 测试邮政编码前缀匹配
    #[test]
    fn test_plz_prefix() {
        let verein = testverein();
        assert!(Suchkriterium::parse("plz", "761").unwrap().is_satisfied_by(&verein));
        assert!(!Suchkriterium::parse("plz", "10").unwrap().is_satisfied_by(&verein));
    }

    // 测试地点前缀匹配大小写不敏感
    #[test]
    fn test_ort_prefix() {
        let verein = testverein();
        assert!(Suchkriterium::parse("ort", "karls").unwrap().is_satisfied_by(&verein));
        assert!(!Suchkriterium::parse("ort", "ruhe").unwrap().is_satisfied_by(&verein));
    }

    // 测试多条件合取与空条件
    #[test]
    fn test_suchkriterien_conjunction() {
        let verein = testverein();

        let alle = Suchkriterien::parse([("name", "fc"), ("ort", "karlsruhe")]).unwrap();
        assert!(alle.is_satisfied_by(&verein));

        let keins = Suchkriterien::parse([("name", "fc"), ("ort", "berlin")]).unwrap();
        assert!(!keins.is_satisfied_by(&verein));

        let leer = Suchkriterien::default();
        assert!(leer.is_empty());
        assert!(leer.is_satisfied_by(&verein));
    }

    // 测试解析时对未知键整体失败
    #[test]
    fn test_suchkriterien_parse_fails_on_unknown_key() {
        let err = Suchkriterien::parse([("name", "fc"), ("foo", "bar")]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidCriteria { key } if key == "foo"));
    }
}
