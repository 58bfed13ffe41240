//! GraphQL 输入类型与到领域聚合的转换
//!
use async_graphql::InputObject;
use chrono::NaiveDate;
use url::Url;
use verein_domain::error::{DomainError, DomainResult, Violation};
use verein_domain::value_object::{Adresse, Email, Umsatz, Waehrung};
use verein_domain::verein::Verein;

/// 类型化的搜索条件；所有字段可选
#[derive(Debug, Default, InputObject)]
pub struct SuchkriterienInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub plz: Option<String>,
    pub ort: Option<String>,
}

impl SuchkriterienInput {
    /// 转换为读服务的键值对
    pub fn into_pairs(self) -> Vec<(String, String)> {
        [
            ("name", self.name),
            ("email", self.email),
            ("plz", self.plz),
            ("ort", self.ort),
        ]
        .into_iter()
        .filter_map(|(key, wert)| wert.map(|w| (key.to_string(), w)))
        .collect()
    }
}

#[derive(Debug, InputObject)]
pub struct AdresseInput {
    pub plz: String,
    pub ort: String,
}

#[derive(Debug, InputObject)]
pub struct UmsatzInput {
    pub betrag: f64,
    pub waehrung: String,
}

/// 新建/更新的输入数据
///
/// 成立日期以字符串传入并在转换时解析，解析失败映射到
/// [`DomainError::DateTimeParse`]，与校验违例区分。
#[derive(Debug, InputObject)]
pub struct VereinInput {
    pub name: String,
    pub gruendungsdatum: Option<String>,
    pub homepage: Option<String>,
    pub adresse: AdresseInput,
    pub emails: Option<Vec<String>>,
    pub umsaetze: Option<Vec<UmsatzInput>>,
}

impl VereinInput {
    /// 转换为领域聚合；结构约束的检查留给写服务
    pub fn into_verein(self) -> DomainResult<Verein> {
        let gruendungsdatum = match self.gruendungsdatum {
            Some(raw) => Some(NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
                DomainError::DateTimeParse {
                    field: "gruendungsdatum".to_string(),
                    raw,
                }
            })?),
            None => None,
        };

        let homepage = match self.homepage {
            Some(raw) => {
                Some(
                    Url::parse(&raw).map_err(|_| DomainError::ConstraintViolations {
                        violations: vec![Violation::new("homepage", "is not a valid URL")],
                    })?,
                )
            }
            None => None,
        };

        let mut umsaetze = Vec::new();
        for (i, umsatz) in self.umsaetze.unwrap_or_default().into_iter().enumerate() {
            let waehrung: Waehrung = umsatz.waehrung.parse().map_err(|_| {
                DomainError::ConstraintViolations {
                    violations: vec![Violation::new(
                        format!("umsaetze[{i}].waehrung"),
                        "unsupported currency",
                    )],
                }
            })?;
            umsaetze.push(Umsatz::new(umsatz.betrag, waehrung));
        }

        Ok(Verein::builder()
            .name(self.name)
            .maybe_gruendungsdatum(gruendungsdatum)
            .maybe_homepage(homepage)
            .adresse(Adresse::new(self.adresse.plz, self.adresse.ort))
            .emails(
                self.emails
                    .unwrap_or_default()
                    .into_iter()
                    .map(Email::new)
                    .collect(),
            )
            .umsaetze(umsaetze)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> VereinInput {
        VereinInput {
            name: name.to_string(),
            gruendungsdatum: Some("1907-05-01".to_string()),
            homepage: None,
            adresse: AdresseInput {
                plz: "76133".to_string(),
                ort: "Karlsruhe".to_string(),
            },
            emails: Some(vec!["a@x.com".to_string()]),
            umsaetze: None,
        }
    }

    // 测试合法输入的转换
    #[test]
    fn test_into_verein() {
        let verein = input("FC Test").into_verein().unwrap();
        assert_eq!(verein.name(), "FC Test");
        assert_eq!(
            verein.gruendungsdatum(),
            NaiveDate::from_ymd_opt(1907, 5, 1)
        );
    }

    // 测试无法解析的日期映射到 DateTimeParse
    #[test]
    fn test_unparseable_date() {
        let mut kaputt = input("FC Test");
        kaputt.gruendungsdatum = Some("01.05.1907".to_string());

        let err = kaputt.into_verein().unwrap_err();
        assert!(matches!(
            err,
            DomainError::DateTimeParse { field, raw }
                if field == "gruendungsdatum" && raw == "01.05.1907"
        ));
    }

    // 测试未知货币被拒绝
    #[test]
    fn test_unsupported_currency() {
        let mut kaputt = input("FC Test");
        kaputt.umsaetze = Some(vec![UmsatzInput {
            betrag: 1.0,
            waehrung: "XYZ".to_string(),
        }]);

        let err = kaputt.into_verein().unwrap_err();
        assert!(matches!(err, DomainError::ConstraintViolations { .. }));
    }

    // 测试搜索条件转换只保留已设置的字段
    #[test]
    fn test_suchkriterien_pairs() {
        let input = SuchkriterienInput {
            name: Some("fc".to_string()),
            ..Default::default()
        };
        assert_eq!(input.into_pairs(), vec![("name".to_string(), "fc".to_string())]);
    }
}
