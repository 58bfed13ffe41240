//! GraphQL 输出类型
//!
use async_graphql::{ID, SimpleObject};
use chrono::NaiveDate;
use verein_domain::entity::Entity;
use verein_domain::verein::Verein;

#[derive(Debug, SimpleObject)]
pub struct AdressePayload {
    pub plz: String,
    pub ort: String,
}

#[derive(Debug, SimpleObject)]
pub struct UmsatzPayload {
    pub betrag: f64,
    pub waehrung: String,
}

/// 查询结果中的 Verein；版本随数据返回，供后续 `updateVerein` 使用
#[derive(Debug, SimpleObject)]
pub struct VereinPayload {
    pub id: ID,
    pub version: u64,
    pub name: String,
    pub gruendungsdatum: Option<NaiveDate>,
    pub homepage: Option<String>,
    pub adresse: AdressePayload,
    pub emails: Vec<String>,
    pub umsaetze: Vec<UmsatzPayload>,
}

impl From<Verein> for VereinPayload {
    fn from(verein: Verein) -> Self {
        Self {
            id: ID(verein.id().to_string()),
            version: verein.version().value() as u64,
            name: verein.name().to_string(),
            gruendungsdatum: verein.gruendungsdatum(),
            homepage: verein.homepage().map(|url| url.to_string()),
            adresse: AdressePayload {
                plz: verein.adresse().plz().to_string(),
                ort: verein.adresse().ort().to_string(),
            },
            emails: verein
                .emails()
                .iter()
                .map(|email| email.as_str().to_string())
                .collect(),
            umsaetze: verein
                .umsaetze()
                .iter()
                .map(|umsatz| UmsatzPayload {
                    betrag: umsatz.betrag(),
                    waehrung: umsatz.waehrung().to_string(),
                })
                .collect(),
        }
    }
}

/// `createVerein` 的返回：新分配的标识
#[derive(Debug, SimpleObject)]
pub struct CreatePayload {
    pub id: ID,
}

/// `updateVerein` 的返回：递增后的版本
#[derive(Debug, SimpleObject)]
pub struct UpdatePayload {
    pub version: u64,
}
