//! 请求体 DTO
//!
//! 仅承载数据：标识与版本从不经由请求体进入领域层。
//!
use chrono::NaiveDate;
use serde::Deserialize;
use url::Url;
use verein_domain::value_object::{Adresse, Email, Umsatz, Waehrung};
use verein_domain::verein::Verein;

#[derive(Debug, Deserialize)]
pub struct AdresseDTO {
    pub plz: String,
    pub ort: String,
}

#[derive(Debug, Deserialize)]
pub struct UmsatzDTO {
    pub betrag: f64,
    pub waehrung: Waehrung,
}

#[derive(Debug, Deserialize)]
pub struct VereinDTO {
    pub name: String,
    pub gruendungsdatum: Option<NaiveDate>,
    pub homepage: Option<Url>,
    pub adresse: AdresseDTO,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub umsaetze: Vec<UmsatzDTO>,
}

impl VereinDTO {
    /// 转换为领域聚合；结构约束的检查留给写服务
    pub fn into_verein(self) -> Verein {
        Verein::builder()
            .name(self.name)
            .maybe_gruendungsdatum(self.gruendungsdatum)
            .maybe_homepage(self.homepage)
            .adresse(Adresse::new(self.adresse.plz, self.adresse.ort))
            .emails(self.emails.into_iter().map(Email::new).collect())
            .umsaetze(
                self.umsaetze
                    .into_iter()
                    .map(|u| Umsatz::new(u.betrag, u.waehrung))
                    .collect(),
            )
            .build()
    }
}
