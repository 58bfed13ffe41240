//! Verein 聚合根
//!
//! 带标识与版本（乐观锁）的核心领域实体；地址、邮箱与营业额作为值对象
//! 内嵌于聚合之中，随聚合一同创建与删除（严格组合，无独立生命周期）。
//!
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult, Violation};
use crate::value_object::{Adresse, Email, Umsatz, ValueObject, Version};
use bon::Builder;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;
use uuid::Uuid;

/// 名称的最大长度
pub const MAX_NAME_LEN: usize = 40;

/// Verein 的标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VereinId(Uuid);

impl VereinId {
    /// 生成随机标识（仅写服务在新建时调用）
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for VereinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for VereinId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

/// Verein（协会/俱乐部）聚合根
///
/// 构建通过 builder 进行；标识与版本只能由写服务或仓储设置，
/// 传输层送入的数据不会携带有效的 id/version。
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
pub struct Verein {
    #[builder(default = VereinId::random())]
    id: VereinId,
    #[builder(default)]
    version: Version,
    #[builder(into)]
    name: String,
    gruendungsdatum: Option<NaiveDate>,
    homepage: Option<Url>,
    adresse: Adresse,
    #[builder(default)]
    emails: Vec<Email>,
    #[builder(default)]
    umsaetze: Vec<Umsatz>,
}

impl Verein {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gruendungsdatum(&self) -> Option<NaiveDate> {
        self.gruendungsdatum
    }

    pub fn homepage(&self) -> Option<&Url> {
        self.homepage.as_ref()
    }

    pub fn adresse(&self) -> &Adresse {
        &self.adresse
    }

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    pub fn umsaetze(&self) -> &[Umsatz] {
        &self.umsaetze
    }

    /// 替换标识（写服务在新建时分配）
    #[must_use]
    pub fn with_id(mut self, id: VereinId) -> Self {
        self.id = id;
        self
    }

    /// 替换版本（仓储在 CAS 成功后递增）
    #[must_use]
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// 用新数据覆盖可变载荷字段，标识与版本保持不变
    pub fn set(&mut self, daten: Verein) {
        self.name = daten.name;
        self.gruendungsdatum = daten.gruendungsdatum;
        self.homepage = daten.homepage;
        self.adresse = daten.adresse;
        self.emails = daten.emails;
        self.umsaetze = daten.umsaetze;
    }

    /// 校验所有结构约束，逐字段收集违例
    ///
    /// 校验失败不产生任何持久化副作用；违例按字段路径聚合后以
    /// [`DomainError::ConstraintViolations`] 返回。
    pub fn validate(&self) -> DomainResult<()> {
        let mut violations = Vec::new();

        if self.name.trim().is_empty() {
            violations.push(Violation::new("name", "must not be empty"));
        } else if self.name.chars().count() > MAX_NAME_LEN {
            violations.push(Violation::new("name", "must not exceed 40 characters"));
        }

        if let Some(datum) = self.gruendungsdatum {
            if datum >= Utc::now().date_naive() {
                violations.push(Violation::new("gruendungsdatum", "must be in the past"));
            }
        }

        if let Err(errs) = self.adresse.validate() {
            violations.extend(errs.into_iter().map(|v| v.prefixed("adresse")));
        }

        for (i, email) in self.emails.iter().enumerate() {
            if let Err(errs) = email.validate() {
                violations.extend(errs.into_iter().map(|v| v.at(format!("emails[{i}]"))));
            }
        }

        for (i, umsatz) in self.umsaetze.iter().enumerate() {
            if let Err(errs) = umsatz.validate() {
                violations.extend(errs.into_iter().map(|v| v.prefixed(&format!("umsaetze[{i}]"))));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::ConstraintViolations { violations })
        }
    }
}

impl Entity for Verein {
    type Id = VereinId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> Version {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valider_verein() -> Verein {
        Verein::builder()
            .name("Musterverein")
            .gruendungsdatum(NaiveDate::from_ymd_opt(1907, 5, 1).unwrap())
            .adresse(Adresse::new("76133", "Karlsruhe"))
            .emails(vec![Email::new("kontakt@musterverein.de")])
            .umsaetze(vec![Umsatz::new(1234.5, crate::value_object::Waehrung::EUR)])
            .build()
    }

    // 测试合法聚合通过校验
    #[test]
    fn test_validate_ok() {
        assert!(valider_verein().validate().is_ok());
    }

    // 测试新建聚合的默认版本为 0
    #[test]
    fn test_builder_defaults() {
        let verein = valider_verein();
        assert!(verein.version().is_new());
    }

    // 测试逐字段收集违例
    #[test]
    fn test_validate_collects_violations() {
        let verein = Verein::builder()
            .name("")
            .adresse(Adresse::new("761", "Karlsruhe"))
            .emails(vec![Email::new("kaputt")])
            .build();

        let err = verein.validate().unwrap_err();
        let DomainError::ConstraintViolations { violations } = err else {
            panic!("expected ConstraintViolations");
        };
        let fields: Vec<_> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, ["name", "adresse.plz", "emails[0]"]);
    }

    // 测试名称长度上限
    #[test]
    fn test_validate_name_too_long() {
        let verein = Verein::builder()
            .name("x".repeat(41))
            .adresse(Adresse::new("76133", "Karlsruhe"))
            .build();

        assert!(matches!(
            verein.validate(),
            Err(DomainError::ConstraintViolations { .. })
        ));
    }

    // 测试成立日期必须在过去
    #[test]
    fn test_validate_gruendungsdatum_in_future() {
        let morgen = Utc::now().date_naive() + chrono::Days::new(1);
        let verein = Verein::builder()
            .name("Musterverein")
            .gruendungsdatum(morgen)
            .adresse(Adresse::new("76133", "Karlsruhe"))
            .build();

        let Err(DomainError::ConstraintViolations { violations }) = verein.validate() else {
            panic!("expected ConstraintViolations");
        };
        assert_eq!(violations[0].field, "gruendungsdatum");
    }

    // 测试 set 覆盖载荷字段但保留标识与版本
    #[test]
    fn test_set_keeps_identity_and_version() {
        let mut verein = valider_verein().with_version(Version::from_value(3));
        let id = *Entity::id(&verein);

        let neu = Verein::builder()
            .name("Neuer Name")
            .adresse(Adresse::new("10115", "Berlin"))
            .build();
        verein.set(neu);

        assert_eq!(verein.name(), "Neuer Name");
        assert_eq!(verein.adresse().ort(), "Berlin");
        assert_eq!(*Entity::id(&verein), id);
        assert_eq!(verein.version(), Version::from_value(3));
    }

    // 测试标识的解析与显示往返
    #[test]
    fn test_verein_id_roundtrip() {
        let id = VereinId::random();
        let parsed: VereinId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);

        assert!("keine-uuid".parse::<VereinId>().is_err());
    }
}
