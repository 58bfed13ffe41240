//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//!
use crate::error::Violation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 创建或持久化前对值对象进行验证
    fn validate(&self) -> Result<(), Self::Error>;
}

/// 版本号（用于乐观锁和并发控制）
///
/// 提供类型安全的版本号操作，避免直接使用 usize 导致的语义不明确问题。
///
/// # 示例
///
/// ```
/// use verein_domain::value_object::Version;
///
/// let v1 = Version::new();
/// assert_eq!(v1.value(), 0);
/// assert!(v1.is_new());
///
/// let v2 = v1.next();
/// assert_eq!(v2.value(), 1);
/// assert!(v2 > v1);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Version(usize);

impl Version {
    /// 创建初始版本（版本号为 0）
    pub const fn new() -> Self {
        Self(0)
    }

    /// 从值创建版本号
    pub const fn from_value(value: usize) -> Self {
        Self(value)
    }

    /// 获取下一个版本号
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// 获取版本号的值
    pub const fn value(&self) -> usize {
        self.0
    }

    /// 检查是否为初始版本
    pub fn is_new(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for Version {
    fn from(value: usize) -> Self {
        Self::from_value(value)
    }
}

impl From<Version> for usize {
    fn from(version: Version) -> Self {
        version.value()
    }
}

/// 邮箱地址
///
/// 结构合法性在 `validate` 中检查；全局唯一性由仓储在写入时保证。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Email {
    type Error = Vec<Violation>;

    fn validate(&self) -> Result<(), Self::Error> {
        let mut parts = self.0.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        let ok = !local.is_empty()
            && !domain.is_empty()
            && !domain.contains('@')
            && !self.0.chars().any(char::is_whitespace);
        if ok {
            Ok(())
        } else {
            Err(vec![Violation::new("email", "is not a valid email address")])
        }
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 邮政编码的固定位数
const PLZ_LEN: usize = 5;

/// 邮政地址（由 Verein 独占拥有，无独立标识）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adresse {
    plz: String,
    ort: String,
}

impl Adresse {
    pub fn new(plz: impl Into<String>, ort: impl Into<String>) -> Self {
        Self {
            plz: plz.into(),
            ort: ort.into(),
        }
    }

    pub fn plz(&self) -> &str {
        &self.plz
    }

    pub fn ort(&self) -> &str {
        &self.ort
    }
}

impl ValueObject for Adresse {
    type Error = Vec<Violation>;

    fn validate(&self) -> Result<(), Self::Error> {
        let mut violations = Vec::new();
        if self.plz.len() != PLZ_LEN || !self.plz.bytes().all(|b| b.is_ascii_digit()) {
            violations.push(Violation::new("plz", "must be a 5-digit postal code"));
        }
        if self.ort.trim().is_empty() {
            violations.push(Violation::new("ort", "must not be empty"));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// 支持的货币（ISO 4217 子集）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Waehrung {
    EUR,
    USD,
    GBP,
    CHF,
}

impl FromStr for Waehrung {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EUR" => Ok(Self::EUR),
            "USD" => Ok(Self::USD),
            "GBP" => Ok(Self::GBP),
            "CHF" => Ok(Self::CHF),
            other => Err(format!("unsupported currency: {other}")),
        }
    }
}

impl fmt::Display for Waehrung {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::EUR => "EUR",
            Self::USD => "USD",
            Self::GBP => "GBP",
            Self::CHF => "CHF",
        };
        f.write_str(code)
    }
}

/// 营业额记录（金额 + 货币，由 Verein 独占拥有）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Umsatz {
    betrag: f64,
    waehrung: Waehrung,
}

impl Umsatz {
    pub fn new(betrag: f64, waehrung: Waehrung) -> Self {
        Self { betrag, waehrung }
    }

    pub fn betrag(&self) -> f64 {
        self.betrag
    }

    pub fn waehrung(&self) -> Waehrung {
        self.waehrung
    }
}

impl ValueObject for Umsatz {
    type Error = Vec<Violation>;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.betrag.is_finite() && self.betrag >= 0.0 {
            Ok(())
        } else {
            Err(vec![Violation::new("betrag", "must not be negative")])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 测试初始版本创建
    #[test]
    fn test_version_new() {
        let v = Version::new();
        assert_eq!(v.value(), 0);
        assert!(v.is_new());
    }

    // 测试获取下一个版本
    #[test]
    fn test_version_next() {
        let v1 = Version::from_value(10);
        let v2 = v1.next();

        assert_eq!(v1.value(), 10);
        assert_eq!(v2.value(), 11);
    }

    // 测试版本比较
    #[test]
    fn test_version_ordering() {
        let v0 = Version::from_value(0);
        let v1 = Version::from_value(1);

        assert!(v1 > v0);
        assert!(v0 < v1);
        assert_eq!(v1, Version::from_value(1));
    }

    // 测试 Display 实现
    #[test]
    fn test_version_display() {
        assert_eq!(format!("{}", Version::new()), "v0");
        assert_eq!(format!("{}", Version::from_value(5)), "v5");
    }

    // 测试序列化和反序列化
    #[test]
    fn test_version_serde() {
        let v = Version::from_value(42);

        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "42");

        let deserialized: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, v);
    }

    // 测试邮箱结构校验
    #[test]
    fn test_email_validate() {
        assert!(Email::new("a@x.com").validate().is_ok());
        assert!(Email::new("admin@acme").validate().is_ok());

        assert!(Email::new("").validate().is_err());
        assert!(Email::new("ohne-klammeraffe").validate().is_err());
        assert!(Email::new("@x.com").validate().is_err());
        assert!(Email::new("a@").validate().is_err());
        assert!(Email::new("a b@x.com").validate().is_err());
    }

    // 测试地址校验
    #[test]
    fn test_adresse_validate() {
        assert!(Adresse::new("76133", "Karlsruhe").validate().is_ok());

        let err = Adresse::new("761", "").validate().unwrap_err();
        let fields: Vec<_> = err.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, ["plz", "ort"]);
    }

    // 测试营业额校验
    #[test]
    fn test_umsatz_validate() {
        assert!(Umsatz::new(0.0, Waehrung::EUR).validate().is_ok());
        assert!(Umsatz::new(9999.5, Waehrung::CHF).validate().is_ok());
        assert!(Umsatz::new(-1.0, Waehrung::EUR).validate().is_err());
        assert!(Umsatz::new(f64::NAN, Waehrung::USD).validate().is_err());
    }

    // 测试货币解析
    #[test]
    fn test_waehrung_from_str() {
        assert_eq!("EUR".parse::<Waehrung>().unwrap(), Waehrung::EUR);
        assert!("XYZ".parse::<Waehrung>().is_err());
    }

    // 测试货币序列化为 ISO 代码
    #[test]
    fn test_waehrung_serde() {
        let json = serde_json::to_string(&Waehrung::CHF).unwrap();
        assert_eq!(json, "\"CHF\"");
    }
}
