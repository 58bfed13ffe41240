//! 超媒体表示（HAL 风格）
//!
//! 标识与版本不出现在响应体中：标识藏在 `_links.self` 里，版本走 ETag。
//!
use serde::Serialize;
use verein_domain::entity::Entity;
use verein_domain::value_object::{Adresse, Email, Umsatz};
use verein_domain::verein::Verein;

use super::VEREIN_PATH;

#[derive(Debug, Serialize)]
pub struct Link {
    pub href: String,
}

impl Link {
    fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// 可导航的链接集合：self 指向单个资源，list/add 指向集合资源
#[derive(Debug, Serialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Link,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove: Option<Link>,
}

/// 单个 Verein 的响应表示
#[derive(Debug, Serialize)]
pub struct VereinModel {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gruendungsdatum: Option<chrono::NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<url::Url>,
    pub adresse: Adresse,
    pub emails: Vec<Email>,
    pub umsaetze: Vec<Umsatz>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl VereinModel {
    /// 带完整导航链接的表示（按 ID 查找）
    pub fn with_links(verein: &Verein) -> Self {
        let id_uri = format!("{VEREIN_PATH}/{}", verein.id());
        Self::new(
            verein,
            Links {
                self_link: Link::new(&id_uri),
                list: Some(Link::new(VEREIN_PATH)),
                add: Some(Link::new(VEREIN_PATH)),
                update: Some(Link::new(&id_uri)),
                remove: Some(Link::new(&id_uri)),
            },
        )
    }

    /// 集合响应中的元素只携带 self 链接
    pub fn with_self(verein: &Verein) -> Self {
        let id_uri = format!("{VEREIN_PATH}/{}", verein.id());
        Self::new(
            verein,
            Links {
                self_link: Link::new(id_uri),
                list: None,
                add: None,
                update: None,
                remove: None,
            },
        )
    }

    fn new(verein: &Verein, links: Links) -> Self {
        Self {
            name: verein.name().to_string(),
            gruendungsdatum: verein.gruendungsdatum(),
            homepage: verein.homepage().cloned(),
            adresse: verein.adresse().clone(),
            emails: verein.emails().to_vec(),
            umsaetze: verein.umsaetze().to_vec(),
            links,
        }
    }
}

/// 集合表示：`_embedded.vereine`，无命中时为空列表
#[derive(Debug, Serialize)]
pub struct VereineModel {
    #[serde(rename = "_embedded")]
    pub embedded: Embedded,
}

#[derive(Debug, Serialize)]
pub struct Embedded {
    pub vereine: Vec<VereinModel>,
}

impl VereineModel {
    pub fn new(vereine: &[Verein]) -> Self {
        Self {
            embedded: Embedded {
                vereine: vereine.iter().map(VereinModel::with_self).collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verein_domain::value_object::Adresse;

    #[test]
    fn test_links_for_single_resource() {
        let verein = Verein::builder()
            .name("Alpha")
            .adresse(Adresse::new("76133", "Karlsruhe"))
            .build();

        let model = VereinModel::with_links(&verein);
        let erwartet = format!("/verein/{}", verein.id());
        assert_eq!(model.links.self_link.href, erwartet);
        assert_eq!(model.links.list.unwrap().href, "/verein");
        assert_eq!(model.links.remove.unwrap().href, erwartet);
    }

    #[test]
    fn test_collection_elements_only_carry_self() {
        let verein = Verein::builder()
            .name("Alpha")
            .adresse(Adresse::new("76133", "Karlsruhe"))
            .build();

        let model = VereineModel::new(std::slice::from_ref(&verein));
        let element = &model.embedded.vereine[0];
        assert!(element.links.list.is_none());
        assert!(element.links.update.is_none());
    }
}
