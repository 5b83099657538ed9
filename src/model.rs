// Core structs: raw and normalized menu trees, layout payloads, errors
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Kind of content a menu item links to, as tagged by the content platform.
///
/// Tags the platform may add later land in [`ResourceType::Unknown`] and are
/// treated as plain internal links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    Frontpage,
    Collection,
    Collections,
    Catalog,
    Product,
    Page,
    Blog,
    Article,
    Search,
    ShopPolicy,
    Http,
    #[serde(other)]
    Unknown,
}

/// Per-deployment overrides for the platform's default path roots,
/// keyed by resource type (e.g. `{"BLOG": "", "CATALOG": "products"}`).
pub type CustomPrefixes = HashMap<ResourceType, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMenuItem {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub items: Vec<RawMenuItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMenu {
    pub id: String,
    #[serde(default)]
    pub items: Vec<RawMenuItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub primary_domain: Domain,
}

/// Layout response as returned by the content API, before URL rewriting.
/// A menu handle that matched nothing arrives as `null` and stays `None`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLayout {
    pub shop: Shop,
    #[serde(default)]
    pub header_menu: Option<RawMenu>,
    #[serde(default)]
    pub footer_menu: Option<RawMenu>,
}

/// Anchor target for a normalized link. Serialized as the `target`
/// attribute values the navigation renderer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    #[serde(rename = "_self")]
    SameWindow,
    #[serde(rename = "_blank")]
    NewWindow,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedMenuItem {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub to: String,
    pub target: Target,
    pub items: Vec<NormalizedMenuItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedMenu {
    pub id: String,
    pub items: Vec<NormalizedMenuItem>,
}

/// Render-ready layout payload: shop metadata plus the normalized menus.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub shop: Shop,
    pub header_menu: Option<NormalizedMenu>,
    pub footer_menu: Option<NormalizedMenu>,
}

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("menu item URL is not a valid absolute URL: {url}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("layout response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("layout response contains no shop object")]
    MissingShop,

    #[error("shop primary domain is not a usable absolute URL: {url}")]
    InvalidPrimaryDomain { url: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_type_deserializes_platform_tags() {
        let ty: ResourceType = serde_json::from_str("\"SHOP_POLICY\"").unwrap();
        assert_eq!(ty, ResourceType::ShopPolicy);
    }

    #[test]
    fn resource_type_unrecognized_tag_becomes_unknown() {
        let ty: ResourceType = serde_json::from_str("\"METAOBJECT\"").unwrap();
        assert_eq!(ty, ResourceType::Unknown);
    }

    #[test]
    fn target_serializes_as_anchor_values() {
        assert_eq!(serde_json::to_string(&Target::SameWindow).unwrap(), "\"_self\"");
        assert_eq!(serde_json::to_string(&Target::NewWindow).unwrap(), "\"_blank\"");
    }

    #[test]
    fn raw_menu_item_url_and_children_default_when_absent() {
        let item: RawMenuItem =
            serde_json::from_str(r#"{"id": "gid://1", "title": "About", "type": "PAGE"}"#).unwrap();
        assert!(item.url.is_none());
        assert!(item.items.is_empty());
    }

    #[test]
    fn custom_prefixes_deserialize_with_typed_keys() {
        let prefixes: CustomPrefixes =
            serde_json::from_str(r#"{"BLOG": "", "CATALOG": "products"}"#).unwrap();
        assert_eq!(prefixes.get(&ResourceType::Catalog).unwrap(), "products");
        assert_eq!(prefixes.get(&ResourceType::Blog).unwrap(), "");
    }
}
