// Locale-prefixed routing helpers
use serde::{Deserialize, Serialize};

/// Storefront locale. Non-default locales carry a `/{lang}-{country}`
/// path prefix in every app route; the default locale has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    pub language: String,
    pub country: String,
    pub path_prefix: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            country: "us".to_string(),
            path_prefix: String::new(),
        }
    }
}

impl Locale {
    /// Prefixes a root-relative path with this locale's path prefix.
    ///
    /// Paths that already carry the prefix (compared case-insensitively),
    /// external URLs and `#` placeholders are returned unchanged.
    pub fn localize(&self, to: &str) -> String {
        if self.path_prefix.is_empty() || !to.starts_with('/') {
            return to.to_string();
        }
        if to.to_lowercase().starts_with(&self.path_prefix.to_lowercase()) {
            return to.to_string();
        }
        format!("{}{}", self.path_prefix, to)
    }
}

/// Removes one leading locale segment (`/en-us/pages/x` -> `/pages/x`).
/// Pathnames without a locale segment come back untouched.
pub fn strip_locale_prefix(pathname: &str) -> &str {
    let Some(rest) = pathname.strip_prefix('/') else {
        return pathname;
    };
    match rest.split_once('/') {
        Some((first, _)) if is_locale_segment(first) => &pathname[1 + first.len()..],
        None if is_locale_segment(rest) => "/",
        _ => pathname,
    }
}

fn is_locale_segment(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 5
        && bytes[2] == b'-'
        && bytes[..2].iter().all(u8::is_ascii_alphabetic)
        && bytes[3..].iter().all(u8::is_ascii_alphabetic)
}
