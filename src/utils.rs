// Utility functions
use crate::model::{NormalizedMenuItem, RawMenuItem};
use url::Url;

/// Total number of items in a raw menu tree, children included.
pub fn count_raw_items(items: &[RawMenuItem]) -> usize {
    items.iter().map(|item| 1 + count_raw_items(&item.items)).sum()
}

/// Total number of items in a normalized menu tree, children included.
pub fn count_items(items: &[NormalizedMenuItem]) -> usize {
    items.iter().map(|item| 1 + count_items(&item.items)).sum()
}

/// Hostname of a URL, falling back to the full string when it does not
/// parse. Only used for log messages.
pub fn host_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| url.to_string())
}
