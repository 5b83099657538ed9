use tracing::warn;
use url::Url;

use super::resolve::resolve_route;
use crate::locale::strip_locale_prefix;
use crate::model::{
    CustomPrefixes, MenuError, NormalizedMenu, NormalizedMenuItem, RawMenu, RawMenuItem,
    ResourceType, Target,
};

/// Non-navigating link target emitted for items that have no usable URL.
pub const PLACEHOLDER: &str = "#";

/// Everything the normalizer needs to know about the deployment whose
/// URLs it is rewriting.
#[derive(Debug, Clone)]
pub struct NormalizeContext {
    /// Host of the storefront's canonical domain. Links on this host are
    /// internal; everything else is external.
    pub primary_host: String,
    /// Content-platform host whose links are also internal, when the
    /// deployment serves from a domain other than the platform's.
    pub store_host: Option<String>,
    pub custom_prefixes: CustomPrefixes,
}

/// Rewrites a raw menu into a render-ready tree of app-local links.
///
/// Structure-preserving: every raw item produces exactly one normalized
/// item, children in the order received. An item whose URL cannot be
/// parsed degrades to a [`PLACEHOLDER`] link; its siblings and children
/// are unaffected.
pub fn normalize_menu(menu: &RawMenu, ctx: &NormalizeContext) -> NormalizedMenu {
    NormalizedMenu {
        id: menu.id.clone(),
        items: menu
            .items
            .iter()
            .map(|item| normalize_item_or_placeholder(item, ctx))
            .collect(),
    }
}

/// Strict variant of [`normalize_menu`]'s per-item step: a malformed URL
/// anywhere in the subtree fails the whole call instead of degrading.
pub fn normalize_item(
    item: &RawMenuItem,
    ctx: &NormalizeContext,
) -> Result<NormalizedMenuItem, MenuError> {
    let (to, target) = resolve_link(item, ctx)?;
    let items = item
        .items
        .iter()
        .map(|child| normalize_item(child, ctx))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(build_item(item, to, target, items))
}

fn normalize_item_or_placeholder(item: &RawMenuItem, ctx: &NormalizeContext) -> NormalizedMenuItem {
    let (to, target) = match resolve_link(item, ctx) {
        Ok(link) => link,
        Err(e) => {
            warn!(item_id = %item.id, error = %e, "degrading menu item to a placeholder link");
            (PLACEHOLDER.to_string(), Target::SameWindow)
        }
    };
    let items = item
        .items
        .iter()
        .map(|child| normalize_item_or_placeholder(child, ctx))
        .collect();
    build_item(item, to, target, items)
}

fn build_item(
    item: &RawMenuItem,
    to: String,
    target: Target,
    items: Vec<NormalizedMenuItem>,
) -> NormalizedMenuItem {
    NormalizedMenuItem {
        id: item.id.clone(),
        title: item.title.clone(),
        resource_type: item.resource_type,
        to,
        target,
        items,
    }
}

fn resolve_link(item: &RawMenuItem, ctx: &NormalizeContext) -> Result<(String, Target), MenuError> {
    let Some(url) = item.url.as_deref() else {
        return Ok((PLACEHOLDER.to_string(), Target::SameWindow));
    };
    if url == PLACEHOLDER {
        return Ok((PLACEHOLDER.to_string(), Target::SameWindow));
    }

    // Root-relative URLs are already app-local; re-resolving them keeps
    // normalization idempotent.
    if url.starts_with('/') {
        return Ok((resolve_internal(item.resource_type, url, ctx), Target::SameWindow));
    }

    let parsed = Url::parse(url).map_err(|source| MenuError::MalformedUrl {
        url: url.to_string(),
        source,
    })?;
    let host = parsed.host_str().unwrap_or_default();
    let internal = host == ctx.primary_host || ctx.store_host.as_deref() == Some(host);

    if internal {
        Ok((resolve_internal(item.resource_type, parsed.path(), ctx), Target::SameWindow))
    } else {
        Ok((url.to_string(), Target::NewWindow))
    }
}

fn resolve_internal(resource_type: ResourceType, pathname: &str, ctx: &NormalizeContext) -> String {
    let pathname = strip_locale_prefix(pathname);
    resolve_route(resource_type, pathname, &ctx.custom_prefixes)
}
