// Layout assembly: raw layout response -> render-ready payload
use tracing::{debug, info};
use url::Url;

use crate::config::AppConfig;
use crate::locale::Locale;
use crate::model::{Layout, NormalizedMenu, NormalizedMenuItem, ParseError, RawLayout};
use crate::normalizer::{normalize_menu, NormalizeContext};

/// Normalizes both menu slots of a layout response against the shop's
/// primary domain and the deployment config.
///
/// A menu slot the content API had no handle match for stays `None`;
/// that is an empty navigation slot, not an error.
pub fn build_layout(raw: &RawLayout, config: &AppConfig) -> Result<Layout, ParseError> {
    let primary_url = &raw.shop.primary_domain.url;
    let primary_host = Url::parse(primary_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .ok_or_else(|| ParseError::InvalidPrimaryDomain {
            url: primary_url.clone(),
        })?;
    debug!(host = %primary_host, "classifying menu links against primary domain");

    let ctx = NormalizeContext {
        primary_host,
        store_host: config.store_domain.clone(),
        custom_prefixes: config.custom_prefixes.clone(),
    };

    let header_menu = raw
        .header_menu
        .as_ref()
        .map(|menu| localize_menu(normalize_menu(menu, &ctx), &config.locale));
    let footer_menu = raw
        .footer_menu
        .as_ref()
        .map(|menu| localize_menu(normalize_menu(menu, &ctx), &config.locale));

    if header_menu.is_none() {
        info!("no header menu in layout response; slot left empty");
    }
    if footer_menu.is_none() {
        info!("no footer menu in layout response; slot left empty");
    }

    Ok(Layout {
        shop: raw.shop.clone(),
        header_menu,
        footer_menu,
    })
}

// The selected locale's path prefix goes on after normalization, so the
// emitted targets are exactly what the navigation renderer links to.
fn localize_menu(menu: NormalizedMenu, locale: &Locale) -> NormalizedMenu {
    if locale.path_prefix.is_empty() {
        return menu;
    }
    NormalizedMenu {
        id: menu.id,
        items: menu.items.into_iter().map(|item| localize_item(item, locale)).collect(),
    }
}

fn localize_item(item: NormalizedMenuItem, locale: &Locale) -> NormalizedMenuItem {
    let to = locale.localize(&item.to);
    NormalizedMenuItem {
        id: item.id,
        title: item.title,
        resource_type: item.resource_type,
        to,
        target: item.target,
        items: item
            .items
            .into_iter()
            .map(|child| localize_item(child, locale))
            .collect(),
    }
}
