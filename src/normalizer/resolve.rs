use crate::model::{CustomPrefixes, ResourceType};

/// Path root the content platform uses for each resource kind. `None`
/// for kinds whose routes are not prefix-shaped.
fn default_prefix(resource_type: ResourceType) -> Option<&'static str> {
    use ResourceType::*;
    match resource_type {
        Blog => Some("blogs"),
        Collection | Collections | Catalog => Some("collections"),
        Product => Some("products"),
        Page => Some("pages"),
        Search => Some("search"),
        ShopPolicy => Some("policies"),
        Frontpage | Article | Http | Unknown => None,
    }
}

/// Maps an internal pathname onto the app's route for the item's resource
/// type, applying any custom prefix override.
///
/// Re-resolving its own output yields the same route, so feeding an
/// already-normalized path back through is a no-op.
pub fn resolve_route(
    resource_type: ResourceType,
    pathname: &str,
    custom_prefixes: &CustomPrefixes,
) -> String {
    let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
    let handle = segments.last().copied().unwrap_or("");
    let prefix = custom_prefixes
        .get(&resource_type)
        .map(String::as_str)
        .or_else(|| default_prefix(resource_type));

    match resource_type {
        ResourceType::Frontpage => "/".to_string(),

        // Articles live under their blog: /{blog prefix}/{blog}/{article}.
        ResourceType::Article => {
            let blog_handle = segments
                .len()
                .checked_sub(2)
                .and_then(|i| segments.get(i))
                .copied()
                .unwrap_or("");
            let blog_prefix = custom_prefixes
                .get(&ResourceType::Blog)
                .map(String::as_str)
                .unwrap_or("blogs");
            join_segments(&[blog_prefix, blog_handle, handle])
        }

        // Index routes: the prefix is the whole path, the trailing
        // handle (e.g. "all") is dropped.
        ResourceType::Collections | ResourceType::Search | ResourceType::Catalog => {
            join_segments(&[prefix.unwrap_or("")])
        }

        // No route table entry to map onto: keep the pathname as-is.
        ResourceType::Http | ResourceType::Unknown => {
            if pathname.starts_with('/') {
                pathname.to_string()
            } else {
                format!("/{pathname}")
            }
        }

        _ => join_segments(&[prefix.unwrap_or(""), handle]),
    }
}

fn join_segments(segments: &[&str]) -> String {
    let kept: Vec<&str> = segments.iter().copied().filter(|s| !s.is_empty()).collect();
    if kept.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", kept.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn prefixes(entries: &[(ResourceType, &str)]) -> CustomPrefixes {
        entries
            .iter()
            .map(|(ty, prefix)| (*ty, prefix.to_string()))
            .collect()
    }

    #[test]
    fn default_platform_paths_survive_without_overrides() {
        let none = HashMap::new();
        assert_eq!(resolve_route(ResourceType::Page, "/pages/about", &none), "/pages/about");
        assert_eq!(
            resolve_route(ResourceType::Product, "/products/red-shirt", &none),
            "/products/red-shirt"
        );
        assert_eq!(resolve_route(ResourceType::Blog, "/blogs/news", &none), "/blogs/news");
        assert_eq!(
            resolve_route(ResourceType::Catalog, "/collections/all", &none),
            "/collections"
        );
    }

    #[test]
    fn catalog_override_renames_the_index_route() {
        let custom = prefixes(&[(ResourceType::Catalog, "products")]);
        assert_eq!(resolve_route(ResourceType::Catalog, "/collections/all", &custom), "/products");
    }

    #[test]
    fn empty_blog_override_drops_the_segment() {
        let custom = prefixes(&[(ResourceType::Blog, "")]);
        assert_eq!(resolve_route(ResourceType::Blog, "/blogs/news", &custom), "/news");
    }

    #[test]
    fn article_keeps_blog_and_article_handles() {
        let none = HashMap::new();
        assert_eq!(
            resolve_route(ResourceType::Article, "/blogs/news/my-post", &none),
            "/blogs/news/my-post"
        );
        let custom = prefixes(&[(ResourceType::Blog, "")]);
        assert_eq!(
            resolve_route(ResourceType::Article, "/blogs/news/my-post", &custom),
            "/news/my-post"
        );
    }

    #[test]
    fn frontpage_always_resolves_to_root() {
        let none = HashMap::new();
        assert_eq!(resolve_route(ResourceType::Frontpage, "/frontpage", &none), "/");
    }

    #[test]
    fn search_drops_query_handles() {
        let none = HashMap::new();
        assert_eq!(resolve_route(ResourceType::Search, "/search", &none), "/search");
    }

    #[test]
    fn unknown_type_keeps_pathname_untouched() {
        let custom = prefixes(&[(ResourceType::Catalog, "products")]);
        assert_eq!(
            resolve_route(ResourceType::Unknown, "/apps/loyalty", &custom),
            "/apps/loyalty"
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let custom = prefixes(&[(ResourceType::Blog, ""), (ResourceType::Catalog, "products")]);
        for (ty, pathname) in [
            (ResourceType::Catalog, "/collections/all"),
            (ResourceType::Blog, "/blogs/news"),
            (ResourceType::Article, "/blogs/news/my-post"),
            (ResourceType::Page, "/pages/about"),
            (ResourceType::Frontpage, "/"),
        ] {
            let once = resolve_route(ty, pathname, &custom);
            let twice = resolve_route(ty, &once, &custom);
            assert_eq!(once, twice, "double-resolving {pathname} changed the route");
        }
    }
}
