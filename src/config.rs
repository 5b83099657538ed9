use crate::locale::Locale;
use crate::model::{ConfigError, CustomPrefixes};
use serde::Deserialize;
use std::fs;

/// Deployment configuration.
///
/// `custom_prefixes` renames the platform's default path roots to the
/// app's own routes, e.g. `/blogs/news` -> `/news` and
/// `/collections/all` -> `/products`:
///
/// ```json
/// {
///   "store_domain": "demo.myshopify.com",
///   "locale": {"language": "en", "country": "us", "path_prefix": ""},
///   "custom_prefixes": {"BLOG": "", "CATALOG": "products"}
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Content-platform host whose links also count as internal,
    /// alongside the shop's primary domain.
    pub store_domain: Option<String>,
    pub locale: Locale,
    pub custom_prefixes: CustomPrefixes,
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
