// Storefront-specific layout response parsing
use crate::model::{ParseError, RawLayout};

pub trait LayoutParser {
    fn parse(&self, body: &str) -> Result<RawLayout, ParseError>;
}

pub struct StorefrontLayoutParser;

impl StorefrontLayoutParser {
    pub fn new() -> Self {
        Self
    }
}

impl LayoutParser for StorefrontLayoutParser {
    /// Parses a captured layout query response. Accepts both the bare
    /// layout object and the standard `{"data": {...}}` envelope.
    fn parse(&self, body: &str) -> Result<RawLayout, ParseError> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        let doc = match value.get("data") {
            Some(data) if data.is_object() => data.clone(),
            _ => value,
        };

        // The API never answers a layout query without a shop object;
        // its absence means the response is not a layout response.
        if doc.get("shop").is_none_or(serde_json::Value::is_null) {
            return Err(ParseError::MissingShop);
        }

        let layout: RawLayout = serde_json::from_value(doc)?;
        Ok(layout)
    }
}
