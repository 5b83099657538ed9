pub mod layout_parser;

pub use layout_parser::{LayoutParser, StorefrontLayoutParser};
