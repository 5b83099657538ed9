mod config;
mod layout;
mod locale;
mod model;
mod normalizer;
mod parser;
mod utils;

use config::load_config;
use layout::build_layout;
use parser::{LayoutParser, StorefrontLayoutParser};
use std::env;
use std::fs;
use std::process::ExitCode;
use tracing::{error, info};
use utils::{count_items, count_raw_items, host_of};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let args: Vec<String> = env::args().collect();
    let config_path = args.get(1).map(String::as_str).unwrap_or("config.json");
    let layout_path = args.get(2).map(String::as_str).unwrap_or("layout.json");

    // Load configuration from file
    let config = match load_config(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Read the captured layout response
    let body = match fs::read_to_string(layout_path) {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to read layout response {}: {}", layout_path, e);
            return ExitCode::FAILURE;
        }
    };

    info!("Parsing layout response...");
    let parser = StorefrontLayoutParser::new();
    let raw = match parser.parse(&body) {
        Ok(raw) => raw,
        Err(e) => {
            error!("Layout parse error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let raw_count = raw.header_menu.as_ref().map_or(0, |m| count_raw_items(&m.items))
        + raw.footer_menu.as_ref().map_or(0, |m| count_raw_items(&m.items));
    info!(
        "Normalizing {} menu items for {}...",
        raw_count,
        host_of(&raw.shop.primary_domain.url)
    );

    let layout = match build_layout(&raw, &config) {
        Ok(layout) => layout,
        Err(e) => {
            error!("Layout build error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let normalized_count = layout.header_menu.as_ref().map_or(0, |m| count_items(&m.items))
        + layout.footer_menu.as_ref().map_or(0, |m| count_items(&m.items));
    info!("Normalized {} of {} menu items", normalized_count, raw_count);

    match serde_json::to_string_pretty(&layout) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to serialize layout: {}", e);
            ExitCode::FAILURE
        }
    }
}
