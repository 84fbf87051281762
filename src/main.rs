//! Varon Storefront Frontend Entry Point

mod api;
mod app;
mod badge;
mod bindings;
mod cart;
mod components;
mod config;
mod context;
mod error;
mod logging;
mod models;
mod store;

use app::App;
use config::StorefrontConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = StorefrontConfig::from_window();
    let level = config
        .as_ref()
        .map(|c| logging::parse_level(&c.log_level))
        .unwrap_or(log::LevelFilter::Info);
    if let Err(e) = logging::init(level) {
        web_sys::console::warn_1(&format!("[MAIN] logger not installed: {}", e).into());
    }

    let config = config.unwrap_or_else(|e| {
        log::warn!("using default config: {}", e);
        StorefrontConfig::default()
    });

    mount_to_body(move || view! { <App config=config.clone() /> });
}
