#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use catinfo_core::PageConfig;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Global page settings, set from command line
static PAGE_CONFIG: OnceLock<PageConfig> = OnceLock::new();

/// Get the page settings (set from command line or default)
pub fn get_page_config() -> PageConfig {
    PAGE_CONFIG.get().copied().unwrap_or_default()
}

/// Cat Info - all about our feline friends
#[derive(Parser, Debug)]
#[command(name = "catinfo-desktop")]
#[command(about = "Cat Info - a single-page tour of cats")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Window title
    #[arg(short, long, default_value = "All About Cats")]
    title: String,

    /// Paw blink period in milliseconds
    #[arg(long)]
    blink_ms: Option<u64>,

    /// Toast display time in milliseconds
    #[arg(long)]
    toast_ms: Option<u64>,
}

impl Args {
    fn page_config(&self) -> PageConfig {
        let defaults = PageConfig::default();
        PageConfig {
            blink_period_ms: self.blink_ms.unwrap_or(defaults.blink_period_ms),
            toast_duration_ms: self.toast_ms.unwrap_or(defaults.toast_duration_ms),
            ..defaults
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let page_config = args.page_config();
    match page_config.validate() {
        Ok(()) => {
            let _ = PAGE_CONFIG.set(page_config);
        }
        Err(e) => {
            tracing::warn!("Ignoring page settings from command line: {}", e);
        }
    }

    tracing::info!(
        "Starting '{}' ({}x{}) with {:?}",
        args.title,
        args.width,
        args.height,
        get_page_config()
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_timings() {
        let args = Args::parse_from(["catinfo-desktop", "--blink-ms", "250", "--toast-ms", "900"]);
        let config = args.page_config();
        assert_eq!(config.blink_period_ms, 250);
        assert_eq!(config.toast_duration_ms, 900);
        assert_eq!(config.scroll_hide_threshold, 100);
    }

    #[test]
    fn cli_defaults() {
        let args = Args::parse_from(["catinfo-desktop"]);
        assert_eq!(args.title, "All About Cats");
        assert_eq!(args.page_config(), PageConfig::default());
    }

    #[test]
    fn zero_blink_is_invalid() {
        let args = Args::parse_from(["catinfo-desktop", "--blink-ms", "0"]);
        assert!(args.page_config().validate().is_err());
    }
}
