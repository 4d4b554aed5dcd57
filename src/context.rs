//! Page context provider for Cat Info.
//!
//! The [`CatPage`] controller lives in one signal created by
//! `CatInfoPage` and handed to every sub-view via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut page = use_page();
//! let likes = page.read().like_count();
//! page.write().like();
//! ```

use catinfo_core::{CatPage, PageConfig, ThemeMode};
use dioxus::prelude::*;

/// Get the page settings (command line overrides or defaults).
pub fn get_page_config() -> PageConfig {
    crate::get_page_config()
}

/// Hook to access the page controller from context.
pub fn use_page() -> Signal<CatPage> {
    use_context::<Signal<CatPage>>()
}

/// Style root for the webview: sets `data-theme` on `<html>`, which the
/// global stylesheet keys its palette on.
pub fn apply_document_theme(mode: ThemeMode) {
    let js = format!(
        "document.documentElement.dataset.theme = '{}';",
        mode.as_str()
    );
    document::eval(&js);
}

/// Installs a window scroll listener that reports `scrollY` to Rust.
pub const SCROLL_BRIDGE_JS: &str = r#"
const report = () => dioxus.send(Math.max(0, Math.round(window.scrollY)));
window.__catinfoScroll = report;
window.addEventListener('scroll', report, { passive: true });
report();
"#;

/// Removes the listener installed by [`SCROLL_BRIDGE_JS`].
pub const SCROLL_BRIDGE_TEARDOWN_JS: &str = r#"
if (window.__catinfoScroll) {
  window.removeEventListener('scroll', window.__catinfoScroll);
  delete window.__catinfoScroll;
}
"#;
