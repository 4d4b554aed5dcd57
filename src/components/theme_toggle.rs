//! Theme Toggle - light/dark switch in the page toolbar.

use catinfo_ui::ThemeSwitch;
use dioxus::prelude::*;

use crate::context::use_page;

#[component]
pub fn ThemeToggle() -> Element {
    let mut page = use_page();
    let mode = page.read().theme();

    let on_toggle = move |_: ()| {
        let mode = page.write().toggle_theme();
        tracing::info!("Theme switched to {}", mode);
    };

    rsx! {
        ThemeSwitch { mode: mode, on_toggle: on_toggle }
    }
}
