//! Theme Switch Component
//!
//! Sun/moon toggle switch bound to the theme mode.

use catinfo_core::ThemeMode;
use dioxus::prelude::*;

/// Properties for the ThemeSwitch component
#[derive(Clone, PartialEq, Props)]
pub struct ThemeSwitchProps {
    pub mode: ThemeMode,
    /// Called on click; the owner flips the mode
    pub on_toggle: EventHandler<()>,
}

#[component]
pub fn ThemeSwitch(props: ThemeSwitchProps) -> Element {
    let dark = props.mode.is_dark();
    let label = switch_label(props.mode);

    rsx! {
        div { class: "theme-switch",
            span { class: "theme-switch-icon", "aria-hidden": "true", "\u{2600}" }
            button {
                class: if dark { "switch checked" } else { "switch" },
                r#type: "button",
                role: "switch",
                "aria-checked": if dark { "true" } else { "false" },
                "aria-label": "{label}",
                onclick: move |_| props.on_toggle.call(()),
                span { class: "switch-thumb" }
            }
            span { class: "theme-switch-icon", "aria-hidden": "true", "\u{263E}" }
        }
    }
}

/// Accessible label describing what a click will do
pub fn switch_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "Switch to dark mode",
        ThemeMode::Dark => "Switch to light mode",
    }
}
