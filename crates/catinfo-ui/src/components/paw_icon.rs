//! Paw Print Icon
//!
//! Inline SVG paw: one pad and four toe beans.

use dioxus::prelude::*;

/// Properties for the PawIcon component
#[derive(Clone, PartialEq, Props)]
pub struct PawIconProps {
    /// Size in pixels (default: 24)
    #[props(default = 24)]
    pub size: u32,
    /// Fill color (default: follows `currentColor`)
    #[props(default = "currentColor".to_string())]
    pub color: String,
    #[props(default)]
    pub class: Option<String>,
}

/// Renders a paw print as an inline SVG
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     PawIcon { size: 48, color: "white".to_string() }
/// }
/// ```
#[component]
pub fn PawIcon(props: PawIconProps) -> Element {
    let size = props.size;
    let color = &props.color;
    let class = props.class.as_deref().unwrap_or("");

    rsx! {
        svg {
            class: "paw-icon {class}",
            view_box: "0 0 100 100",
            width: "{size}",
            height: "{size}",
            "aria-hidden": "true",
            g { fill: "{color}",
                // Pad
                ellipse { cx: "50", cy: "68", rx: "22", ry: "18" }
                // Toes, left to right
                ellipse { cx: "20", cy: "42", rx: "9", ry: "12" }
                ellipse { cx: "38", cy: "26", rx: "9", ry: "12" }
                ellipse { cx: "62", cy: "26", rx: "9", ry: "12" }
                ellipse { cx: "80", cy: "42", rx: "9", ry: "12" }
            }
        }
    }
}
