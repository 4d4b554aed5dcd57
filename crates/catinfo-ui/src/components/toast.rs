//! Toast Stack Component
//!
//! Bottom-right stack of transient notifications. The owner removes each
//! toast after its duration; this component only renders.

use catinfo_core::Toast;
use dioxus::prelude::*;

/// Properties for the ToastStack component
#[derive(Clone, PartialEq, Props)]
pub struct ToastStackProps {
    /// Live toasts, oldest first
    pub toasts: Vec<Toast>,
}

#[component]
pub fn ToastStack(props: ToastStackProps) -> Element {
    rsx! {
        ol { class: "toast-stack", "aria-live": "polite",
            for toast in props.toasts.iter() {
                li {
                    key: "{toast.id}",
                    class: "toast",
                    style: "--toast-duration: {toast.notification.duration_ms}ms",
                    div { class: "toast-title", "{toast.notification.title}" }
                    div { class: "toast-description", "{toast.notification.description}" }
                }
            }
        }
    }
}
