//! Tab Bar Component
//!
//! Row of tab triggers, one per content panel. The active trigger gets the
//! filled lilac pill.

use catinfo_core::TabId;
use dioxus::prelude::*;

/// Properties for the TabBar component
#[derive(Clone, PartialEq, Props)]
pub struct TabBarProps {
    /// Currently active panel
    pub selected: TabId,
    /// Handler called when a trigger is clicked
    pub on_select: EventHandler<TabId>,
}

/// Displays the three panel triggers
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TabBar {
///         selected: page.read().active_tab(),
///         on_select: move |tab| page.write().select_tab(tab)
///     }
/// }
/// ```
#[component]
pub fn TabBar(props: TabBarProps) -> Element {
    rsx! {
        div {
            class: "tab-list",
            role: "tablist",
            for tab in TabId::ALL {
                {
                    let is_selected = props.selected == tab;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{tab}",
                            class: trigger_class(is_selected),
                            role: "tab",
                            id: "tab-{tab}",
                            "aria-selected": if is_selected { "true" } else { "false" },
                            "aria-controls": "panel-{tab}",
                            onclick: move |_| on_select.call(tab),
                            "{tab.label()}"
                        }
                    }
                }
            }
        }
    }
}

/// CSS class for a trigger
pub fn trigger_class(selected: bool) -> &'static str {
    if selected {
        "tab-trigger active"
    } else {
        "tab-trigger"
    }
}
