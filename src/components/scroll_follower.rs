//! Scroll Follower - a paw that spins with the scroll offset and slips
//! off-screen once the hero is scrolled past.

use catinfo_ui::PawIcon;
use dioxus::prelude::*;

use crate::context::use_page;

#[component]
pub fn ScrollFollowerView() -> Element {
    let page = use_page();
    let follower = *page.read().scroll();
    let style = follower.style();

    rsx! {
        div {
            class: if follower.is_hidden() { "scroll-follower hidden" } else { "scroll-follower" },
            style: "{style}",
            "aria-hidden": "true",
            PawIcon { size: 32 }
        }
    }
}
