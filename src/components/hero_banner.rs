//! Hero Banner
//!
//! Full-width photo with the animated title, subtitle and badge. The paw in
//! the corner follows the page's blink state: it slides in when shown and
//! slides back out when hidden, staying mounted after its first blink.

use catinfo_core::content::{HERO_BADGE, HERO_IMAGE_URL, HERO_SUBTITLE, HERO_TITLE};
use catinfo_core::AnimationSpec;
use catinfo_ui::PawIcon;
use dioxus::prelude::*;

use crate::context::use_page;

#[component]
pub fn HeroBanner() -> Element {
    let page = use_page();
    let paw_visible = page.read().paw_visible();
    let paw_style = page.read().paw_animation().map(|anim| anim.css());
    let paw_class = if paw_visible {
        "hero-paw animate"
    } else {
        "hero-paw animate leaving"
    };

    let title_anim = AnimationSpec::hero_title().css();
    let subtitle_anim = AnimationSpec::hero_subtitle().css();
    let badge_anim = AnimationSpec::hero_badge().css();

    rsx! {
        section {
            class: "hero",
            style: "background-image: url(\"{HERO_IMAGE_URL}\");",
            div { class: "hero-overlay",
                h1 { class: "hero-title animate", style: "{title_anim}", "{HERO_TITLE}" }
                p { class: "hero-subtitle animate", style: "{subtitle_anim}", "{HERO_SUBTITLE}" }
                span { class: "hero-badge animate", style: "{badge_anim}", "{HERO_BADGE}" }
            }
            if let Some(paw_style) = paw_style {
                div {
                    class: paw_class,
                    style: "{paw_style}",
                    "aria-hidden": !paw_visible,
                    PawIcon { size: 48, color: "white".to_string() }
                }
            }
        }
    }
}
