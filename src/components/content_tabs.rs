//! Content Tabs
//!
//! Tab triggers plus the single active panel. Each panel is its own
//! component, so switching tabs remounts the list and replays the staggered
//! entrance of its items.

use catinfo_core::{AnimationSpec, Breed, PanelView, TabId};
use catinfo_ui::{IconButton, PawIcon, TabBar};
use dioxus::prelude::*;

use crate::context::use_page;

#[component]
pub fn ContentTabs() -> Element {
    let mut page = use_page();
    let active = page.read().active_tab();
    let panel = page.read().visible_panel();

    rsx! {
        div { class: "tabs",
            TabBar {
                selected: active,
                on_select: move |tab| page.write().select_tab(tab),
            }

            div {
                class: "tab-panel",
                id: "panel-{active}",
                role: "tabpanel",
                "aria-labelledby": "tab-{active}",
                div { class: "card",
                    div { class: "card-header",
                        h2 { class: "card-title", "{active.title()}" }
                        p { class: "card-description", "{active.description()}" }
                    }
                    div { class: "card-content",
                        {match panel {
                            PanelView::Characteristics(items) => rsx! {
                                CharacteristicsList { items: items }
                            },
                            PanelView::Breeds { breeds, selected } => rsx! {
                                BreedCarouselView { breeds: breeds, selected: selected }
                            },
                            PanelView::FunFacts(facts) => rsx! {
                                FactsList { facts: facts }
                            },
                        }}
                    }
                }
            }
        }
    }
}

#[component]
fn CharacteristicsList(items: &'static [&'static str]) -> Element {
    rsx! {
        ul { class: "characteristics-grid",
            for (index, item) in items.iter().enumerate() {
                li {
                    key: "{index}",
                    class: "characteristic-item animate",
                    style: AnimationSpec::panel_item(TabId::Characteristics, index).css(),
                    PawIcon { size: 16, class: "characteristic-paw".to_string() }
                    "{item}"
                }
            }
        }
    }
}

#[component]
fn BreedCarouselView(breeds: &'static [Breed], selected: usize) -> Element {
    let mut page = use_page();
    let featured = breeds[selected];

    rsx! {
        div { class: "breed-carousel",
            IconButton {
                onclick: move |_| {
                    let breed = page.write().previous_breed();
                    tracing::debug!("Carousel back to {}", breed.name);
                },
                aria_label: "Previous breed".to_string(),
                class: "carousel-prev".to_string(),
                "\u{2039}"
            }
            figure { class: "breed-featured",
                img { src: "{featured.image_url}", alt: "{featured.name}" }
                figcaption { "{featured.name}" }
            }
            IconButton {
                onclick: move |_| {
                    let breed = page.write().next_breed();
                    tracing::debug!("Carousel on to {}", breed.name);
                },
                aria_label: "Next breed".to_string(),
                class: "carousel-next".to_string(),
                "\u{203A}"
            }
        }
        ul { class: "breeds-grid",
            for (index, breed) in breeds.iter().enumerate() {
                li {
                    key: "{breed.name}",
                    class: if index == selected { "breed-item animate selected" } else { "breed-item animate" },
                    style: AnimationSpec::panel_item(TabId::Breeds, index).css(),
                    img { class: "breed-photo", src: "{breed.image_url}", alt: "{breed.name}" }
                    span { class: "breed-name", "{breed.name}" }
                }
            }
        }
    }
}

#[component]
fn FactsList(facts: &'static [&'static str]) -> Element {
    rsx! {
        ul { class: "facts-list",
            for (index, fact) in facts.iter().enumerate() {
                li {
                    key: "{index}",
                    class: "fact-item animate",
                    style: AnimationSpec::panel_item(TabId::FunFacts, index).css(),
                    "{fact}"
                }
            }
        }
    }
}
