use catinfo_core::TabId;
use dioxus::prelude::*;

use crate::pages::CatInfoPage;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The page with the default panel
/// - `/tab/:tab` - The page opened on a specific panel
///   (`characteristics`, `breeds` or `funFacts`)
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/tab/:tab")]
    TabLink { tab: TabId },
}

/// Root application component.
///
/// Provides global styles and routing.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        CatInfoPage { initial_tab: TabId::default() }
    }
}

#[component]
fn TabLink(tab: TabId) -> Element {
    rsx! {
        CatInfoPage { initial_tab: tab }
    }
}
