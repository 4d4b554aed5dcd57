//! The Cat Info page.
//!
//! Owns the page controller and its scoped subscriptions: the paw blink
//! ticker and the window scroll listener are acquired on mount and released
//! when the page unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use catinfo_core::{CatPage, Subscriptions, TabId, Ticker};
use catinfo_ui::{HappinessMeter, ToastStack};
use dioxus::prelude::*;

use crate::components::{ContentTabs, HeroBanner, LikeControl, ScrollFollowerView, ThemeToggle};
use crate::context::{
    apply_document_theme, get_page_config, SCROLL_BRIDGE_JS, SCROLL_BRIDGE_TEARDOWN_JS,
};

/// Root class; the palette itself comes from `data-theme` on `<html>`.
const PAGE_CLASS: &str = "cat-page";

/// Page component.
///
/// `initial_tab` is the panel shown on a fresh load.
#[component]
pub fn CatInfoPage(initial_tab: TabId) -> Element {
    let mut page = use_signal(move || {
        let mut page = CatPage::with_config(get_page_config()).unwrap_or_else(|e| {
            tracing::warn!("Falling back to default page settings: {}", e);
            CatPage::new()
        });
        page.select_tab(initial_tab);
        page.attach_style_root(apply_document_theme);
        page
    });
    use_context_provider(|| page);

    let subscriptions = use_hook(|| Rc::new(RefCell::new(Subscriptions::new())));

    // Paw ticker and scroll bridge, once per mount
    use_hook({
        let subscriptions = subscriptions.clone();
        move || {
            let period = page.peek().config().blink_period();
            let (guard, mut ticks) = Ticker::spawn(period);
            subscriptions.borrow_mut().hold(guard);
            spawn(async move {
                while ticks.recv().await.is_some() {
                    page.write().tick_paw();
                }
            });

            let mut bridge = document::eval(SCROLL_BRIDGE_JS);
            spawn(async move {
                loop {
                    match bridge.recv::<u32>().await {
                        Ok(offset) => page.write().set_scroll_offset(offset),
                        Err(e) => {
                            tracing::warn!("Scroll bridge closed: {:?}", e);
                            break;
                        }
                    }
                }
            });
            subscriptions.borrow_mut().add(|| {
                document::eval(SCROLL_BRIDGE_TEARDOWN_JS);
            });

            tracing::info!("Cat info page mounted on '{}'", initial_tab);
        }
    });

    use_drop({
        let subscriptions = subscriptions.clone();
        move || {
            subscriptions.borrow_mut().dispose();
            tracing::info!("Cat info page unmounted");
        }
    });

    let happiness = page.read().happiness();
    let toasts: Vec<_> = page.read().toasts().iter().cloned().collect();

    rsx! {
        div { class: PAGE_CLASS,
            ScrollFollowerView {}

            header { class: "page-toolbar",
                ThemeToggle {}
            }

            HeroBanner {}

            main { class: "page-content",
                ContentTabs {}

                section { class: "like-section",
                    HappinessMeter { level: happiness }
                    LikeControl {}
                }
            }

            ToastStack { toasts: toasts }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::GLOBAL_STYLES;

    #[test]
    fn page_root_class_is_styled() {
        assert!(GLOBAL_STYLES.contains(&format!(".{PAGE_CLASS} {{")));
        assert!(!PAGE_CLASS.contains("theme-"));
    }
}
