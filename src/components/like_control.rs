//! Like Control
//!
//! "Like Cats (n)" button. Each click bumps the count and happiness and
//! shows a toast that removes itself after its display duration.

use catinfo_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::context::use_page;

#[component]
pub fn LikeControl() -> Element {
    let mut page = use_page();
    let likes = page.read().like_count();

    let on_like = move |_: ()| {
        let id = page.write().like();
        let duration = page.peek().config().toast_duration();
        spawn(async move {
            tokio::time::sleep(duration).await;
            page.write().dismiss_toast(id);
        });
    };

    rsx! {
        div { class: "like-control",
            Button {
                variant: ButtonVariant::Like,
                onclick: on_like,
                span { class: "like-heart", "aria-hidden": "true", "\u{2665}" }
                "Like Cats ({likes})"
            }
        }
    }
}
