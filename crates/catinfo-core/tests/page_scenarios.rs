//! End-to-end interaction scenarios for the Cat Info page controller.

use std::cell::RefCell;
use std::rc::Rc;

use catinfo_core::{CatPage, PanelView, TabId, ThemeMode, FACTS};

#[test]
fn fresh_load() {
    let page = CatPage::new();
    assert_eq!(page.active_tab(), TabId::Characteristics);
    assert_eq!(page.like_count(), 0);
    assert_eq!(page.happiness(), 50);
    assert_eq!(page.theme(), ThemeMode::Light);
}

#[test]
fn six_likes_clamp_happiness() {
    let mut page = CatPage::new();
    for _ in 0..6 {
        page.like();
    }
    assert_eq!(page.like_count(), 6);
    assert_eq!(page.happiness(), 100);
    assert_eq!(page.toasts().len(), 6);
}

#[test]
fn breeds_then_fun_facts_shows_only_facts() {
    let mut page = CatPage::new();
    page.select_tab(TabId::Breeds);
    page.select_tab(TabId::FunFacts);

    assert_eq!(page.visible_panel(), PanelView::FunFacts(&FACTS));
    let active: Vec<TabId> = TabId::ALL
        .into_iter()
        .filter(|tab| page.is_active(*tab))
        .collect();
    assert_eq!(active, vec![TabId::FunFacts]);
}

#[test]
fn theme_toggle_reaches_style_root() {
    let applied = Rc::new(RefCell::new(Vec::new()));
    let sink = applied.clone();

    let mut page = CatPage::new();
    page.attach_style_root(move |mode: ThemeMode| sink.borrow_mut().push(mode));

    assert_eq!(page.toggle_theme(), ThemeMode::Dark);
    assert_eq!(page.toggle_theme(), ThemeMode::Light);
    assert_eq!(page.theme(), ThemeMode::Light);

    // attach applies the current mode once, then one apply per toggle
    assert_eq!(
        *applied.borrow(),
        vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::Light]
    );
}

#[test]
fn carousel_survives_tab_switches() {
    let mut page = CatPage::new();
    page.select_tab(TabId::Breeds);
    assert_eq!(page.previous_breed().name, "Sphynx");

    page.select_tab(TabId::Characteristics);
    page.select_tab(TabId::Breeds);
    assert_eq!(page.current_breed().name, "Sphynx");
    assert_eq!(page.next_breed().name, "Siamese");
}

#[test]
fn scroll_follower_hides_past_threshold() {
    let mut page = CatPage::new();
    page.set_scroll_offset(100);
    assert!(!page.scroll().is_hidden());
    page.set_scroll_offset(101);
    assert!(page.scroll().is_hidden());
    page.set_scroll_offset(0);
    assert!(!page.scroll().is_hidden());
}

#[test]
fn routed_tab_parses() {
    let tab: TabId = "breeds".parse().unwrap();
    let mut page = CatPage::new();
    page.select_tab(tab);
    assert!(matches!(page.visible_panel(), PanelView::Breeds { .. }));
}
