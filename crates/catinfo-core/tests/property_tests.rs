//! Property-based tests for the page controller
//!
//! Uses proptest to verify the page invariants hold for arbitrary
//! interaction sequences.

use catinfo_core::{CatPage, TabId, ThemeMode};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Interactions a user can perform
#[derive(Debug, Clone)]
enum PageOp {
    Like,
    ToggleTheme,
    SelectTab(TabId),
    NextBreed,
    PreviousBreed,
    TickPaw,
    Scroll(u32),
}

fn tab_strategy() -> impl Strategy<Value = TabId> {
    prop_oneof![
        Just(TabId::Characteristics),
        Just(TabId::Breeds),
        Just(TabId::FunFacts),
    ]
}

fn page_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<PageOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(PageOp::Like),
            1 => Just(PageOp::ToggleTheme),
            2 => tab_strategy().prop_map(PageOp::SelectTab),
            1 => Just(PageOp::NextBreed),
            1 => Just(PageOp::PreviousBreed),
            1 => Just(PageOp::TickPaw),
            2 => (0u32..5000).prop_map(PageOp::Scroll),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// n likes give n count and min(50 + 10n, 100) happiness
    #[test]
    fn likes_and_happiness(n in 0usize..200) {
        let mut page = CatPage::new();
        for _ in 0..n {
            page.like();
        }
        prop_assert_eq!(page.like_count(), n as u64);
        prop_assert_eq!(page.happiness() as usize, (50 + 10 * n).min(100));
    }

    /// Invariants hold after any interaction sequence
    #[test]
    fn invariants_hold(ops in page_ops_strategy(100)) {
        let mut page = CatPage::new();
        let mut last_likes = 0;
        let mut last_tab = TabId::Characteristics;

        for op in ops {
            match op {
                PageOp::Like => { page.like(); }
                PageOp::ToggleTheme => { page.toggle_theme(); }
                PageOp::SelectTab(tab) => {
                    page.select_tab(tab);
                    last_tab = tab;
                }
                PageOp::NextBreed => { page.next_breed(); }
                PageOp::PreviousBreed => { page.previous_breed(); }
                PageOp::TickPaw => { page.tick_paw(); }
                PageOp::Scroll(offset) => {
                    page.set_scroll_offset(offset);
                    prop_assert_eq!(page.scroll().is_hidden(), offset > 100);
                    prop_assert_eq!(page.scroll().rotation(), offset);
                }
            }

            prop_assert!(page.happiness() <= 100);
            prop_assert!(page.like_count() >= last_likes);
            last_likes = page.like_count();

            prop_assert_eq!(page.active_tab(), last_tab);
            prop_assert_eq!(page.visible_panel().tab(), last_tab);
            let active = TabId::ALL.iter().filter(|t| page.is_active(**t)).count();
            prop_assert_eq!(active, 1);
        }
    }

    /// Toggling the theme twice is the identity
    #[test]
    fn theme_toggle_involution(flips in 0usize..20) {
        let mut page = CatPage::new();
        for _ in 0..flips {
            page.toggle_theme();
        }
        let before = page.theme();
        page.toggle_theme();
        page.toggle_theme();
        prop_assert_eq!(page.theme(), before);
        let expected = if flips % 2 == 0 { ThemeMode::Light } else { ThemeMode::Dark };
        prop_assert_eq!(before, expected);
    }

    /// k forward steps then k backward steps return to the start
    #[test]
    fn carousel_steps_cancel(k in 0usize..50) {
        let mut page = CatPage::new();
        for _ in 0..k {
            page.next_breed();
        }
        prop_assert_eq!(page.current_breed(), &catinfo_core::BREEDS[k % 6]);
        for _ in 0..k {
            page.previous_breed();
        }
        prop_assert_eq!(page.current_breed().name, "Siamese");
    }
}
