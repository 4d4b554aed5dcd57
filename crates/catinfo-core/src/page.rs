//! The page controller.
//!
//! [`CatPage`] owns every piece of view state. All transitions are total;
//! the shell calls them from click handlers, timer ticks and scroll events.

use crate::animation::AnimationSpec;
use crate::config::PageConfig;
use crate::content::{Breed, BREEDS, CHARACTERISTICS, FACTS};
use crate::error::Result;
use crate::likes::LikeCounter;
use crate::notify::{Notification, Notifier, ToastId, ToastQueue};
use crate::scroll::ScrollFollower;
use crate::tabs::{BreedCarousel, TabId};
use crate::theme::{PresentationContext, StyleRoot, ThemeMode};

/// Content of the single visible panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelView {
    Characteristics(&'static [&'static str]),
    Breeds {
        breeds: &'static [Breed],
        selected: usize,
    },
    FunFacts(&'static [&'static str]),
}

impl PanelView {
    pub fn tab(&self) -> TabId {
        match self {
            PanelView::Characteristics(_) => TabId::Characteristics,
            PanelView::Breeds { .. } => TabId::Breeds,
            PanelView::FunFacts(_) => TabId::FunFacts,
        }
    }
}

#[derive(Debug)]
pub struct CatPage {
    config: PageConfig,
    likes: LikeCounter,
    presentation: PresentationContext,
    active_tab: TabId,
    carousel: BreedCarousel,
    paw_visible: bool,
    paw_ticks: u64,
    scroll: ScrollFollower,
    toasts: ToastQueue,
}

impl Default for CatPage {
    fn default() -> Self {
        Self::new()
    }
}

impl CatPage {
    /// Fresh page with default timings.
    pub fn new() -> Self {
        Self::build(PageConfig::default())
    }

    pub fn with_config(config: PageConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: PageConfig) -> Self {
        Self {
            likes: LikeCounter::from_config(&config),
            presentation: PresentationContext::default(),
            active_tab: TabId::default(),
            carousel: BreedCarousel::new(),
            paw_visible: false,
            paw_ticks: 0,
            scroll: ScrollFollower::with_threshold(config.scroll_hide_threshold),
            toasts: ToastQueue::new(),
            config,
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    // === Likes ===

    /// Count a like, raise happiness and queue the thank-you toast.
    pub fn like(&mut self) -> ToastId {
        self.count_like();
        self.toasts.show(Notification::like(self.config.toast_duration_ms))
    }

    /// Like, routing the toast to an external notifier.
    pub fn like_into(&mut self, notifier: &mut impl Notifier) -> ToastId {
        self.count_like();
        notifier.show(Notification::like(self.config.toast_duration_ms))
    }

    fn count_like(&mut self) {
        self.likes.like();
        tracing::debug!(
            likes = self.likes.count(),
            happiness = self.likes.happiness(),
            "liked"
        );
    }

    pub fn like_count(&self) -> u64 {
        self.likes.count()
    }

    pub fn happiness(&self) -> u8 {
        self.likes.happiness()
    }

    // === Toasts ===

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn dismiss_toast(&mut self, id: ToastId) -> bool {
        self.toasts.dismiss(id)
    }

    // === Theme ===

    /// Connect the document-level styling root.
    pub fn attach_style_root(&mut self, root: impl StyleRoot + 'static) {
        self.presentation.attach(root);
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        let mode = self.presentation.mode().toggled();
        self.presentation.set(mode);
        mode
    }

    pub fn theme(&self) -> ThemeMode {
        self.presentation.mode()
    }

    // === Tabs ===

    pub fn select_tab(&mut self, tab: TabId) {
        tracing::debug!(from = %self.active_tab, to = %tab, "select tab");
        self.active_tab = tab;
    }

    pub fn active_tab(&self) -> TabId {
        self.active_tab
    }

    pub fn is_active(&self, tab: TabId) -> bool {
        self.active_tab == tab
    }

    /// The only panel that renders
    pub fn visible_panel(&self) -> PanelView {
        match self.active_tab {
            TabId::Characteristics => PanelView::Characteristics(&CHARACTERISTICS),
            TabId::Breeds => PanelView::Breeds {
                breeds: &BREEDS,
                selected: self.carousel.index(),
            },
            TabId::FunFacts => PanelView::FunFacts(&FACTS),
        }
    }

    pub fn next_breed(&mut self) -> &'static Breed {
        self.carousel.next()
    }

    pub fn previous_breed(&mut self) -> &'static Breed {
        self.carousel.previous()
    }

    pub fn current_breed(&self) -> &'static Breed {
        self.carousel.current()
    }

    // === Paw blink ===

    pub fn tick_paw(&mut self) -> bool {
        self.paw_visible = !self.paw_visible;
        self.paw_ticks = self.paw_ticks.saturating_add(1);
        self.paw_visible
    }

    pub fn paw_visible(&self) -> bool {
        self.paw_visible
    }

    /// Slide-in while visible, slide-out once it has been shown. `None`
    /// until the first blink, so nothing slides out on load.
    pub fn paw_animation(&self) -> Option<AnimationSpec> {
        if self.paw_ticks == 0 {
            None
        } else if self.paw_visible {
            Some(AnimationSpec::paw_show())
        } else {
            Some(AnimationSpec::paw_hide())
        }
    }

    // === Scroll ===

    pub fn set_scroll_offset(&mut self, offset: u32) {
        self.scroll.set_offset(offset);
    }

    pub fn scroll(&self) -> &ScrollFollower {
        &self.scroll
    }
}
