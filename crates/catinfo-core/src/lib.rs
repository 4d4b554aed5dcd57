//! Cat Info Core Library
//!
//! Framework-independent view state for the Cat Info page.
//!
//! ## Overview
//!
//! The page is a single view with a hero banner, three content panels, a
//! like button, a light/dark theme switch and a scroll follower. Everything
//! here is transient, in-memory state owned by one [`CatPage`] controller.
//! The desktop shell renders it and feeds it events (clicks, timer ticks,
//! scroll offsets).
//!
//! ## Quick Start
//!
//! ```
//! use catinfo_core::{CatPage, TabId, ThemeMode};
//!
//! let mut page = CatPage::new();
//! page.like();
//! page.select_tab(TabId::Breeds);
//! page.next_breed();
//!
//! assert_eq!(page.like_count(), 1);
//! assert_eq!(page.happiness(), 60);
//! assert_eq!(page.active_tab(), TabId::Breeds);
//! assert_eq!(page.theme(), ThemeMode::Light);
//! ```

pub mod animation;
pub mod config;
pub mod content;
pub mod error;
pub mod likes;
pub mod notify;
pub mod page;
pub mod scroll;
pub mod subscription;
pub mod tabs;
pub mod theme;

// Re-exports
pub use animation::{AnimationSpec, Trigger, VisualProperty};
pub use config::PageConfig;
pub use content::{Breed, BREEDS, CHARACTERISTICS, FACTS};
pub use error::{CatInfoError, Result};
pub use likes::LikeCounter;
pub use notify::{Notification, Notifier, Toast, ToastId, ToastQueue};
pub use page::{CatPage, PanelView};
pub use scroll::ScrollFollower;
pub use subscription::{Subscriptions, Ticker, TickerGuard};
pub use tabs::{BreedCarousel, TabId};
pub use theme::{PresentationContext, StyleRoot, ThemeMode};
