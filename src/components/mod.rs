//! Page sections for Cat Info.

mod content_tabs;
mod hero_banner;
mod like_control;
mod scroll_follower;
mod theme_toggle;

pub use content_tabs::ContentTabs;
pub use hero_banner::HeroBanner;
pub use like_control::LikeControl;
pub use scroll_follower::ScrollFollowerView;
pub use theme_toggle::ThemeToggle;
