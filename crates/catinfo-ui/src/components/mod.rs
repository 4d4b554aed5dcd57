//! Reusable UI components.

mod button;
mod happiness_meter;
mod paw_icon;
mod tab_bar;
mod theme_switch;
mod toast;

pub use button::*;
pub use happiness_meter::*;
pub use paw_icon::*;
pub use tab_bar::*;
pub use theme_switch::*;
pub use toast::*;
