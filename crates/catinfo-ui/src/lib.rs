//! Cat Info UI Components
//!
//! Reusable Dioxus widgets for the Cat Info page. Colors come from CSS
//! custom properties on the document root, so every widget follows the
//! active light/dark theme without taking it as a prop.
//!
//! ## Palette
//!
//! - **Lilac**: surfaces and tab pills
//! - **Rose**: the like button and happiness meter
//! - **Honey**: fun-fact cards

pub mod components;

pub use components::*;
