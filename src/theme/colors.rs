//! Color constants for both palettes.
//!
//! Mirrors the custom properties in [`super::styles::GLOBAL_STYLES`]; kept
//! in Rust for inline SVG fills and tests.

#![allow(dead_code)]

// === LIGHT (default) ===
pub const LIGHT_BACKGROUND_FROM: &str = "#e9d5ff";
pub const LIGHT_BACKGROUND_TO: &str = "#fbcfe8";
pub const LIGHT_SURFACE: &str = "#ffffff";
pub const LIGHT_TEXT: &str = "#1f1630";

// === DARK ===
pub const DARK_BACKGROUND_FROM: &str = "#1b1229";
pub const DARK_BACKGROUND_TO: &str = "#2a1024";
pub const DARK_SURFACE: &str = "#2b2238";
pub const DARK_TEXT: &str = "#f3eefa";

// === ACCENTS (shared) ===
pub const LILAC: &str = "#a855f7";
pub const LILAC_SOFT: &str = "#f3e8ff";
pub const ROSE: &str = "#ec4899";
pub const ROSE_SOFT: &str = "#fce7f3";
pub const HONEY_SOFT: &str = "#fef9c3";
