//! Scroll follower derived state.

use crate::config::DEFAULT_SCROLL_HIDE_THRESHOLD;

/// Horizontal offset (px) the follower slides to when hidden
pub const HIDDEN_OFFSET_X: i32 = -100;

/// Decorative element tracking the vertical scroll offset.
///
/// Every output is a pure function of the last offset, so updates are O(1)
/// and need no throttling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollFollower {
    offset: u32,
    threshold: u32,
}

impl Default for ScrollFollower {
    fn default() -> Self {
        Self::with_threshold(DEFAULT_SCROLL_HIDE_THRESHOLD)
    }
}

impl ScrollFollower {
    pub fn with_threshold(threshold: u32) -> Self {
        Self {
            offset: 0,
            threshold,
        }
    }

    pub fn set_offset(&mut self, offset: u32) {
        self.offset = offset;
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn is_hidden(&self) -> bool {
        self.offset > self.threshold
    }

    /// Rotation in degrees; wrap-around is left to the renderer.
    pub fn rotation(&self) -> u32 {
        self.offset
    }

    pub fn opacity(&self) -> f32 {
        if self.is_hidden() {
            0.0
        } else {
            1.0
        }
    }

    pub fn offset_x(&self) -> i32 {
        if self.is_hidden() {
            HIDDEN_OFFSET_X
        } else {
            0
        }
    }

    /// Inline CSS for the follower element
    pub fn style(&self) -> String {
        format!(
            "transform: translateX({}px) rotate({}deg); opacity: {};",
            self.offset_x(),
            self.rotation(),
            self.opacity()
        )
    }
}
