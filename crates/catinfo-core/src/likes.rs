//! Like counter and the happiness meter it drives.

use crate::config::{PageConfig, MAX_HAPPINESS};

/// Tracks likes and the bounded happiness level.
///
/// The count never decreases; happiness stays within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeCounter {
    count: u64,
    happiness: u8,
    step: u8,
}

impl Default for LikeCounter {
    fn default() -> Self {
        Self::from_config(&PageConfig::default())
    }
}

impl LikeCounter {
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            count: 0,
            happiness: config.initial_happiness.min(MAX_HAPPINESS),
            step: config.happiness_step,
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn happiness(&self) -> u8 {
        self.happiness
    }

    /// Register one like.
    pub fn like(&mut self) {
        self.count = self.count.saturating_add(1);
        self.happiness = self.happiness.saturating_add(self.step).min(MAX_HAPPINESS);
    }

    pub fn is_max_happiness(&self) -> bool {
        self.happiness == MAX_HAPPINESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_likes_half_happy() {
        let likes = LikeCounter::default();
        assert_eq!(likes.count(), 0);
        assert_eq!(likes.happiness(), 50);
        assert!(!likes.is_max_happiness());
    }

    #[test]
    fn happiness_clamps_at_max() {
        let mut likes = LikeCounter::default();
        for _ in 0..6 {
            likes.like();
        }
        assert_eq!(likes.count(), 6);
        assert_eq!(likes.happiness(), 100);
        assert!(likes.is_max_happiness());

        likes.like();
        assert_eq!(likes.count(), 7);
        assert_eq!(likes.happiness(), 100);
    }

    #[test]
    fn large_step_does_not_overflow() {
        let config = PageConfig {
            happiness_step: 250,
            ..PageConfig::default()
        };
        let mut likes = LikeCounter::from_config(&config);
        likes.like();
        assert_eq!(likes.happiness(), 100);
    }
}
