//! Timing and threshold settings for the page.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CatInfoError, Result};

/// Paw icon blink period (ms)
pub const DEFAULT_BLINK_PERIOD_MS: u64 = 5000;

/// How long the like toast stays on screen (ms)
pub const DEFAULT_TOAST_DURATION_MS: u64 = 2000;

/// Scroll offset (px) above which the follower hides
pub const DEFAULT_SCROLL_HIDE_THRESHOLD: u32 = 100;

/// Happiness gained per like
pub const DEFAULT_HAPPINESS_STEP: u8 = 10;

/// Happiness on a fresh load
pub const DEFAULT_INITIAL_HAPPINESS: u8 = 50;

/// Upper bound of the happiness meter
pub const MAX_HAPPINESS: u8 = 100;

/// Tunable constants consumed by [`crate::CatPage`] and the desktop shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub blink_period_ms: u64,
    pub toast_duration_ms: u64,
    pub scroll_hide_threshold: u32,
    pub happiness_step: u8,
    pub initial_happiness: u8,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            blink_period_ms: DEFAULT_BLINK_PERIOD_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            scroll_hide_threshold: DEFAULT_SCROLL_HIDE_THRESHOLD,
            happiness_step: DEFAULT_HAPPINESS_STEP,
            initial_happiness: DEFAULT_INITIAL_HAPPINESS,
        }
    }
}

impl PageConfig {
    /// Reject settings that would break the page invariants.
    pub fn validate(&self) -> Result<()> {
        if self.blink_period_ms == 0 {
            return Err(CatInfoError::InvalidConfig(
                "blink period must be non-zero".into(),
            ));
        }
        if self.initial_happiness > MAX_HAPPINESS {
            return Err(CatInfoError::InvalidConfig(format!(
                "initial happiness {} exceeds {}",
                self.initial_happiness, MAX_HAPPINESS
            )));
        }
        Ok(())
    }

    pub fn blink_period(&self) -> Duration {
        Duration::from_millis(self.blink_period_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_behaviour() {
        let config = PageConfig::default();
        assert_eq!(config.blink_period(), Duration::from_secs(5));
        assert_eq!(config.toast_duration(), Duration::from_secs(2));
        assert_eq!(config.scroll_hide_threshold, 100);
        assert_eq!(config.happiness_step, 10);
        assert_eq!(config.initial_happiness, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_blink_period_rejected() {
        let config = PageConfig {
            blink_period_ms: 0,
            ..PageConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CatInfoError::InvalidConfig(_))
        ));
    }

    #[test]
    fn happiness_above_max_rejected() {
        let config = PageConfig {
            initial_happiness: 101,
            ..PageConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: PageConfig = serde_json::from_str(r#"{"blink_period_ms": 250}"#).unwrap();
        assert_eq!(config.blink_period_ms, 250);
        assert_eq!(config.toast_duration_ms, DEFAULT_TOAST_DURATION_MS);
    }
}
