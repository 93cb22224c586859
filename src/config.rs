//! Cursor tuning knobs.
//!
//! Every empirically chosen constant of the motion model lives here as a
//! default so host applications can persist and reload tuning profiles. The
//! exact values are "looks human enough" numbers, not correctness
//! properties; only the relations the planner and overshoot policy document
//! (monotonicity, strict threshold) are load-bearing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by [`CursorConfig::validate`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A min/max delay pair is inverted.
    #[error("invalid delay range {field}: min {min} > max {max}")]
    InvalidRange {
        /// Name of the offending field pair
        field: &'static str,
        /// Configured minimum in milliseconds
        min: u64,
        /// Configured maximum in milliseconds
        max: u64,
    },
    /// A distance parameter is negative or non-finite.
    #[error("invalid distance for {field}: {value}")]
    InvalidDistance {
        /// Name of the offending field
        field: &'static str,
        /// Configured value
        value: f64,
    },
}

/// Configuration for cursor motion and timing behavior.
///
/// # Example
///
/// ```rust
/// use human_cursor::config::CursorConfig;
///
/// let config = CursorConfig::default()
///     .with_overshoot_threshold(400.0)
///     .with_settle_delay_max_ms(500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Straight-line distance above which a motion overshoots first.
    pub overshoot_threshold: f64,
    /// Maximum distance the aim point extends past the true target.
    pub overshoot_radius: f64,
    /// Curve spread used for the tight corrective path after an overshoot.
    pub corrective_spread: f64,
    /// Minimum delay between traced points in milliseconds.
    pub step_delay_min_ms: u64,
    /// Maximum delay between traced points in milliseconds.
    pub step_delay_max_ms: u64,
    /// Minimum press-to-release hold during a click in milliseconds.
    pub click_hold_min_ms: u64,
    /// Maximum press-to-release hold during a click in milliseconds.
    pub click_hold_max_ms: u64,
    /// Upper bound of the randomized settle delay after a click.
    pub settle_delay_max_ms: u64,
    /// Upper bound of the randomized pause between idle-wander cycles.
    pub wander_pause_max_ms: u64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            overshoot_threshold: 500.0,
            overshoot_radius: 120.0,
            corrective_spread: 10.0,
            step_delay_min_ms: 5,
            step_delay_max_ms: 15,
            click_hold_min_ms: 70,
            click_hold_max_ms: 150,
            settle_delay_max_ms: 2000,
            wander_pause_max_ms: 2000,
        }
    }
}

impl CursorConfig {
    /// Creates a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration with every delay zeroed.
    ///
    /// Motion geometry is unchanged; only the sleeps disappear. Useful in
    /// tests and batch runs where realism in time does not matter.
    pub fn instant() -> Self {
        Self {
            step_delay_min_ms: 0,
            step_delay_max_ms: 0,
            click_hold_min_ms: 0,
            click_hold_max_ms: 0,
            settle_delay_max_ms: 0,
            wander_pause_max_ms: 0,
            ..Self::default()
        }
    }

    /// Sets the overshoot distance threshold.
    pub fn with_overshoot_threshold(mut self, threshold: f64) -> Self {
        self.overshoot_threshold = threshold;
        self
    }

    /// Sets the overshoot aim radius.
    pub fn with_overshoot_radius(mut self, radius: f64) -> Self {
        self.overshoot_radius = radius;
        self
    }

    /// Sets the corrective curve spread.
    pub fn with_corrective_spread(mut self, spread: f64) -> Self {
        self.corrective_spread = spread;
        self
    }

    /// Sets the per-point step delay range in milliseconds.
    pub fn with_step_delay_ms(mut self, min: u64, max: u64) -> Self {
        self.step_delay_min_ms = min;
        self.step_delay_max_ms = max;
        self
    }

    /// Sets the click hold duration range in milliseconds.
    pub fn with_click_hold_ms(mut self, min: u64, max: u64) -> Self {
        self.click_hold_min_ms = min;
        self.click_hold_max_ms = max;
        self
    }

    /// Sets the post-click settle delay upper bound in milliseconds.
    pub fn with_settle_delay_max_ms(mut self, max: u64) -> Self {
        self.settle_delay_max_ms = max;
        self
    }

    /// Sets the inter-cycle wander pause upper bound in milliseconds.
    pub fn with_wander_pause_max_ms(mut self, max: u64) -> Self {
        self.wander_pause_max_ms = max;
        self
    }

    /// Validates range ordering and distance parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_delay_min_ms > self.step_delay_max_ms {
            return Err(ConfigError::InvalidRange {
                field: "step_delay_ms",
                min: self.step_delay_min_ms,
                max: self.step_delay_max_ms,
            });
        }
        if self.click_hold_min_ms > self.click_hold_max_ms {
            return Err(ConfigError::InvalidRange {
                field: "click_hold_ms",
                min: self.click_hold_min_ms,
                max: self.click_hold_max_ms,
            });
        }
        for (field, value) in [
            ("overshoot_threshold", self.overshoot_threshold),
            ("overshoot_radius", self.overshoot_radius),
            ("corrective_spread", self.corrective_spread),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDistance { field, value });
            }
        }
        Ok(())
    }
}
