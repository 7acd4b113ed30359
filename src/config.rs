//! Swipe configuration.
//!
//! Holds the dimensions and animation parameters shared by every row of a
//! list. The defaults reproduce the stock look: 60px buttons in a 68px slot
//! with an 8px gap, a 40px over-pull allowance, a 300ms reveal and a soft
//! spring for closing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when validating a [`SwipeConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("button width must be positive, got {0}")]
    ButtonWidth(f32),
    #[error("button gap must not be negative, got {0}")]
    ButtonGap(f32),
    #[error("overshoot must not be negative, got {0}")]
    Overshoot(f32),
    #[error("open duration must be positive, got {0}ms")]
    OpenDuration(f32),
    #[error("spring stiffness must be positive, got {0}")]
    SpringStiffness(f32),
    #[error("spring damping must not be negative, got {0}")]
    SpringDamping(f32),
    #[error("spring mass must be positive, got {0}")]
    SpringMass(f32),
}

/// Parameters of the closing spring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance from the target below which the spring may come to rest
    pub rest_displacement: f32,
    /// Speed below which the spring may come to rest
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            rest_displacement: 0.01,
            rest_speed: 2.0,
        }
    }
}

/// Configuration shared by all rows of a swipeable list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Width of the slot reserved for one action button (excluding the gap)
    pub button_width: f32,
    /// Gap after each button; part of the distance each action adds
    pub button_gap: f32,
    /// Side length of the painted button square
    pub button_size: f32,
    /// Corner radius of the painted button
    pub button_rounding: f32,
    /// Extra distance a row may be pulled past the fully revealed strip
    pub overshoot: f32,
    /// Duration of the reveal animation in milliseconds
    pub open_duration_ms: f32,
    /// Closing spring parameters
    pub spring: SpringConfig,
    /// Row height used before the first layout measurement
    pub default_row_height: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            button_width: 68.0,
            button_gap: 8.0,
            button_size: 60.0,
            button_rounding: 4.0,
            overshoot: 40.0,
            open_duration_ms: 300.0,
            spring: SpringConfig::default(),
            default_row_height: 64.0,
        }
    }
}

impl SwipeConfig {
    /// Horizontal distance each action adds to the reveal (`button_width + button_gap`).
    pub fn button_slot_width(&self) -> f32 {
        self.button_width + self.button_gap
    }

    /// Reveal duration in seconds.
    pub fn open_duration_secs(&self) -> f32 {
        self.open_duration_ms / 1000.0
    }

    /// Checks every field for a usable value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // NaN fails every comparison below, so it is rejected too
        if !(self.button_width > 0.0) {
            return Err(ConfigError::ButtonWidth(self.button_width));
        }
        if !(self.button_gap >= 0.0) {
            return Err(ConfigError::ButtonGap(self.button_gap));
        }
        if !(self.overshoot >= 0.0) {
            return Err(ConfigError::Overshoot(self.overshoot));
        }
        if !(self.open_duration_ms > 0.0) {
            return Err(ConfigError::OpenDuration(self.open_duration_ms));
        }
        if !(self.spring.stiffness > 0.0) {
            return Err(ConfigError::SpringStiffness(self.spring.stiffness));
        }
        if !(self.spring.damping >= 0.0) {
            return Err(ConfigError::SpringDamping(self.spring.damping));
        }
        if !(self.spring.mass > 0.0) {
            return Err(ConfigError::SpringMass(self.spring.mass));
        }
        Ok(())
    }

    /// Returns the config if it validates, otherwise the defaults.
    pub fn validated_or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                tracing::warn!(error = %e, "invalid swipe config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SwipeConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.button_slot_width(), 76.0);
        assert!((config.open_duration_secs() - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn test_validate_rejects_each_field() {
        let base = SwipeConfig::default();

        let config = SwipeConfig { button_width: 0.0, ..base };
        assert_eq!(config.validate(), Err(ConfigError::ButtonWidth(0.0)));

        let config = SwipeConfig { button_gap: -1.0, ..base };
        assert_eq!(config.validate(), Err(ConfigError::ButtonGap(-1.0)));

        let config = SwipeConfig { overshoot: -2.0, ..base };
        assert_eq!(config.validate(), Err(ConfigError::Overshoot(-2.0)));

        let config = SwipeConfig { open_duration_ms: 0.0, ..base };
        assert_eq!(config.validate(), Err(ConfigError::OpenDuration(0.0)));

        let spring = SpringConfig { stiffness: 0.0, ..base.spring };
        let config = SwipeConfig { spring, ..base };
        assert_eq!(config.validate(), Err(ConfigError::SpringStiffness(0.0)));

        let spring = SpringConfig { damping: -1.0, ..base.spring };
        let config = SwipeConfig { spring, ..base };
        assert_eq!(config.validate(), Err(ConfigError::SpringDamping(-1.0)));

        let spring = SpringConfig { mass: 0.0, ..base.spring };
        let config = SwipeConfig { spring, ..base };
        assert_eq!(config.validate(), Err(ConfigError::SpringMass(0.0)));
    }

    #[test]
    fn test_nan_is_rejected() {
        let config = SwipeConfig { button_width: f32::NAN, ..SwipeConfig::default() };
        assert!(config.validate().is_err());
        assert_eq!(config.validated_or_default(), SwipeConfig::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: SwipeConfig = serde_json::from_str(r#"{"overshoot": 12.5}"#).unwrap();
        assert_eq!(config.overshoot, 12.5);
        assert_eq!(config.button_width, 68.0);
        assert_eq!(config.spring, SpringConfig::default());
    }
}
