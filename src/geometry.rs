//! Swipe geometry: clamping and the offset range derived from the action strip.
//!
//! These functions are pure and run on the per-frame gesture path, so none of
//! them allocate.

use crate::config::SwipeConfig;

/// Clamps `value` into `[lower, upper]`.
///
/// Unlike `f32::clamp` this never panics when the bounds are inverted; the
/// lower bound wins, matching how the offset range degenerates to `[0, 0]`.
#[inline]
pub fn clamp(value: f32, lower: f32, upper: f32) -> f32 {
    value.min(upper).max(lower)
}

/// Dimensions that decide how far a row can travel and when it commits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeMetrics {
    /// Width of one action button including its trailing gap
    button_width: f32,
    /// Extra pull allowed past the fully revealed strip
    overshoot: f32,
    /// Number of actions in the strip
    action_count: usize,
}

impl SwipeMetrics {
    /// Creates metrics for a strip of `action_count` buttons.
    ///
    /// # Arguments
    /// * `button_width` - Width of one button including its gap
    /// * `overshoot` - Extra distance the user may drag past the revealed strip
    /// * `action_count` - Number of actions in the strip
    pub fn new(button_width: f32, overshoot: f32, action_count: usize) -> Self {
        Self {
            button_width: button_width.max(0.0),
            overshoot: overshoot.max(0.0),
            action_count,
        }
    }

    /// Metrics for `action_count` buttons using the configured dimensions.
    pub fn from_config(config: &SwipeConfig, action_count: usize) -> Self {
        Self::new(config.button_slot_width(), config.overshoot, action_count)
    }

    pub fn button_width(&self) -> f32 {
        self.button_width
    }

    pub fn overshoot(&self) -> f32 {
        self.overshoot
    }

    pub fn action_count(&self) -> usize {
        self.action_count
    }

    /// Returns a copy with a different action count.
    pub fn with_action_count(self, action_count: usize) -> Self {
        Self { action_count, ..self }
    }

    /// Offset magnitude at which every button is fully revealed.
    pub fn max_offset(&self) -> f32 {
        self.button_width * self.action_count as f32
    }

    /// Lowest offset a drag can reach (`-(max_offset + overshoot)`).
    pub fn min_offset(&self) -> f32 {
        -(self.max_offset() + self.overshoot)
    }

    /// Release distance at or past which the row is forced open.
    pub fn over_pull_threshold(&self) -> f32 {
        self.max_offset() + self.overshoot
    }

    /// Release distance at or past which the row commits to opening.
    pub fn open_threshold(&self) -> f32 {
        self.button_width / 2.0
    }

    /// Clamps a candidate offset into `[min_offset, 0]`.
    #[inline]
    pub fn clamp_offset(&self, candidate: f32) -> f32 {
        clamp(candidate, self.min_offset(), 0.0)
    }

    /// Whether `offset` lies inside the allowed range.
    pub fn contains(&self, offset: f32) -> bool {
        offset <= 0.0 && offset >= self.min_offset()
    }
}
