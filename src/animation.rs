//! Snap animations driven by the host frame clock.
//!
//! Two interpolators are provided:
//! - [`Timing`]: fixed-duration ease-in-out interpolation, used to reveal the
//!   action strip without overshooting past the buttons
//! - [`Spring`]: damped harmonic oscillator, used to settle a row closed
//!
//! Both are advanced with `tick(dt)` where `dt` is in seconds, and neither
//! allocates. The spring uses semi-implicit Euler integration and subdivides
//! large frame deltas for stability.

use crate::config::SpringConfig;

/// Maximum integration step for the spring (4ms).
const MAX_SPRING_STEP: f32 = 0.004;

/// Ease-in-out quadratic curve over `t` in `[0, 1]`.
#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Fixed-duration eased interpolation between two values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
}

impl Timing {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    pub fn value(&self) -> f32 {
        if self.is_complete() {
            return self.to;
        }
        let t = self.elapsed / self.duration;
        self.from + (self.to - self.from) * ease_in_out_quad(t)
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
    }

    /// Moves the end point, keeping the elapsed time and the current value as the new start.
    pub fn retarget(&mut self, to: f32) {
        let current = self.value();
        let remaining = self.duration - self.elapsed;
        *self = Self::new(current, to, remaining);
    }
}

/// Damped spring moving a value toward a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    params: SpringConfig,
    at_rest: bool,
}

impl Spring {
    pub fn new(from: f32, to: f32, params: SpringConfig) -> Self {
        let mut spring = Self {
            position: from,
            velocity: 0.0,
            target: to,
            params,
            at_rest: false,
        };
        spring.check_rest();
        spring
    }

    pub fn value(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_complete(&self) -> bool {
        self.at_rest
    }

    /// Overrides the position, e.g. after it was clamped by the caller.
    ///
    /// A position pinned at a bound loses its velocity so the spring cannot
    /// keep pushing against the bound.
    pub fn pin(&mut self, position: f32) {
        if position != self.position {
            self.position = position;
            self.velocity = 0.0;
            self.check_rest();
        }
    }

    pub fn tick(&mut self, dt: f32) {
        if self.at_rest || dt <= 0.0 {
            return;
        }
        let mass = self.params.mass.max(f32::EPSILON);
        let mut remaining = dt;
        while remaining > 0.0 {
            let step = remaining.min(MAX_SPRING_STEP);
            let displacement = self.position - self.target;
            let force = -self.params.stiffness * displacement - self.params.damping * self.velocity;
            self.velocity += force / mass * step;
            self.position += self.velocity * step;
            remaining -= step;
        }
        self.check_rest();
    }

    fn check_rest(&mut self) {
        let near = (self.position - self.target).abs() <= self.params.rest_displacement;
        let slow = self.velocity.abs() <= self.params.rest_speed;
        if near && slow {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }
}

/// An in-flight snap toward the open or closed resting offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapAnimation {
    /// Reveal: fixed duration, no overshoot
    Timing(Timing),
    /// Close: spring settle
    Spring(Spring),
}

impl SnapAnimation {
    pub fn value(&self) -> f32 {
        match self {
            SnapAnimation::Timing(t) => t.value(),
            SnapAnimation::Spring(s) => s.value(),
        }
    }

    pub fn target(&self) -> f32 {
        match self {
            SnapAnimation::Timing(t) => t.target(),
            SnapAnimation::Spring(s) => s.target(),
        }
    }

    pub fn is_complete(&self) -> bool {
        match self {
            SnapAnimation::Timing(t) => t.is_complete(),
            SnapAnimation::Spring(s) => s.is_complete(),
        }
    }

    /// Advances by `dt` seconds and returns the new value clamped to `[lower, upper]`.
    pub fn tick_clamped(&mut self, dt: f32, lower: f32, upper: f32) -> f32 {
        match self {
            SnapAnimation::Timing(t) => {
                t.tick(dt);
                crate::geometry::clamp(t.value(), lower, upper)
            }
            SnapAnimation::Spring(s) => {
                s.tick(dt);
                let clamped = crate::geometry::clamp(s.value(), lower, upper);
                s.pin(clamped);
                clamped
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_rest(anim: &mut SnapAnimation, lower: f32, upper: f32) -> (f32, usize) {
        let mut frames = 0;
        let mut value = anim.value();
        while !anim.is_complete() && frames < 10_000 {
            value = anim.tick_clamped(1.0 / 60.0, lower, upper);
            frames += 1;
        }
        (value, frames)
    }

    #[test]
    fn test_ease_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert!((ease_in_out_quad(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(ease_in_out_quad(-3.0), 0.0);
        assert_eq!(ease_in_out_quad(7.0), 1.0);
    }

    #[test]
    fn test_timing_reaches_target_without_overshoot() {
        let mut timing = Timing::new(-50.0, -228.0, 0.3);
        let mut last = timing.value();
        while !timing.is_complete() {
            timing.tick(1.0 / 60.0);
            let v = timing.value();
            assert!(v <= last + 1e-4, "timing must move monotonically toward target");
            assert!(v >= -228.0 - 1e-4);
            last = v;
        }
        assert_eq!(timing.value(), -228.0);
    }

    #[test]
    fn test_timing_zero_duration_is_complete() {
        let timing = Timing::new(-10.0, 0.0, 0.0);
        assert!(timing.is_complete());
        assert_eq!(timing.value(), 0.0);
    }

    #[test]
    fn test_timing_retarget_keeps_current_value() {
        let mut timing = Timing::new(0.0, -200.0, 0.3);
        timing.tick(0.1);
        let before = timing.value();
        timing.retarget(-100.0);
        assert!((timing.value() - before).abs() < 1e-4);
        timing.tick(1.0);
        assert_eq!(timing.value(), -100.0);
    }

    #[test]
    fn test_spring_settles_at_target() {
        let mut anim = SnapAnimation::Spring(Spring::new(-120.0, 0.0, SpringConfig::default()));
        let (value, frames) = run_to_rest(&mut anim, -300.0, 0.0);
        assert_eq!(value, 0.0);
        assert!(frames < 10_000, "spring never settled");
    }

    #[test]
    fn test_spring_rebound_is_clamped_at_upper_bound() {
        let mut spring = Spring::new(-200.0, 0.0, SpringConfig::default());
        for _ in 0..600 {
            spring.tick(1.0 / 60.0);
            let clamped = crate::geometry::clamp(spring.value(), -300.0, 0.0);
            spring.pin(clamped);
            assert!(spring.value() <= 0.0);
        }
        assert!(spring.is_complete());
    }

    #[test]
    fn test_spring_pin_drops_velocity() {
        let mut spring = Spring::new(-100.0, 0.0, SpringConfig::default());
        spring.tick(0.05);
        assert!(spring.velocity() > 0.0);
        spring.pin(spring.value() - 1.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn test_spring_already_at_target_is_at_rest() {
        let spring = Spring::new(0.0, 0.0, SpringConfig::default());
        assert!(spring.is_complete());
    }

    #[test]
    fn test_large_dt_is_stable() {
        let mut spring = Spring::new(-100.0, 0.0, SpringConfig::default());
        spring.tick(5.0);
        assert!(spring.value().is_finite());
        assert!(spring.value().abs() < 100.0);
    }
}
