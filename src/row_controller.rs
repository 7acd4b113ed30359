//! Per-row swipe state machine.
//!
//! A [`RowGestureController`] turns one row's drag stream into a horizontal
//! offset and, when the drag ends, commits the row to either the open or the
//! closed resting position. The lifecycle has two phases per gesture:
//! - tracking: the offset mirrors the drag translation, clamped to the range
//! - settling: entered once at release, a snap animation runs toward the
//!   target chosen by [`decide_snap`]
//!
//! Committing to open sends a [`RowOpened`] message through the row's
//! [`OpenedSink`]. The controller never touches sibling rows.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::mpsc::Sender;

use crate::animation::{SnapAnimation, Spring, Timing};
use crate::config::SwipeConfig;
use crate::geometry::SwipeMetrics;

/// Stable identity of a list item, independent of its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(pub u64);

impl RowKey {
    /// Derives a key by hashing any hashable item identity (an id, a name...).
    pub fn of<T: Hash + ?Sized>(value: &T) -> Self {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        RowKey(hasher.finish())
    }
}

impl From<u64> for RowKey {
    fn from(value: u64) -> Self {
        RowKey(value)
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Message sent when a row commits to opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowOpened {
    /// Positional index of the row when it committed
    pub index: usize,
    /// Identity of the row
    pub key: RowKey,
}

/// Fire-and-forget delivery of [`RowOpened`] messages to the control side.
///
/// Sending never blocks. When an egui context is attached a repaint is
/// requested so the control side picks the message up on the next frame.
#[derive(Clone)]
pub struct OpenedSink {
    sender: Sender<RowOpened>,
    repaint: Option<egui::Context>,
}

impl OpenedSink {
    pub fn new(sender: Sender<RowOpened>) -> Self {
        Self { sender, repaint: None }
    }

    /// Requests a repaint of `ctx` after every delivered message.
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    pub(crate) fn set_repaint(&mut self, ctx: egui::Context) {
        self.repaint = Some(ctx);
    }

    /// Delivers `message`; a disconnected receiver is ignored.
    pub fn notify(&self, message: RowOpened) {
        if self.sender.send(message).is_err() {
            tracing::debug!(index = message.index, key = %message.key, "opened notification dropped, receiver gone");
            return;
        }
        if let Some(ctx) = &self.repaint {
            ctx.request_repaint();
        }
    }
}

impl fmt::Debug for OpenedSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenedSink")
            .field("repaint", &self.repaint.is_some())
            .finish()
    }
}

/// Resting position a row snaps toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapTarget {
    Open,
    Closed,
}

/// Outcome of the release decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapDecision {
    /// Pulled past the fully revealed strip plus the overshoot allowance
    OpenOverPull,
    /// Pulled past half of one button
    Open,
    /// Released short of the open threshold
    Close,
}

impl SnapDecision {
    pub fn target(self) -> SnapTarget {
        match self {
            SnapDecision::OpenOverPull | SnapDecision::Open => SnapTarget::Open,
            SnapDecision::Close => SnapTarget::Closed,
        }
    }
}

/// Decides where a row released `released` pixels from closed should snap.
///
/// `released` is the magnitude of the offset at release (`-offset`).
pub fn decide_snap(released: f32, metrics: &SwipeMetrics) -> SnapDecision {
    if released >= metrics.over_pull_threshold() {
        SnapDecision::OpenOverPull
    } else if released >= metrics.open_threshold() {
        SnapDecision::Open
    } else {
        SnapDecision::Close
    }
}

/// Gesture lifecycle phase of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// At rest, no gesture and no animation
    Idle,
    /// A drag is in progress
    Tracking,
    /// A snap animation is running
    Settling,
}

/// Horizontal swipe state of one row.
#[derive(Debug, Clone)]
pub struct RowGestureController {
    key: RowKey,
    row_index: usize,
    metrics: SwipeMetrics,
    config: SwipeConfig,
    /// Current horizontal translation, always inside `[metrics.min_offset(), 0]`
    offset: f32,
    /// Offset captured when the current gesture started
    gesture_origin: f32,
    /// Whether a drag is between its start and end
    tracking: bool,
    animation: Option<SnapAnimation>,
    /// Measured height of the row content, reused for the action strip
    content_height: f32,
    sink: Option<OpenedSink>,
}

impl RowGestureController {
    /// Creates a closed row.
    ///
    /// # Arguments
    /// * `key` - Stable identity of the item
    /// * `row_index` - Current position in the list
    /// * `action_count` - Number of actions in the row's strip
    /// * `config` - Shared dimensions and animation parameters
    pub fn new(key: RowKey, row_index: usize, action_count: usize, config: SwipeConfig) -> Self {
        Self {
            key,
            row_index,
            metrics: SwipeMetrics::from_config(&config, action_count),
            config,
            offset: 0.0,
            gesture_origin: 0.0,
            tracking: false,
            animation: None,
            content_height: config.default_row_height,
            sink: None,
        }
    }

    /// Attaches the sink that receives this row's opened notifications.
    pub fn with_sink(mut self, sink: OpenedSink) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn set_sink(&mut self, sink: Option<OpenedSink>) {
        self.sink = sink;
    }

    // ===== Queries =====

    pub fn key(&self) -> RowKey {
        self.key
    }

    pub fn row_index(&self) -> usize {
        self.row_index
    }

    pub fn metrics(&self) -> &SwipeMetrics {
        &self.metrics
    }

    pub fn max_offset(&self) -> f32 {
        self.metrics.max_offset()
    }

    pub fn action_count(&self) -> usize {
        self.metrics.action_count()
    }

    /// Live offset for the visual transform.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Offset the row will rest at once any running animation finishes.
    pub fn resting_offset(&self) -> f32 {
        match &self.animation {
            Some(anim) => anim.target(),
            None => self.offset,
        }
    }

    /// True when the row rests, or is heading to rest, away from closed.
    pub fn is_open(&self) -> bool {
        self.resting_offset() < 0.0
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn phase(&self) -> GesturePhase {
        if self.animation.is_some() {
            GesturePhase::Settling
        } else if self.tracking {
            GesturePhase::Tracking
        } else {
            GesturePhase::Idle
        }
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    // ===== Gesture input =====

    /// Begins a drag. A running snap animation is cancelled and its live
    /// value becomes the gesture origin.
    pub fn on_gesture_start(&mut self) {
        self.animation = None;
        self.gesture_origin = self.offset;
        self.tracking = true;
    }

    /// Applies the drag translation accumulated since the gesture started.
    #[inline]
    pub fn on_gesture_update(&mut self, drag_delta_x: f32) {
        if !self.tracking {
            // A sample without a start adopts the current value as origin
            self.on_gesture_start();
        }
        // The finger wins over a close issued mid-drag
        self.animation = None;
        self.offset = self.metrics.clamp_offset(self.gesture_origin + drag_delta_x);
    }

    /// Ends the drag, decides the resting target and starts the snap.
    ///
    /// Returns the decision; an open decision also notifies the sink.
    pub fn on_gesture_end(&mut self) -> SnapDecision {
        self.tracking = false;
        let released = -self.offset;
        let decision = decide_snap(released, &self.metrics);

        match decision.target() {
            SnapTarget::Open => {
                self.snap_open();
                if let Some(sink) = &self.sink {
                    sink.notify(RowOpened {
                        index: self.row_index,
                        key: self.key,
                    });
                }
            }
            SnapTarget::Closed => self.snap_closed(),
        }

        decision
    }

    /// Springs the row back to closed without notifying anyone.
    ///
    /// A row already resting closed is left untouched.
    pub fn close(&mut self) {
        if self.offset == 0.0 && self.animation.is_none() {
            return;
        }
        if let Some(SnapAnimation::Spring(spring)) = &self.animation {
            if spring.target() == 0.0 {
                return;
            }
        }
        self.snap_closed();
    }

    // ===== Configuration =====

    /// Changes the number of actions in the strip.
    ///
    /// The offset is only clamped into the new range; a row resting open at
    /// the old width keeps that offset until its next gesture or close. A
    /// running reveal is redirected to the new width.
    pub fn set_action_count(&mut self, action_count: usize) {
        if action_count == self.metrics.action_count() {
            return;
        }
        self.metrics = self.metrics.with_action_count(action_count);
        self.reclamp();
    }

    /// Replaces the shared configuration, keeping the action count.
    pub fn set_config(&mut self, config: SwipeConfig) {
        if config == self.config {
            return;
        }
        self.config = config;
        self.metrics = SwipeMetrics::from_config(&config, self.metrics.action_count());
        self.reclamp();
    }

    pub fn set_row_index(&mut self, row_index: usize) {
        self.row_index = row_index;
    }

    /// Records the measured height of the row content.
    ///
    /// Returns true when the stored height changed. Empty or non-finite
    /// measurements are ignored and keep the previous height.
    pub fn set_content_height(&mut self, height: f32) -> bool {
        if !height.is_finite() || height <= 0.0 {
            return false;
        }
        if (height - self.content_height).abs() <= 0.5 {
            return false;
        }
        self.content_height = height;
        true
    }

    // ===== Animation driver =====

    /// Advances the snap animation by `dt` seconds.
    ///
    /// Returns true while the row is still animating.
    pub fn tick(&mut self, dt: f32) -> bool {
        let min = self.metrics.min_offset();
        let Some(anim) = self.animation.as_mut() else {
            return false;
        };
        self.offset = anim.tick_clamped(dt, min, 0.0);
        if anim.is_complete() {
            self.offset = self.metrics.clamp_offset(anim.target());
            self.animation = None;
            return false;
        }
        true
    }

    /// Jumps straight to the resting position of any running animation.
    pub fn finish_animation(&mut self) {
        if let Some(anim) = self.animation.take() {
            self.offset = self.metrics.clamp_offset(anim.target());
        }
    }

    fn snap_open(&mut self) {
        let target = -self.metrics.max_offset();
        let timing = Timing::new(self.offset, target, self.config.open_duration_secs());
        self.start_animation(SnapAnimation::Timing(timing));
    }

    fn snap_closed(&mut self) {
        let spring = Spring::new(self.offset, 0.0, self.config.spring);
        self.start_animation(SnapAnimation::Spring(spring));
    }

    fn start_animation(&mut self, anim: SnapAnimation) {
        if anim.is_complete() {
            self.offset = self.metrics.clamp_offset(anim.target());
            self.animation = None;
        } else {
            self.animation = Some(anim);
        }
    }

    fn reclamp(&mut self) {
        self.offset = self.metrics.clamp_offset(self.offset);
        if let Some(SnapAnimation::Timing(timing)) = &mut self.animation {
            timing.retarget(-self.metrics.max_offset());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    fn controller(actions: usize) -> RowGestureController {
        RowGestureController::new(RowKey(7), 0, actions, SwipeConfig::default())
    }

    fn settle(row: &mut RowGestureController) {
        let mut frames = 0;
        while row.tick(1.0 / 60.0) {
            frames += 1;
            assert!(frames < 10_000, "row never settled");
        }
    }

    fn drag(row: &mut RowGestureController, dx: f32) -> SnapDecision {
        row.on_gesture_start();
        row.on_gesture_update(dx / 2.0);
        row.on_gesture_update(dx);
        row.on_gesture_end()
    }

    #[test]
    fn test_decision_thresholds() {
        let metrics = SwipeMetrics::new(76.0, 40.0, 3);
        assert_eq!(decide_snap(0.0, &metrics), SnapDecision::Close);
        assert_eq!(decide_snap(37.9, &metrics), SnapDecision::Close);
        assert_eq!(decide_snap(38.0, &metrics), SnapDecision::Open);
        assert_eq!(decide_snap(267.0, &metrics), SnapDecision::Open);
        assert_eq!(decide_snap(268.0, &metrics), SnapDecision::OpenOverPull);
        assert_eq!(SnapDecision::OpenOverPull.target(), SnapTarget::Open);
    }

    #[test]
    fn test_update_clamps_both_ends() {
        let mut row = controller(3);
        row.on_gesture_start();
        row.on_gesture_update(120.0);
        assert_eq!(row.offset(), 0.0);
        row.on_gesture_update(-1000.0);
        assert_eq!(row.offset(), -268.0);
        row.on_gesture_update(-100.0);
        assert_eq!(row.offset(), -100.0);
    }

    #[test]
    fn test_release_past_half_button_opens() {
        let mut row = controller(3);
        assert_eq!(drag(&mut row, -50.0), SnapDecision::Open);
        assert_eq!(row.phase(), GesturePhase::Settling);
        assert!(row.is_open());
        settle(&mut row);
        assert_eq!(row.offset(), -228.0);
        assert_eq!(row.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_short_release_closes() {
        let mut row = controller(3);
        assert_eq!(drag(&mut row, -20.0), SnapDecision::Close);
        settle(&mut row);
        assert_eq!(row.offset(), 0.0);
        assert!(!row.is_open());
    }

    #[test]
    fn test_over_pull_opens_to_full_reveal() {
        let mut row = controller(2);
        assert_eq!(drag(&mut row, -500.0), SnapDecision::OpenOverPull);
        settle(&mut row);
        assert_eq!(row.offset(), -152.0);
    }

    #[test]
    fn test_gesture_start_adopts_animated_value() {
        let mut row = controller(3);
        drag(&mut row, -60.0);
        row.tick(0.1);
        let mid = row.offset();
        assert!(mid < -60.0 && mid > -228.0);

        row.on_gesture_start();
        assert!(!row.is_animating());
        assert_eq!(row.offset(), mid);
        row.on_gesture_update(10.0);
        assert_eq!(row.offset(), mid + 10.0);
    }

    #[test]
    fn test_dragging_open_row_starts_from_open_offset() {
        let mut row = controller(3);
        drag(&mut row, -100.0);
        settle(&mut row);
        row.on_gesture_start();
        row.on_gesture_update(200.0);
        assert_eq!(row.offset(), -28.0);
        assert_eq!(row.on_gesture_end(), SnapDecision::Close);
    }

    #[test]
    fn test_open_notifies_sink_once() {
        let (tx, rx) = channel();
        let mut row = RowGestureController::new(RowKey(42), 4, 3, SwipeConfig::default())
            .with_sink(OpenedSink::new(tx));
        drag(&mut row, -80.0);
        assert_eq!(rx.try_recv(), Ok(RowOpened { index: 4, key: RowKey(42) }));
        assert!(rx.try_recv().is_err());

        drag(&mut row, 200.0);
        assert!(rx.try_recv().is_err(), "closing must not notify");
    }

    #[test]
    fn test_sink_with_repaint_still_delivers() {
        let (tx, rx) = channel();
        let ctx = egui::Context::default();
        let mut row = RowGestureController::new(RowKey(5), 1, 2, SwipeConfig::default())
            .with_sink(OpenedSink::new(tx).with_repaint(ctx));
        drag(&mut row, -80.0);
        assert_eq!(rx.try_recv(), Ok(RowOpened { index: 1, key: RowKey(5) }));
    }

    #[test]
    fn test_missing_or_disconnected_sink_is_noop() {
        let mut row = controller(3);
        assert_eq!(drag(&mut row, -80.0), SnapDecision::Open);

        let (tx, rx) = channel();
        drop(rx);
        let mut row = controller(3).with_sink(OpenedSink::new(tx));
        assert_eq!(drag(&mut row, -80.0), SnapDecision::Open);
    }

    #[test]
    fn test_close_is_idempotent_on_closed_row() {
        let mut row = controller(3);
        row.close();
        assert!(!row.is_animating());
        assert_eq!(row.offset(), 0.0);
        assert_eq!(row.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_close_springs_open_row_home() {
        let mut row = controller(3);
        drag(&mut row, -100.0);
        settle(&mut row);
        row.close();
        assert!(row.is_animating());
        assert!(!row.is_open());
        let mut frames = 0;
        while row.tick(1.0 / 60.0) {
            assert!(row.offset() <= 0.0 && row.offset() >= -268.0);
            frames += 1;
            assert!(frames < 10_000);
        }
        assert_eq!(row.offset(), 0.0);
    }

    #[test]
    fn test_zero_actions_any_drag_past_threshold_opens_in_place() {
        let (tx, rx) = channel();
        let mut row = controller(0).with_sink(OpenedSink::new(tx));
        assert_eq!(drag(&mut row, -1000.0), SnapDecision::OpenOverPull);
        settle(&mut row);
        assert_eq!(row.offset(), 0.0);
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn test_action_count_change_reclamps_offset() {
        let mut row = controller(3);
        drag(&mut row, -100.0);
        settle(&mut row);
        assert_eq!(row.offset(), -228.0);

        row.set_action_count(1);
        assert_eq!(row.max_offset(), 76.0);
        assert_eq!(row.offset(), -116.0);

        // Growing leaves the resting offset as it was
        row.set_action_count(4);
        assert_eq!(row.offset(), -116.0);
    }

    #[test]
    fn test_action_count_change_redirects_running_reveal() {
        let mut row = controller(3);
        drag(&mut row, -100.0);
        row.tick(0.05);
        row.set_action_count(2);
        settle(&mut row);
        assert_eq!(row.offset(), -152.0);
    }

    #[test]
    fn test_content_height_ignores_bogus_measurements() {
        let mut row = controller(1);
        assert_eq!(row.content_height(), 64.0);
        assert!(row.set_content_height(48.0));
        assert!(!row.set_content_height(f32::NAN));
        assert!(!row.set_content_height(0.0));
        assert!(!row.set_content_height(48.2));
        assert_eq!(row.content_height(), 48.0);
    }

    #[test]
    fn test_row_key_of_is_stable() {
        assert_eq!(RowKey::of("inbox-1"), RowKey::of("inbox-1"));
        assert_ne!(RowKey::of("inbox-1"), RowKey::of("inbox-2"));
    }
}
