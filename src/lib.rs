//! Swipe-to-reveal lists for egui.
//!
//! Rows of a vertical list can be dragged left to reveal action buttons. At
//! most one row is open at a time: opening a row closes every other row, and
//! pressing an action closes them all.
//!
//! - `geometry` - offset range and clamping
//! - `animation` - timing and spring interpolation stepped per frame
//! - `row_controller` - per-row gesture state machine
//! - `coordinator` - single-open coordination across rows
//! - `widget` - egui rendering

pub mod geometry;
pub mod config;
pub mod animation;
pub mod action;
pub mod row_controller;
pub mod coordinator;
pub mod widget;

// Export core state machine
pub use row_controller::{
    RowGestureController, RowKey, RowOpened, OpenedSink,
    GesturePhase, SnapDecision, SnapTarget, decide_snap
};

// Export coordination
pub use coordinator::{ListCoordinator, Reconciled};

// Export configuration and geometry
pub use config::{SwipeConfig, SpringConfig, ConfigError};
pub use geometry::{SwipeMetrics, clamp};

// Export actions
pub use action::{SwipeAction, ActionIcon, ActionOutcome, ActionFn};

// Export widget
pub use widget::{SwipeableList, SwipeListInteraction};
