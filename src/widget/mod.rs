//! egui rendering of swipeable lists
//!
//! - Swipeable list (gesture binding, row layout, scroll forwarding)
//! - Action strip (button painting and hit-testing)

pub mod action_strip;
pub mod swipeable_list;

pub use swipeable_list::{SwipeListInteraction, SwipeableList};
