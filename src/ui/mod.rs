//! UI panel rendering subsystem
//!
//! - Header panel (list controls, settings toggle)
//! - Inbox panel (the swipeable message list)
//! - Settings window (swipe configuration editor)
//! - Status bar (open row and last interaction)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod inbox_panel;
pub mod settings_window;
pub mod status_bar;
pub mod panel_manager;
