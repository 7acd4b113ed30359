//! Application-level modules for the swipe demo.
//!
//! This module contains the demo's state, the coordinator that applies user
//! intent to it, and settings persistence.

pub mod app_state;
mod application_coordinator;
mod settings_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use settings_coordinator::SettingsCoordinator;
