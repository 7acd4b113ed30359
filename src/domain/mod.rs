//! Domain logic for the swipe demo.
//!
//! - Inbox (message generation, swipe action commands)

pub mod inbox;
