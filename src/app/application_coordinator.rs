//! Application-level coordination for the swipe demo.
//!
//! Header buttons, list interactions, queued inbox commands and settings
//! changes all funnel through here so the UI modules only report intent.

use swipelist::{ActionOutcome, SwipeListInteraction};

use crate::app::AppState;
use crate::domain::inbox;

pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Drives every row back to closed.
    pub fn close_all(state: &mut AppState) {
        state.list.close_all();
        state.last_event = Some("Closed all rows".to_string());
    }

    /// Reorders the inbox. Rows keep their swipe state since they are keyed
    /// by message id.
    pub fn shuffle(state: &mut AppState) {
        let mut messages = std::mem::take(&mut state.inbox);
        inbox::shuffle_inbox(&mut messages, state.rng_mut());
        state.inbox = messages;
        state.last_event = Some("Shuffled inbox".to_string());
    }

    /// Removes the first message, which resets every row.
    pub fn remove_first(state: &mut AppState) {
        if state.inbox.is_empty() {
            state.last_event = Some("Inbox is already empty".to_string());
            return;
        }
        let removed = state.inbox.remove(0);
        state.last_event = Some(format!("Removed \"{}\"", removed.subject));
    }

    /// Replaces the inbox with a newly generated one.
    pub fn reset(state: &mut AppState) {
        state.regenerate_inbox();
        state.list.close_all();
        state.error_message = None;
        state.last_event = Some("Inbox reset".to_string());
    }

    /// Records what the list reported this frame.
    pub fn handle_list_interaction(state: &mut AppState, interaction: SwipeListInteraction) {
        match interaction {
            SwipeListInteraction::RowOpened { index, key } => {
                tracing::debug!(index, %key, "row opened");
                state.last_event = Some(format!("Opened row {}", index));
            }
            SwipeListInteraction::ActionInvoked {
                index,
                action_id,
                outcome,
                ..
            } => {
                state.last_event = Some(format!("{} on row {}", action_id, index));
                if let ActionOutcome::Failed(message) = outcome {
                    state.error_message = Some(format!("Action \"{}\" failed: {}", action_id, message));
                }
            }
        }
    }

    /// Applies inbox commands queued by action callbacks.
    ///
    /// Returns the number of commands that were applied successfully.
    pub fn apply_pending_commands(state: &mut AppState) -> usize {
        let mut applied = 0;
        for command in state.drain_commands() {
            match inbox::apply_command(&mut state.inbox, command) {
                Ok(description) => {
                    tracing::info!(?command, "{}", description);
                    state.last_event = Some(description);
                    applied += 1;
                }
                Err(e) => {
                    tracing::warn!(?command, error = %e, "inbox command rejected");
                    state.error_message = Some(format!("{:#}", e));
                }
            }
        }
        applied
    }

    /// Validates the settings draft and applies it to the list.
    pub fn apply_draft_config(state: &mut AppState) -> bool {
        match state.draft_config.validate() {
            Ok(()) => {
                state.config = state.draft_config;
                state.list.set_config(state.config);
                state.error_message = None;
                state.last_event = Some("Settings applied".to_string());
                true
            }
            Err(e) => {
                state.error_message = Some(format!("Invalid settings: {}", e));
                false
            }
        }
    }

    /// Discards unapplied edits in the settings window.
    pub fn revert_draft_config(state: &mut AppState) {
        state.draft_config = state.config;
    }

    pub fn dismiss_error(state: &mut AppState) {
        state.error_message = None;
    }
}
