//! Header panel UI rendering
//!
//! Handles the top bar with list controls and the settings toggle.

use eframe::egui;
use egui::Color32;
use crate::app::AppState;

/// Result of user interaction with the header panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderInteraction {
    /// User clicked "Close all"
    CloseAllRequested,
    /// User clicked "Shuffle"
    ShuffleRequested,
    /// User clicked "Remove first"
    RemoveFirstRequested,
    /// User clicked "Reset"
    ResetRequested,
    /// User dismissed the error line
    ErrorDismissed,
}

/// Renders the application header with list controls
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        let any_open = state.list.open_index().is_some();
        if ui.add_enabled(any_open, egui::Button::new("✖ Close all")).clicked() {
            interaction = Some(HeaderInteraction::CloseAllRequested);
        }

        if ui.button("🔀 Shuffle").clicked() {
            interaction = Some(HeaderInteraction::ShuffleRequested);
        }

        let has_messages = !state.inbox.is_empty();
        if ui.add_enabled(has_messages, egui::Button::new("➖ Remove first")).clicked() {
            interaction = Some(HeaderInteraction::RemoveFirstRequested);
        }

        if ui.button("⟲ Reset").clicked() {
            interaction = Some(HeaderInteraction::ResetRequested);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.toggle_value(&mut state.show_settings, "⚙ Settings");
        });
    });

    if let Some(err) = &state.error_message {
        ui.horizontal(|ui| {
            ui.colored_label(Color32::RED, err);
            if ui.small_button("✖").clicked() {
                interaction = Some(HeaderInteraction::ErrorDismissed);
            }
        });
    }

    interaction
}
