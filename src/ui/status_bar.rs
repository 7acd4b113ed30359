//! Status bar UI rendering
//!
//! Shows the list size, which row is open and the last interaction.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("Messages: {}", state.inbox.len())).strong());
        ui.label(RichText::new("|").strong());

        let open = state
            .list
            .open_index()
            .map(|i| i.to_string())
            .unwrap_or_else(|| "none".to_string());
        ui.label(RichText::new(format!("Open row: {}", open)).strong());

        if state.list.is_animating() {
            ui.label(RichText::new("| animating").weak());
        }

        if let Some(event) = &state.last_event {
            ui.label(RichText::new("|").strong());
            ui.label(event);
        }
    });
}
