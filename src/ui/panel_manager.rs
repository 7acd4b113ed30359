//! Panel orchestration and layout management.
//!
//! Lays out the header, status bar, inbox list and settings window, and folds
//! their results into one interaction for the application coordinator.

use crate::app::AppState;
use crate::ui::{header, inbox_panel, settings_window, status_bar};
use swipelist::SwipeListInteraction;

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug)]
pub enum PanelInteraction {
    Header(header::HeaderInteraction),
    Settings(settings_window::SettingsInteraction),
    List(SwipeListInteraction),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// More than one panel can report in the same frame (a header click while
    /// the list settles, say), so every interaction is returned in the order
    /// the panels were drawn.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Vec<PanelInteraction> {
        let mut interactions = Vec::new();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interactions.push(PanelInteraction::Header(header_interaction));
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let list_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(list_frame)
            .show(ctx, |ui| {
                ui.heading("Inbox");
                ui.separator();

                if let Some(list_interaction) = inbox_panel::render_inbox_panel(ui, state) {
                    interactions.push(PanelInteraction::List(list_interaction));
                }
            });

        if state.show_settings {
            if let Some(settings_interaction) = settings_window::render_settings_window(ctx, state) {
                interactions.push(PanelInteraction::Settings(settings_interaction));
            }
        }

        interactions
    }
}
