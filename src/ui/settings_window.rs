//! Settings window UI rendering
//!
//! Edits a draft of the swipe configuration; nothing reaches the list until
//! the draft is applied.

use eframe::egui;
use swipelist::SwipeConfig;
use crate::app::AppState;

/// Result of user interaction with the settings window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsInteraction {
    ApplyRequested,
    RevertRequested,
}

fn drag_row(ui: &mut egui::Ui, label: &str, value: &mut f32, range: std::ops::RangeInclusive<f32>, suffix: &str) {
    ui.label(label);
    ui.add(egui::DragValue::new(value).range(range).speed(0.5).suffix(suffix));
    ui.end_row();
}

/// Renders the settings window when it is open
///
/// # Arguments
/// * `ctx` - The egui context to show the window in
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<SettingsInteraction>` - User interaction result
pub fn render_settings_window(ctx: &egui::Context, state: &mut AppState) -> Option<SettingsInteraction> {
    let mut interaction = None;
    let mut open = state.show_settings;
    let dirty = state.draft_config != state.config;

    egui::Window::new("Swipe settings")
        .open(&mut open)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            let draft = &mut state.draft_config;

            ui.strong("Buttons");
            egui::Grid::new("button_settings").num_columns(2).show(ui, |ui| {
                drag_row(ui, "Slot width", &mut draft.button_width, 0.0..=200.0, " px");
                drag_row(ui, "Gap", &mut draft.button_gap, 0.0..=40.0, " px");
                drag_row(ui, "Size", &mut draft.button_size, 8.0..=200.0, " px");
                drag_row(ui, "Rounding", &mut draft.button_rounding, 0.0..=100.0, " px");
            });

            ui.separator();
            ui.strong("Gesture");
            egui::Grid::new("gesture_settings").num_columns(2).show(ui, |ui| {
                drag_row(ui, "Overshoot", &mut draft.overshoot, 0.0..=200.0, " px");
                drag_row(ui, "Open duration", &mut draft.open_duration_ms, 0.0..=2000.0, " ms");
            });

            ui.separator();
            ui.strong("Closing spring");
            egui::Grid::new("spring_settings").num_columns(2).show(ui, |ui| {
                drag_row(ui, "Stiffness", &mut draft.spring.stiffness, 0.0..=1000.0, "");
                drag_row(ui, "Damping", &mut draft.spring.damping, 0.0..=100.0, "");
                drag_row(ui, "Mass", &mut draft.spring.mass, 0.0..=20.0, "");
            });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.add_enabled(dirty, egui::Button::new("Apply")).clicked() {
                    interaction = Some(SettingsInteraction::ApplyRequested);
                }
                if ui.add_enabled(dirty, egui::Button::new("Revert")).clicked() {
                    interaction = Some(SettingsInteraction::RevertRequested);
                }
                if ui.button("Defaults").clicked() {
                    state.draft_config = SwipeConfig::default();
                }
            });

            if let Err(e) = state.draft_config.validate() {
                ui.colored_label(egui::Color32::RED, e.to_string());
            }
        });

    state.show_settings = open;
    interaction
}
