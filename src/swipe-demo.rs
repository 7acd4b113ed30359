//! Swipe list demo application
//!
//! An inbox whose rows are swiped left to reveal archive, flag and delete
//! buttons. Opening one row closes the others; pressing a button closes all.
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state, coordination and settings persistence
//! - `domain/` - The inbox model and the commands swipe actions issue
//! - `ui/` - Panel rendering and layout

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use tracing_subscriber::EnvFilter;

mod app;
mod domain;
mod ui;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator};
use ui::header::HeaderInteraction;
use ui::panel_manager::{PanelInteraction, PanelManager};
use ui::settings_window::SettingsInteraction;

/// Application entry point; `RUST_LOG` overrides the default `info` filter.
fn main() -> eframe::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 720.0])
            .with_title("Swipe List Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "Swipe List Demo",
        options,
        Box::new(|cc| Ok(Box::new(SwipeDemoApp::new(cc)))),
    )
}

struct SwipeDemoApp {
    state: AppState,
    /// Set when applied settings still need to be written to storage
    settings_dirty: bool,
}

impl SwipeDemoApp {
    /// Creates the demo with the swipe configuration loaded from persistent storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let config = SettingsCoordinator::load_swipe_config(cc.storage);
        tracing::info!(?config, "starting swipe demo");
        Self {
            state: AppState::new(config),
            settings_dirty: false,
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::Header(header) => match header {
                HeaderInteraction::CloseAllRequested => ApplicationCoordinator::close_all(&mut self.state),
                HeaderInteraction::ShuffleRequested => ApplicationCoordinator::shuffle(&mut self.state),
                HeaderInteraction::RemoveFirstRequested => ApplicationCoordinator::remove_first(&mut self.state),
                HeaderInteraction::ResetRequested => ApplicationCoordinator::reset(&mut self.state),
                HeaderInteraction::ErrorDismissed => ApplicationCoordinator::dismiss_error(&mut self.state),
            },
            PanelInteraction::Settings(settings) => match settings {
                SettingsInteraction::ApplyRequested => {
                    if ApplicationCoordinator::apply_draft_config(&mut self.state) {
                        self.settings_dirty = true;
                    }
                }
                SettingsInteraction::RevertRequested => ApplicationCoordinator::revert_draft_config(&mut self.state),
            },
            PanelInteraction::List(list) => {
                ApplicationCoordinator::handle_list_interaction(&mut self.state, list);
            }
        }
    }
}

impl eframe::App for SwipeDemoApp {
    /// Called when the app is being shut down - ensures settings are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_swipe_config(storage, &self.state.config);
    }

    /// Renders all panels, then applies what they reported and the inbox
    /// commands queued by swipe actions.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        for interaction in PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }

        if ApplicationCoordinator::apply_pending_commands(&mut self.state) > 0 {
            ctx.request_repaint();
        }

        if self.settings_dirty {
            if let Some(storage) = frame.storage_mut() {
                SettingsCoordinator::save_swipe_config(storage, &self.state.config);
                self.settings_dirty = false;
            }
        }
    }
}
