//! Inbox panel UI rendering
//!
//! Shows the messages as a swipeable list. Each row reveals archive, flag and
//! delete actions; the actions only queue commands, which are applied after
//! the list has been drawn.

use eframe::egui;
use egui::{Color32, RichText};
use swipelist::{ActionIcon, RowKey, SwipeAction, SwipeListInteraction, SwipeableList};

use crate::app::AppState;
use crate::domain::inbox::{InboxCommand, InboxMessage};

const ARCHIVE_COLOR: Color32 = Color32::from_rgb(52, 120, 246);
const FLAG_COLOR: Color32 = Color32::from_rgb(255, 149, 0);
const DELETE_COLOR: Color32 = Color32::from_rgb(255, 59, 48);

/// Actions behind a message row, rightmost first.
fn message_actions<'a>(message: &InboxMessage, commands: &std::sync::mpsc::Sender<InboxCommand>) -> Vec<SwipeAction<'a>> {
    let id = message.id;
    let queue = |command: InboxCommand| {
        let tx = commands.clone();
        move || -> anyhow::Result<()> {
            tx.send(command)?;
            Ok(())
        }
    };

    let flag_glyph = if message.flagged { "⚐" } else { "⚑" };
    vec![
        SwipeAction::new("delete", DELETE_COLOR, ActionIcon::new("🗑"))
            .on_invoke(queue(InboxCommand::Delete(id))),
        SwipeAction::new("flag", FLAG_COLOR, ActionIcon::new(flag_glyph))
            .on_invoke(queue(InboxCommand::ToggleFlag(id))),
        SwipeAction::new("archive", ARCHIVE_COLOR, ActionIcon::new("🗄"))
            .on_invoke(queue(InboxCommand::Archive(id))),
    ]
}

fn render_message(ui: &mut egui::Ui, message: &InboxMessage) {
    egui::Frame::new()
        .inner_margin(egui::Margin::symmetric(8, 6))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(&message.sender).strong());
                if message.flagged {
                    ui.label(RichText::new("⚑").color(FLAG_COLOR));
                }
            });
            ui.label(&message.subject);
            ui.label(RichText::new(&message.preview).weak().small());
        });
    ui.separator();
}

/// Renders the inbox list
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<SwipeListInteraction>` - What the list reported this frame
pub fn render_inbox_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<SwipeListInteraction> {
    let commands = state.command_sender();

    SwipeableList::new("inbox", &state.inbox)
        .key(|message, _| RowKey(message.id))
        .actions(|message, _| message_actions(message, &commands))
        .row(|ui, message, _| render_message(ui, message))
        .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::VisibleWhenNeeded)
        .empty(|ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.heading("Inbox zero");
                ui.label(RichText::new("Press Reset to generate new messages").weak());
            });
        })
        .show(ui, &mut state.list)
}
