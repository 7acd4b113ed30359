//! The swipeable list widget.
//!
//! Binds egui drag responses to the rows of a [`ListCoordinator`], paints the
//! action strip behind each row and the row content on top of it, shifted by
//! the row's offset.

use crate::action::{ActionOutcome, SwipeAction};
use crate::coordinator::ListCoordinator;
use crate::row_controller::RowKey;
use crate::widget::action_strip;

/// Largest frame delta fed to the animations, in seconds.
const MAX_FRAME_DT: f32 = 0.1;

pub type KeyFn<'a, T> = Box<dyn Fn(&T, usize) -> RowKey + 'a>;
pub type ActionsFn<'a, T> = Box<dyn Fn(&T, usize) -> Vec<SwipeAction<'a>> + 'a>;
pub type RowFn<'a, T> = Box<dyn FnMut(&mut egui::Ui, &T, usize) + 'a>;
pub type EmptyFn<'a> = Box<dyn FnOnce(&mut egui::Ui) + 'a>;

/// Result of list interactions that the host may want to react to.
#[derive(Debug, Clone, PartialEq)]
pub enum SwipeListInteraction {
    /// A row committed to open
    RowOpened { index: usize, key: RowKey },
    /// An action button was pressed; every row has been closed
    ActionInvoked {
        index: usize,
        key: RowKey,
        action_id: String,
        outcome: ActionOutcome,
    },
}

/// A vertical list whose rows reveal action buttons when swiped left.
///
/// ```ignore
/// let interaction = SwipeableList::new("inbox", &messages)
///     .key(|m, _| RowKey::of(&m.id))
///     .actions(|_, _| vec![SwipeAction::new("delete", Color32::RED, ActionIcon::new("🗑"))])
///     .row(|ui, m, _| { ui.label(&m.subject); })
///     .empty(|ui| { ui.label("Nothing here"); })
///     .show(ui, &mut coordinator);
/// ```
pub struct SwipeableList<'a, T> {
    id_salt: egui::Id,
    items: &'a [T],
    key_fn: Option<KeyFn<'a, T>>,
    actions_fn: Option<ActionsFn<'a, T>>,
    row_fn: Option<RowFn<'a, T>>,
    empty_fn: Option<EmptyFn<'a>>,
    max_height: Option<f32>,
    scroll_bar_visibility: Option<egui::scroll_area::ScrollBarVisibility>,
}

impl<'a, T> SwipeableList<'a, T> {
    pub fn new(id_salt: impl std::hash::Hash, items: &'a [T]) -> Self {
        Self {
            id_salt: egui::Id::new(id_salt),
            items,
            key_fn: None,
            actions_fn: None,
            row_fn: None,
            empty_fn: None,
            max_height: None,
            scroll_bar_visibility: None,
        }
    }

    /// Stable identity of each item. Without it rows are keyed by position,
    /// so reordering the data resets their swipe state.
    pub fn key(mut self, f: impl Fn(&T, usize) -> RowKey + 'a) -> Self {
        self.key_fn = Some(Box::new(f));
        self
    }

    /// Actions revealed behind each item, in order from the right edge.
    pub fn actions(mut self, f: impl Fn(&T, usize) -> Vec<SwipeAction<'a>> + 'a) -> Self {
        self.actions_fn = Some(Box::new(f));
        self
    }

    /// Renders the content of one row.
    pub fn row(mut self, f: impl FnMut(&mut egui::Ui, &T, usize) + 'a) -> Self {
        self.row_fn = Some(Box::new(f));
        self
    }

    /// Renders in place of the rows when there are no items.
    pub fn empty(mut self, f: impl FnOnce(&mut egui::Ui) + 'a) -> Self {
        self.empty_fn = Some(Box::new(f));
        self
    }

    pub fn max_height(mut self, height: f32) -> Self {
        self.max_height = Some(height);
        self
    }

    /// Passed through to the list's scroll area.
    pub fn scroll_bar_visibility(mut self, visibility: egui::scroll_area::ScrollBarVisibility) -> Self {
        self.scroll_bar_visibility = Some(visibility);
        self
    }

    /// Shows the list, driving gestures and animations for this frame.
    pub fn show(mut self, ui: &mut egui::Ui, list: &mut ListCoordinator) -> Option<SwipeListInteraction> {
        list.attach_repaint(ui.ctx());

        let mut actions: Vec<Vec<SwipeAction<'a>>> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| match &self.actions_fn {
                Some(f) => f(item, i),
                None => Vec::new(),
            })
            .collect();
        let keys: Vec<(RowKey, usize)> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let key = match &self.key_fn {
                    Some(f) => f(item, i),
                    None => RowKey(i as u64),
                };
                (key, actions[i].len())
            })
            .collect();
        list.reconcile(&keys);

        let mut interaction = None;

        if self.items.is_empty() {
            if let Some(empty) = self.empty_fn.take() {
                empty(ui);
            }
        } else {
            let mut scroll = egui::ScrollArea::vertical()
                .id_salt(self.id_salt.with("scroll"))
                .auto_shrink([false, false]);
            if let Some(height) = self.max_height {
                scroll = scroll.max_height(height);
            }
            if let Some(visibility) = self.scroll_bar_visibility {
                scroll = scroll.scroll_bar_visibility(visibility);
            }

            let items = self.items;
            scroll.show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = 0.0;
                for (index, item) in items.iter().enumerate() {
                    if let Some(row_interaction) =
                        self.render_row(ui, list, index, item, &mut actions[index])
                    {
                        interaction = Some(row_interaction);
                    }
                }
            });
        }

        // Siblings start closing in the same frame the opening row commits
        let opened = list.process_notifications();
        if interaction.is_none() {
            interaction = opened
                .last()
                .map(|o| SwipeListInteraction::RowOpened { index: o.index, key: o.key });
        }

        let dt = ui.input(|i| i.stable_dt).min(MAX_FRAME_DT);
        if list.tick(dt) {
            ui.ctx().request_repaint();
        }

        interaction
    }

    fn render_row(
        &mut self,
        ui: &mut egui::Ui,
        list: &mut ListCoordinator,
        index: usize,
        item: &T,
        actions: &mut [SwipeAction<'a>],
    ) -> Option<SwipeListInteraction> {
        let config = *list.config();
        let row = list.row_mut(index)?;
        let key = row.key();
        let row_id = self.id_salt.with(key);

        let (row_rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), row.content_height()),
            egui::Sense::hover(),
        );
        let response = ui.interact(row_rect, row_id, egui::Sense::drag());

        if response.drag_started() {
            row.on_gesture_start();
        }
        if response.dragged() {
            let origin = ui.input(|i| i.pointer.press_origin());
            if let (Some(origin), Some(pos)) = (origin, response.interact_pointer_pos()) {
                row.on_gesture_update(pos.x - origin.x);
            }
            // Vertical motion keeps scrolling the list while the row tracks
            ui.scroll_with_delta(egui::vec2(0.0, response.drag_delta().y));
        }
        if response.drag_stopped() {
            row.on_gesture_end();
        }

        if !ui.is_rect_visible(row_rect) {
            return None;
        }

        let content_rect = row_rect.translate(egui::vec2(row.offset(), 0.0));
        let clicked = action_strip::render_action_strip(
            ui,
            row_id,
            row_rect,
            content_rect.right(),
            actions,
            &config,
        );

        ui.painter().rect_filled(content_rect, 0.0, ui.visuals().panel_fill);
        let mut content_ui = ui.new_child(
            egui::UiBuilder::new()
                .id_salt(("swipe_row_content", key))
                .max_rect(content_rect)
                .layout(egui::Layout::top_down(egui::Align::Min)),
        );
        content_ui.set_clip_rect(row_rect.intersect(ui.clip_rect()));
        // Selectable text senses drag and would sit above the row's drag sense
        content_ui.style_mut().interaction.selectable_labels = false;
        if let Some(row_fn) = self.row_fn.as_mut() {
            row_fn(&mut content_ui, item, index);
        }

        if row.set_content_height(content_ui.min_rect().height()) {
            ui.ctx().request_repaint();
        }

        let action_index = clicked?;
        let action = &mut actions[action_index];
        let outcome = list.invoke_action(index, action);
        Some(SwipeListInteraction::ActionInvoked {
            index,
            key,
            action_id: action.id.clone(),
            outcome,
        })
    }
}
