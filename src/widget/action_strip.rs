//! Painting and hit-testing of the action buttons behind a row.

use crate::action::SwipeAction;
use crate::config::SwipeConfig;

/// Rect of the button for `action_index`, counted from the right edge.
///
/// The first action sits rightmost, closest to where the swipe started.
/// Buttons are painted `button_width` apart; the reveal distance per action
/// additionally includes the gap.
pub fn button_rect(row_rect: egui::Rect, action_index: usize, config: &SwipeConfig) -> egui::Rect {
    let slot_right = row_rect.right() - config.button_width * action_index as f32;
    let side = config.button_size.min(row_rect.height()).max(0.0);
    let right = slot_right - config.button_gap;
    egui::Rect::from_min_max(
        egui::pos2(right - side, row_rect.center().y - side / 2.0),
        egui::pos2(right, row_rect.center().y + side / 2.0),
    )
}

/// Whether the sliding content has moved far enough to uncover `button`.
pub fn is_revealed(button: egui::Rect, content_right: f32) -> bool {
    content_right <= button.left() + 0.5
}

/// Paints the strip and returns the index of a clicked, fully revealed button.
///
/// # Arguments
/// * `ui` - UI the row was allocated in
/// * `row_id` - Id of the row; buttons derive their ids from it
/// * `row_rect` - Full row rect (the strip spans its height)
/// * `content_right` - Current right edge of the sliding content
/// * `actions` - Actions of this row in declaration order
/// * `config` - Dimensions of the buttons
pub fn render_action_strip(
    ui: &mut egui::Ui,
    row_id: egui::Id,
    row_rect: egui::Rect,
    content_right: f32,
    actions: &[SwipeAction<'_>],
    config: &SwipeConfig,
) -> Option<usize> {
    // Nothing is uncovered while the row is closed
    if content_right >= row_rect.right() {
        return None;
    }

    let rounding = egui::CornerRadius::same(config.button_rounding.clamp(0.0, 255.0) as u8);
    let font_id = egui::FontId::proportional((config.button_size * 0.4).max(8.0));
    let mut clicked = None;

    for (index, action) in actions.iter().enumerate() {
        let rect = button_rect(row_rect, index, config);
        if rect.right() <= content_right {
            continue;
        }

        let mut fill = action.color;
        if is_revealed(rect, content_right) {
            let response = ui.interact(rect, row_id.with(("action", index)), egui::Sense::click());
            if response.hovered() {
                fill = fill.gamma_multiply(0.85);
            }
            if response.clicked() {
                clicked = Some(index);
            }
        }

        let painter = ui.painter();
        painter.rect_filled(rect, rounding, fill);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            &action.icon.glyph,
            font_id.clone(),
            action.icon.color,
        );
    }

    clicked
}
