//! Cross-row coordination: at most one row open at a time.
//!
//! [`ListCoordinator`] owns one [`RowGestureController`] per item, keyed by
//! the item's [`RowKey`]. Rows report commits to open through a channel; the
//! coordinator drains it and closes every sibling. It is the only place that
//! reads or writes more than one row.

use std::collections::HashMap;
use std::fmt;
use std::sync::mpsc::{channel, Receiver, Sender};

use crate::action::{ActionOutcome, SwipeAction};
use crate::config::SwipeConfig;
use crate::row_controller::{OpenedSink, RowGestureController, RowKey, RowOpened};

/// What [`ListCoordinator::reconcile`] had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    /// Same keys in the same order
    Unchanged,
    /// Same length; controllers were matched by key
    Reordered,
    /// Length changed; every controller was recreated
    Rebuilt,
}

/// Owns the rows of a swipeable list and enforces the single-open invariant.
pub struct ListCoordinator {
    config: SwipeConfig,
    rows: Vec<RowGestureController>,
    open_index: Option<usize>,
    sender: Sender<RowOpened>,
    receiver: Receiver<RowOpened>,
    repaint: Option<egui::Context>,
}

impl ListCoordinator {
    pub fn new(config: SwipeConfig) -> Self {
        let (sender, receiver) = channel();
        Self {
            config,
            rows: Vec::new(),
            open_index: None,
            sender,
            receiver,
            repaint: None,
        }
    }

    /// Requests a repaint of `ctx` whenever a row commits to open.
    pub fn attach_repaint(&mut self, ctx: &egui::Context) {
        if self.repaint.is_some() {
            return;
        }
        self.repaint = Some(ctx.clone());
        let sink = self.sink();
        for row in &mut self.rows {
            row.set_sink(Some(sink.clone()));
        }
    }

    /// A sink delivering into this coordinator's notification channel.
    pub fn sink(&self) -> OpenedSink {
        let mut sink = OpenedSink::new(self.sender.clone());
        if let Some(ctx) = &self.repaint {
            sink.set_repaint(ctx.clone());
        }
        sink
    }

    // ===== Queries =====

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open_index
    }

    pub fn rows(&self) -> &[RowGestureController] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&RowGestureController> {
        self.rows.get(index)
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut RowGestureController> {
        self.rows.get_mut(index)
    }

    /// Position of the row with `key`, if present.
    pub fn index_of(&self, key: RowKey) -> Option<usize> {
        self.rows.iter().position(|r| r.key() == key)
    }

    pub fn row_by_key(&self, key: RowKey) -> Option<&RowGestureController> {
        self.rows.iter().find(|r| r.key() == key)
    }

    /// True while any row is mid-animation.
    pub fn is_animating(&self) -> bool {
        self.rows.iter().any(|r| r.is_animating())
    }

    // ===== Configuration =====

    /// Applies a new configuration to every row.
    pub fn set_config(&mut self, config: SwipeConfig) {
        if config == self.config {
            return;
        }
        self.config = config;
        for row in &mut self.rows {
            row.set_config(config);
        }
    }

    /// Aligns the controllers with the backing data.
    ///
    /// Each entry is an item's key and its action count. When the length
    /// changes, every controller is discarded, pending notifications are
    /// dropped and no row is open afterwards. Otherwise controllers are
    /// matched by key so a reordered row keeps its offset, and the open row
    /// is followed to its new position.
    pub fn reconcile(&mut self, items: &[(RowKey, usize)]) -> Reconciled {
        if items.len() != self.rows.len() {
            self.rebuild(items);
            return Reconciled::Rebuilt;
        }

        let same_order = self
            .rows
            .iter()
            .zip(items)
            .all(|(row, (key, _))| row.key() == *key);
        if same_order {
            for (row, (_, count)) in self.rows.iter_mut().zip(items) {
                row.set_action_count(*count);
            }
            return Reconciled::Unchanged;
        }

        let open_key = self.open_index.and_then(|i| self.rows.get(i)).map(|r| r.key());
        let mut by_key: HashMap<RowKey, RowGestureController> =
            self.rows.drain(..).map(|r| (r.key(), r)).collect();
        let sink = self.sink();

        for (index, (key, count)) in items.iter().enumerate() {
            let mut row = by_key
                .remove(key)
                .unwrap_or_else(|| self.new_row(*key, index, *count, &sink));
            row.set_row_index(index);
            row.set_action_count(*count);
            self.rows.push(row);
        }

        self.open_index = open_key.and_then(|key| self.index_of(key));
        tracing::debug!(rows = self.rows.len(), dropped = by_key.len(), open = ?self.open_index, "rows reordered");
        Reconciled::Reordered
    }

    fn rebuild(&mut self, items: &[(RowKey, usize)]) {
        let stale = self.receiver.try_iter().count();
        let sink = self.sink();
        self.rows = items
            .iter()
            .enumerate()
            .map(|(index, (key, count))| self.new_row(*key, index, *count, &sink))
            .collect();
        self.open_index = None;
        tracing::debug!(rows = self.rows.len(), stale_notifications = stale, "rows rebuilt");
    }

    fn new_row(&self, key: RowKey, index: usize, action_count: usize, sink: &OpenedSink) -> RowGestureController {
        RowGestureController::new(key, index, action_count, self.config).with_sink(sink.clone())
    }

    // ===== Coordination =====

    /// Records that row `index` committed to open and closes every other row.
    ///
    /// Calling it again with the same index is harmless.
    pub fn handle_row_opened(&mut self, index: usize) {
        if index >= self.rows.len() {
            tracing::warn!(index, rows = self.rows.len(), "open reported for unknown row");
            return;
        }
        for (i, row) in self.rows.iter_mut().enumerate() {
            if i != index {
                row.close();
            }
        }
        if self.open_index != Some(index) {
            tracing::debug!(index, previous = ?self.open_index, "row opened");
        }
        self.open_index = Some(index);
    }

    /// Closes every row, whichever was open.
    pub fn close_all(&mut self) {
        for row in &mut self.rows {
            row.close();
        }
        if self.open_index.take().is_some() {
            tracing::debug!("all rows closed");
        }
    }

    /// Closes a single row, leaving its siblings alone.
    pub fn close_row(&mut self, index: usize) {
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        row.close();
        if self.open_index == Some(index) {
            self.open_index = None;
        }
    }

    /// Drains pending opened notifications and applies them in order.
    ///
    /// Messages are resolved by key, so a row that moved since it committed
    /// is still found; messages for rows that no longer exist are dropped.
    pub fn process_notifications(&mut self) -> Vec<RowOpened> {
        let pending: Vec<RowOpened> = self.receiver.try_iter().collect();
        let mut applied = Vec::with_capacity(pending.len());
        for message in pending {
            match self.index_of(message.key) {
                Some(index) => {
                    self.handle_row_opened(index);
                    applied.push(RowOpened { index, key: message.key });
                }
                None => {
                    tracing::debug!(key = %message.key, index = message.index, "stale opened notification ignored");
                }
            }
        }
        applied
    }

    /// Runs an action of row `index`, then closes every row.
    ///
    /// The rows close even when the callback fails.
    pub fn invoke_action(&mut self, index: usize, action: &mut SwipeAction<'_>) -> ActionOutcome {
        let outcome = action.invoke();
        if let ActionOutcome::Failed(reason) = &outcome {
            tracing::warn!(index, action = %action.id, %reason, "swipe action failed");
        }
        self.close_all();
        outcome
    }

    // ===== Animation driver =====

    /// Advances every row's animation by `dt` seconds.
    ///
    /// Returns true while any row is still animating.
    pub fn tick(&mut self, dt: f32) -> bool {
        let mut animating = false;
        for row in &mut self.rows {
            animating |= row.tick(dt);
        }
        if let Some(index) = self.open_index {
            // The open row was dragged or closed back home
            if !self.rows.get(index).is_some_and(|r| r.is_open()) {
                self.open_index = None;
            }
        }
        animating
    }

    /// Settles every running animation immediately.
    pub fn finish_animations(&mut self) {
        for row in &mut self.rows {
            row.finish_animation();
        }
    }
}

impl Default for ListCoordinator {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

impl fmt::Debug for ListCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListCoordinator")
            .field("rows", &self.rows.len())
            .field("open_index", &self.open_index)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize, actions: usize) -> Vec<(RowKey, usize)> {
        (0..n).map(|i| (RowKey(i as u64 + 100), actions)).collect()
    }

    fn open_row(list: &mut ListCoordinator, index: usize) {
        let row = list.row_mut(index).unwrap();
        row.on_gesture_start();
        row.on_gesture_update(-120.0);
        row.on_gesture_end();
        list.process_notifications();
    }

    fn settle(list: &mut ListCoordinator) {
        let mut frames = 0;
        while list.tick(1.0 / 60.0) {
            frames += 1;
            assert!(frames < 10_000, "list never settled");
        }
    }

    #[test]
    fn test_reconcile_builds_rows() {
        let mut list = ListCoordinator::default();
        assert_eq!(list.reconcile(&items(3, 2)), Reconciled::Rebuilt);
        assert_eq!(list.len(), 3);
        assert_eq!(list.row(2).unwrap().row_index(), 2);
        assert_eq!(list.row(2).unwrap().action_count(), 2);
        assert_eq!(list.reconcile(&items(3, 2)), Reconciled::Unchanged);
    }

    #[test]
    fn test_open_closes_previous() {
        let mut list = ListCoordinator::default();
        list.reconcile(&items(3, 3));
        open_row(&mut list, 0);
        settle(&mut list);
        assert_eq!(list.open_index(), Some(0));

        open_row(&mut list, 2);
        assert_eq!(list.open_index(), Some(2));
        settle(&mut list);
        assert_eq!(list.row(0).unwrap().offset(), 0.0);
        assert_eq!(list.row(2).unwrap().offset(), -228.0);
        assert_eq!(list.open_index(), Some(2));
    }

    #[test]
    fn test_handle_row_opened_is_idempotent() {
        let mut list = ListCoordinator::default();
        list.reconcile(&items(2, 1));
        open_row(&mut list, 1);
        list.handle_row_opened(1);
        list.handle_row_opened(1);
        settle(&mut list);
        assert_eq!(list.open_index(), Some(1));
        assert_eq!(list.row(0).unwrap().offset(), 0.0);
        assert_eq!(list.row(1).unwrap().offset(), -76.0);
    }

    #[test]
    fn test_handle_row_opened_out_of_range_is_ignored() {
        let mut list = ListCoordinator::default();
        list.reconcile(&items(2, 1));
        list.handle_row_opened(9);
        assert_eq!(list.open_index(), None);
    }

    #[test]
    fn test_close_row_leaves_siblings() {
        let mut list = ListCoordinator::default();
        list.reconcile(&items(3, 2));
        open_row(&mut list, 1);
        settle(&mut list);
        list.close_row(0);
        assert_eq!(list.open_index(), Some(1));
        list.close_row(1);
        assert_eq!(list.open_index(), None);
        settle(&mut list);
        assert!(list.rows().iter().all(|r| r.offset() == 0.0));
    }

    #[test]
    fn test_dragging_open_row_closed_clears_open_index() {
        let mut list = ListCoordinator::default();
        list.reconcile(&items(2, 2));
        open_row(&mut list, 0);
        settle(&mut list);

        let row = list.row_mut(0).unwrap();
        row.on_gesture_start();
        row.on_gesture_update(200.0);
        row.on_gesture_end();
        settle(&mut list);
        assert_eq!(list.open_index(), None);
    }

    #[test]
    fn test_reorder_keeps_open_row_by_key() {
        let mut list = ListCoordinator::default();
        let mut data = items(4, 2);
        list.reconcile(&data);
        open_row(&mut list, 1);
        settle(&mut list);
        let open_key = data[1].0;

        data.reverse();
        assert_eq!(list.reconcile(&data), Reconciled::Reordered);
        assert_eq!(list.open_index(), Some(2));
        let row = list.row(2).unwrap();
        assert_eq!(row.key(), open_key);
        assert_eq!(row.row_index(), 2);
        assert_eq!(row.offset(), -152.0);
        assert_eq!(list.row_by_key(open_key).map(|r| r.row_index()), Some(2));
        assert!(list.row_by_key(RowKey(12345)).is_none());
    }

    #[test]
    fn test_replaced_open_key_resets_open_index() {
        let mut list = ListCoordinator::default();
        let mut data = items(3, 1);
        list.reconcile(&data);
        open_row(&mut list, 0);
        data[0].0 = RowKey(999);
        assert_eq!(list.reconcile(&data), Reconciled::Reordered);
        assert_eq!(list.open_index(), None);
        assert_eq!(list.row(0).unwrap().offset(), 0.0);
    }

    #[test]
    fn test_rebuild_drops_pending_notifications() {
        let mut list = ListCoordinator::default();
        list.reconcile(&items(3, 2));
        let row = list.row_mut(1).unwrap();
        row.on_gesture_start();
        row.on_gesture_update(-100.0);
        row.on_gesture_end();

        list.reconcile(&items(2, 2));
        assert!(list.process_notifications().is_empty());
        assert_eq!(list.open_index(), None);
    }

    #[test]
    fn test_notification_resolved_by_key_after_reorder() {
        let mut list = ListCoordinator::default();
        let mut data = items(3, 2);
        list.reconcile(&data);
        let row = list.row_mut(0).unwrap();
        row.on_gesture_start();
        row.on_gesture_update(-100.0);
        row.on_gesture_end();

        data.rotate_left(1);
        list.reconcile(&data);
        let applied = list.process_notifications();
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].index, 2);
        assert_eq!(list.open_index(), Some(2));
    }

    #[test]
    fn test_set_config_reaches_rows() {
        let mut list = ListCoordinator::default();
        list.reconcile(&items(2, 2));
        let config = SwipeConfig {
            button_width: 40.0,
            button_gap: 0.0,
            ..SwipeConfig::default()
        };
        list.set_config(config);
        assert_eq!(list.row(0).unwrap().max_offset(), 80.0);
        list.reconcile(&items(3, 2));
        assert_eq!(list.row(2).unwrap().max_offset(), 80.0);
    }
}
