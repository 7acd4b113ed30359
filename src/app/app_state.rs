//! State of the swipe demo.
//!
//! The inbox data and the list coordinator live side by side: the widget
//! borrows the inbox immutably while rendering, so swipe actions enqueue
//! [`InboxCommand`]s on a channel that is drained after the frame's list pass.

use std::sync::mpsc::{self, Receiver, Sender};

use rand::rngs::StdRng;
use rand::SeedableRng;
use swipelist::{ListCoordinator, SwipeConfig};

use crate::domain::inbox::{self, InboxCommand, InboxMessage};

/// Number of messages in a freshly reset inbox.
pub const INBOX_SIZE: usize = 24;

/// Seed of the generated inbox.
pub const INBOX_SEED: u64 = 42;

pub struct AppState {
    /// Messages in display order
    pub inbox: Vec<InboxMessage>,

    /// Swipe state of the rows
    pub list: ListCoordinator,

    /// Configuration currently applied to the list
    pub config: SwipeConfig,

    /// Edited copy shown in the settings window
    pub draft_config: SwipeConfig,

    pub show_settings: bool,

    /// Description of the last interaction, shown in the status bar
    pub last_event: Option<String>,

    /// Current error message to display (if any)
    pub error_message: Option<String>,

    command_tx: Sender<InboxCommand>,
    command_rx: Receiver<InboxCommand>,
    rng: StdRng,
    next_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

impl AppState {
    pub fn new(config: SwipeConfig) -> Self {
        let (command_tx, command_rx) = mpsc::channel();
        Self {
            inbox: inbox::generate_inbox(INBOX_SIZE, INBOX_SEED, 1),
            list: ListCoordinator::new(config),
            config,
            draft_config: config,
            show_settings: false,
            last_event: None,
            error_message: None,
            command_tx,
            command_rx,
            rng: StdRng::seed_from_u64(INBOX_SEED),
            next_id: INBOX_SIZE as u64 + 1,
        }
    }

    /// Sender handed to action callbacks.
    pub fn command_sender(&self) -> Sender<InboxCommand> {
        self.command_tx.clone()
    }

    /// Commands queued by actions since the last drain.
    pub fn drain_commands(&mut self) -> Vec<InboxCommand> {
        self.command_rx.try_iter().collect()
    }

    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Replaces the inbox with a fresh batch; ids keep increasing so no
    /// new message reuses the key of a discarded one.
    pub fn regenerate_inbox(&mut self) {
        let seed = INBOX_SEED.wrapping_add(self.next_id);
        self.inbox = inbox::generate_inbox(INBOX_SIZE, seed, self.next_id);
        self.next_id += INBOX_SIZE as u64;
    }
}
