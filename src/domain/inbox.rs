//! Inbox model for the demo list.
//!
//! Messages are generated deterministically from a seed so every run of the
//! demo starts from the same inbox.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SENDERS: &[&str] = &[
    "Ada Lovelace", "Grace Hopper", "Alan Turing", "Barbara Liskov",
    "Edsger Dijkstra", "Margaret Hamilton", "Donald Knuth", "Frances Allen",
];

const SUBJECTS: &[&str] = &[
    "Quarterly report draft", "Lunch on Friday?", "Build is green again",
    "Re: flaky test in CI", "Design review notes", "Invoice #{}",
    "Conference travel", "Your package has shipped", "Weekly sync agenda",
    "Release checklist",
];

const PREVIEWS: &[&str] = &[
    "Attached is the latest version, let me know what you think.",
    "I found the root cause, it was a race in the setup code.",
    "Can we move this to next week? Something came up.",
    "Thanks for the quick turnaround on this one.",
    "Please review before the end of the day if possible.",
];

/// A single message in the demo inbox.
#[derive(Debug, Clone, PartialEq)]
pub struct InboxMessage {
    pub id: u64,
    pub sender: String,
    pub subject: String,
    pub preview: String,
    pub flagged: bool,
}

/// Mutation requested by a swipe action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboxCommand {
    Archive(u64),
    Delete(u64),
    ToggleFlag(u64),
}

/// Generates `count` messages with ids starting at `first_id`.
pub fn generate_inbox(count: usize, seed: u64, first_id: u64) -> Vec<InboxMessage> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count as u64)
        .map(|i| {
            let id = first_id + i;
            let subject = SUBJECTS[rng.gen_range(0..SUBJECTS.len())].replace("{}", &rng.gen_range(1000..9999).to_string());
            InboxMessage {
                id,
                sender: SENDERS[rng.gen_range(0..SENDERS.len())].to_string(),
                subject,
                preview: PREVIEWS[rng.gen_range(0..PREVIEWS.len())].to_string(),
                flagged: rng.gen_bool(0.2),
            }
        })
        .collect()
}

/// Shuffles the inbox order in place.
pub fn shuffle_inbox(inbox: &mut [InboxMessage], rng: &mut impl Rng) {
    inbox.shuffle(rng);
}

/// Applies a command; returns a description of what changed.
///
/// Deleting a flagged message is refused so that the demo can show a failing
/// action.
pub fn apply_command(inbox: &mut Vec<InboxMessage>, command: InboxCommand) -> anyhow::Result<String> {
    match command {
        InboxCommand::Archive(id) => {
            let message = remove_message(inbox, id)?;
            Ok(format!("Archived \"{}\"", message.subject))
        }
        InboxCommand::Delete(id) => {
            let message = find_message(inbox, id)?;
            if message.flagged {
                anyhow::bail!("\"{}\" is flagged, unflag it before deleting", message.subject);
            }
            let message = remove_message(inbox, id)?;
            Ok(format!("Deleted \"{}\"", message.subject))
        }
        InboxCommand::ToggleFlag(id) => {
            let message = inbox
                .iter_mut()
                .find(|m| m.id == id)
                .ok_or_else(|| anyhow::anyhow!("message {} not found", id))?;
            message.flagged = !message.flagged;
            let verb = if message.flagged { "Flagged" } else { "Unflagged" };
            Ok(format!("{} \"{}\"", verb, message.subject))
        }
    }
}

fn find_message(inbox: &[InboxMessage], id: u64) -> anyhow::Result<&InboxMessage> {
    inbox
        .iter()
        .find(|m| m.id == id)
        .ok_or_else(|| anyhow::anyhow!("message {} not found", id))
}

fn remove_message(inbox: &mut Vec<InboxMessage>, id: u64) -> anyhow::Result<InboxMessage> {
    let index = inbox
        .iter()
        .position(|m| m.id == id)
        .ok_or_else(|| anyhow::anyhow!("message {} not found", id))?;
    Ok(inbox.remove(index))
}
