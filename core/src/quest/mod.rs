//! Daily quest completion tracking.
//!
//! Completion is scoped to one local calendar day. The record persisted under
//! the store's key looks like:
//!
//! ```json
//! { "date": "2026-10-19", "completed": ["daily-checkin", "bridger"] }
//! ```
//!
//! A record from another day, or one that does not parse as this shape, reads
//! back as "nothing completed". Stale records are never migrated; they stay in
//! storage untouched until the next save overwrites them.

mod state;
mod store;

pub use state::{CompletionState, QuestEntry, QuestProgress};
pub use store::QuestStore;

use serde::{Deserialize, Serialize};

/// On-disk shape of the completion record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct StoredRecord {
    pub date: String,
    pub completed: Vec<String>,
}
