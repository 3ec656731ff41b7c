use morph_types::{QUEST_STORAGE_KEY, QuestCatalog};

use super::StoredRecord;
use super::state::{CompletionState, QuestProgress, fraction};
use crate::clock::{Clock, SystemClock};
use crate::storage::KeyValueStore;

/// Owns the persisted daily completion record.
///
/// The store is the only writer of its storage key. Every storage or decode
/// failure degrades to "nothing completed" and is logged, never returned: the
/// in-memory [`CompletionState`] held by the caller stays authoritative for
/// the session whatever the write outcome.
#[derive(Debug)]
pub struct QuestStore<S, C = SystemClock> {
    storage: S,
    clock: C,
    key: String,
    catalog: QuestCatalog,
}

impl<S: KeyValueStore> QuestStore<S, SystemClock> {
    /// Store over `storage` using the local wall clock and builtin catalog.
    pub fn new(storage: S) -> Self {
        Self::with_clock(storage, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> QuestStore<S, C> {
    pub fn with_clock(storage: S, clock: C) -> Self {
        Self {
            storage,
            clock,
            key: QUEST_STORAGE_KEY.to_string(),
            catalog: QuestCatalog::builtin(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_catalog(mut self, catalog: QuestCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn catalog(&self) -> &QuestCatalog {
        &self.catalog
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Read today's completion state.
    ///
    /// Today's date is taken from the clock on every call, so a load after
    /// midnight starts the new day empty. Absent, unreadable or malformed
    /// records, and records dated another day, all yield an empty state.
    pub fn load(&self) -> CompletionState {
        let today = self.clock.today_key();

        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return CompletionState::empty(today),
            Err(e) => {
                tracing::debug!(key = %self.key, error = %e, "Quest record unreadable, starting empty");
                return CompletionState::empty(today);
            }
        };

        let record: StoredRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!(key = %self.key, error = %e, "Malformed quest record, starting empty");
                return CompletionState::empty(today);
            }
        };

        if record.date != today {
            tracing::debug!(stored = %record.date, today = %today, "Quest record is from another day");
            return CompletionState::empty(today);
        }

        CompletionState::new(today, record.completed)
    }

    /// Day-rollover check for a live session. Returns the new day's state
    /// when the clock has moved past `current`'s date, otherwise `None`.
    ///
    /// Same-day storage is never adopted over `current`: a failed write
    /// leaves storage behind the session, and the session wins.
    pub fn refresh(&self, current: &CompletionState) -> Option<CompletionState> {
        if current.date_key() == self.clock.today_key() {
            return None;
        }
        let fresh = self.load();
        tracing::info!(from = current.date_key(), to = fresh.date_key(), "Quest day rolled over");
        Some(fresh)
    }

    /// Flip `id` in `state`. Unknown ids are kept but earn nothing.
    pub fn toggle(&self, state: &CompletionState, id: &str) -> CompletionState {
        if !self.catalog.contains(id) {
            tracing::debug!(quest = id, "Toggling id not in the quest catalog");
        }
        state.toggled(id)
    }

    /// Persist `state` stamped with today's date. Best effort: failures are
    /// logged and dropped, with no retry.
    pub fn save(&self, state: &CompletionState) {
        let record = StoredRecord {
            date: self.clock.today_key(),
            completed: state.completed_ids().map(str::to_string).collect(),
        };

        let json = match serde_json::to_string(&record) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to encode quest record");
                return;
            }
        };

        if let Err(e) = self.storage.set(&self.key, &json) {
            tracing::warn!(key = %self.key, error = %e, "Failed to persist quest record");
        }
    }

    /// One user click: toggle, persist, and hand back the new state.
    pub fn toggle_and_save(&self, state: &CompletionState, id: &str) -> CompletionState {
        let next = self.toggle(state, id);
        self.save(&next);
        next
    }

    pub fn earned_xp(&self, state: &CompletionState) -> u32 {
        state.earned_xp(&self.catalog)
    }

    pub fn total_xp(&self) -> u32 {
        self.catalog.total_xp()
    }

    /// `earned_xp / total_xp` in `[0, 1]`.
    pub fn progress_fraction(&self, state: &CompletionState) -> f64 {
        fraction(self.earned_xp(state), self.total_xp())
    }

    pub fn progress(&self, state: &CompletionState) -> QuestProgress {
        QuestProgress::from_state(&self.catalog, state)
    }
}
