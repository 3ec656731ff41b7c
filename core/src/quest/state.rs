use std::collections::BTreeSet;

use morph_types::QuestCatalog;
use serde::Serialize;

/// Which quests are done on a given day. Immutable; operations return new values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionState {
    date_key: String,
    completed: BTreeSet<String>,
}

impl CompletionState {
    /// Nothing completed on `date_key`.
    pub fn empty(date_key: impl Into<String>) -> Self {
        Self {
            date_key: date_key.into(),
            completed: BTreeSet::new(),
        }
    }

    pub fn new<I, S>(date_key: impl Into<String>, completed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            date_key: date_key.into(),
            completed: completed.into_iter().map(Into::into).collect(),
        }
    }

    pub fn date_key(&self) -> &str {
        &self.date_key
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    pub fn completed_ids(&self) -> impl Iterator<Item = &str> {
        self.completed.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// Copy with `id` flipped: added when absent, removed when present.
    pub fn toggled(&self, id: &str) -> Self {
        let mut completed = self.completed.clone();
        if !completed.remove(id) {
            completed.insert(id.to_string());
        }
        Self {
            date_key: self.date_key.clone(),
            completed,
        }
    }

    /// XP from completed ids that exist in `catalog`. Unknown ids count as zero.
    pub fn earned_xp(&self, catalog: &QuestCatalog) -> u32 {
        self.completed.iter().map(|id| catalog.xp_for(id)).sum()
    }
}

/// One row of the quest checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub xp: u32,
    pub done: bool,
}

/// Everything the quest card needs to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestProgress {
    pub earned_xp: u32,
    pub total_xp: u32,
    /// `earned_xp / total_xp`, in `[0, 1]`.
    pub fraction: f64,
    pub quests: Vec<QuestEntry>,
}

impl QuestProgress {
    pub fn from_state(catalog: &QuestCatalog, state: &CompletionState) -> Self {
        let earned_xp = state.earned_xp(catalog);
        let total_xp = catalog.total_xp();
        let quests = catalog
            .quests()
            .iter()
            .map(|q| QuestEntry {
                id: q.id.clone(),
                title: q.title.clone(),
                description: q.description.clone(),
                xp: q.xp,
                done: state.is_completed(&q.id),
            })
            .collect();

        Self {
            earned_xp,
            total_xp,
            fraction: fraction(earned_xp, total_xp),
            quests,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.quests.iter().filter(|q| q.done).count()
    }

    pub fn is_complete(&self) -> bool {
        self.earned_xp == self.total_xp
    }
}

pub(crate) fn fraction(earned: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (earned as f64 / total as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let state = CompletionState::empty("2026-10-19");
        let once = state.toggled("bridger");
        assert!(once.is_completed("bridger"));
        assert_eq!(once.date_key(), "2026-10-19");
        let twice = once.toggled("bridger");
        assert_eq!(twice, state);
    }

    #[test]
    fn test_toggle_leaves_original_untouched() {
        let state = CompletionState::new("2026-10-19", ["daily-checkin"]);
        let _ = state.toggled("daily-checkin");
        assert!(state.is_completed("daily-checkin"));
    }

    #[test]
    fn test_new_deduplicates() {
        let state = CompletionState::new("d", ["a", "a", "b"]);
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_earned_xp_ignores_unknown_ids() {
        let catalog = QuestCatalog::builtin();
        let state = CompletionState::new("d", ["bridger", "not-a-quest"]);
        assert_eq!(state.earned_xp(&catalog), 50);
    }

    #[test]
    fn test_progress_snapshot() {
        let catalog = QuestCatalog::builtin();
        let state = CompletionState::new("d", ["daily-checkin", "social-warrior"]);
        let progress = QuestProgress::from_state(&catalog, &state);
        assert_eq!(progress.earned_xp, 30);
        assert_eq!(progress.total_xp, 110);
        assert!((progress.fraction - 30.0 / 110.0).abs() < f64::EPSILON);
        assert_eq!(progress.completed_count(), 2);
        assert!(progress.quests[0].done);
        assert!(!progress.quests[1].done);
        assert!(!progress.is_complete());
    }
}
