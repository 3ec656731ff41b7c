//! Daily quest catalog.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single daily quest with a fixed XP reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub xp: u32,
}

impl Quest {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        xp: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            xp,
        }
    }
}

/// Reasons a quest list cannot become a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("quest catalog must contain at least one quest")]
    Empty,
    #[error("duplicate quest id `{0}`")]
    DuplicateId(String),
    #[error("quest `{0}` must reward more than 0 XP")]
    ZeroXp(String),
    #[error("total quest XP does not fit in a u32")]
    XpOverflow,
}

/// Ordered, immutable list of quests.
///
/// Construction guarantees the catalog is non-empty, ids are unique and every
/// quest rewards XP, so `total_xp()` is never zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestCatalog {
    quests: Vec<Quest>,
    total_xp: u32,
}

// (id, title, description, xp)
const BUILTIN: &[(&str, &str, &str, u32)] = &[
    (
        "daily-checkin",
        "Daily Check-in",
        "Open Morph Zoo and claim your daily points.",
        10,
    ),
    ("bridger", "The Bridger", "Bridge at least $10 to Morph.", 50),
    (
        "volume-booster",
        "Volume Booster",
        "Make a swap on BulbaSwap.",
        30,
    ),
    (
        "social-warrior",
        "Social Warrior",
        "Follow Morph on X/Twitter.",
        20,
    ),
];

impl QuestCatalog {
    pub fn new(quests: Vec<Quest>) -> Result<Self, CatalogError> {
        if quests.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(quests.len());
        for quest in &quests {
            if !seen.insert(quest.id.as_str()) {
                return Err(CatalogError::DuplicateId(quest.id.clone()));
            }
            if quest.xp == 0 {
                return Err(CatalogError::ZeroXp(quest.id.clone()));
            }
        }

        let total_xp = quests
            .iter()
            .try_fold(0u32, |total, q| total.checked_add(q.xp))
            .ok_or(CatalogError::XpOverflow)?;
        Ok(Self { quests, total_xp })
    }

    /// The Morph Zoo daily quests shown on the site.
    pub fn builtin() -> Self {
        let quests = BUILTIN
            .iter()
            .map(|&(id, title, description, xp)| Quest::new(id, title, description, xp))
            .collect::<Vec<_>>();
        let total_xp = quests.iter().map(|q| q.xp).sum();
        Self { quests, total_xp }
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn get(&self, id: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// XP reward for `id`, zero for ids not in the catalog.
    pub fn xp_for(&self, id: &str) -> u32 {
        self.get(id).map_or(0, |q| q.xp)
    }

    /// Sum of every quest's XP, fixed at construction.
    pub fn total_xp(&self) -> u32 {
        self.total_xp
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }
}

impl Default for QuestCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = QuestCatalog::builtin();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.total_xp(), 110);
        assert_eq!(catalog.quests()[0].id, "daily-checkin");
        assert_eq!(catalog.xp_for("bridger"), 50);
        assert_eq!(catalog.xp_for("unknown"), 0);
    }

    #[test]
    fn test_builtin_passes_validation() {
        let builtin = QuestCatalog::builtin();
        let rebuilt = QuestCatalog::new(builtin.quests().to_vec()).expect("builtin is valid");
        assert_eq!(rebuilt, builtin);
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(QuestCatalog::new(vec![]), Err(CatalogError::Empty));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let quests = vec![Quest::new("a", "A", "", 5), Quest::new("a", "Again", "", 7)];
        assert_eq!(
            QuestCatalog::new(quests),
            Err(CatalogError::DuplicateId("a".to_string()))
        );
    }

    #[test]
    fn test_rejects_zero_xp() {
        let quests = vec![Quest::new("free", "Free", "", 0)];
        assert_eq!(
            QuestCatalog::new(quests),
            Err(CatalogError::ZeroXp("free".to_string()))
        );
    }

    #[test]
    fn test_rejects_xp_total_overflow() {
        let quests = vec![Quest::new("big", "Big", "", u32::MAX), Quest::new("one", "One", "", 1)];
        assert_eq!(QuestCatalog::new(quests), Err(CatalogError::XpOverflow));

        let fits = vec![Quest::new("big", "Big", "", u32::MAX - 1), Quest::new("one", "One", "", 1)];
        assert_eq!(QuestCatalog::new(fits).map(|c| c.total_xp()), Ok(u32::MAX));
    }

    #[test]
    fn test_quest_deserializes_without_description() {
        let quest: Quest = toml::from_str("id = \"x\"\ntitle = \"X\"\nxp = 3").unwrap();
        assert_eq!(quest.description, "");
        assert_eq!(quest.xp, 3);
    }
}
