//! Shared data types for the Morph ecosystem directory.
//!
//! Everything in this crate is plain data: the quest catalog, directory
//! entity records, headline stats and the configuration shape. It has no
//! I/O so both the wasm front-end and the native tools can depend on it.

pub mod config;
pub mod formatting;
pub mod project;
pub mod quest;
pub mod stats;

pub use config::AppConfig;
pub use project::{
    Category, CategoryFilter, ParseCategoryError, Project, ProjectStatus, builtin_projects,
};
pub use quest::{CatalogError, Quest, QuestCatalog};
pub use stats::{StatDef, analytics_pills, builtin_stats, ticker_stats};

/// localStorage key owned by the quest store.
pub const QUEST_STORAGE_KEY: &str = "morph-zoo-quests";
