//! UI components
//!
//! Each panel renders the output of one core leaf: quest progress, animated
//! counters, directory filtering, the submission wizard and sparklines.

pub mod analytics;
pub mod counter;
pub mod directory;
pub mod header;
pub mod quest_hub;
pub mod sparkline;
pub mod submit_modal;

pub use analytics::Analytics;
pub use counter::{CounterReadout, StatsBar, use_counter};
pub use directory::Directory;
pub use header::Header;
pub use quest_hub::{QuestHub, QuestTracker, use_quest_provider, use_quests};
pub use sparkline::Sparkline;
pub use submit_modal::{SubmissionManager, SubmitModal, use_submission, use_submission_provider};
