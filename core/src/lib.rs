pub mod clock;
pub mod counter;
pub mod filter;
pub mod quest;
pub mod series;
pub mod storage;
pub mod submission;

// Re-exports for convenience
pub use clock::{Clock, FixedClock, SystemClock, date_key};
pub use counter::{AnimatedCounter, CounterError, CounterPhase};
pub use filter::{DirectoryQuery, FilterResult, Searchable, filter_entities};
pub use quest::{CompletionState, QuestProgress, QuestStore};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use submission::{FieldError, SubmissionDraft, SubmissionWizard, WizardStep};

#[cfg(feature = "runtime")]
pub use counter::runner::{CounterHandle, spawn_counter};

pub use morph_types as types;
