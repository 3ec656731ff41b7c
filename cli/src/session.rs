//! Terminal session state.

use std::path::PathBuf;

use morph_core::{
    Clock, CompletionState, FileStore, KeyValueStore, MemoryStore, QuestStore, SystemClock,
};
use morph_types::{AppConfig, Project, builtin_projects};

pub const APP_NAME: &str = "morph-directory";

pub type DynQuestStore = QuestStore<Box<dyn KeyValueStore>, Box<dyn Clock>>;

pub struct Session {
    pub config: AppConfig,
    store: DynQuestStore,
    state: CompletionState,
    projects: Vec<Project>,
    data_dir: Option<PathBuf>,
}

/// Read the user config file. Callers fall back to defaults on error.
pub fn load_config() -> Result<AppConfig, confy::ConfyError> {
    confy::load(APP_NAME, None)
}

/// Fall back to the default config, keeping the load error so it can be
/// reported once logging is up.
pub fn config_or_default<E>(loaded: Result<AppConfig, E>) -> (AppConfig, Option<E>) {
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

/// Environment overrides on top of the file config. `MORPH_DATA_DIR` replaces
/// the configured data directory.
pub fn apply_env_overrides(mut config: AppConfig) -> AppConfig {
    if let Ok(dir) = std::env::var("MORPH_DATA_DIR")
        && !dir.is_empty()
    {
        config.data_dir = Some(PathBuf::from(dir));
    }
    config
}

/// Where quest progress is kept on disk.
pub fn resolve_data_dir(config: &AppConfig) -> Option<PathBuf> {
    config
        .data_dir
        .clone()
        .or_else(|| dirs::data_dir().map(|p| p.join(APP_NAME)))
}

impl Session {
    /// Session over file-backed storage and the system clock.
    pub fn new(config: AppConfig) -> Self {
        let data_dir = resolve_data_dir(&config);
        let storage: Box<dyn KeyValueStore> = match &data_dir {
            Some(dir) => Box::new(FileStore::new(dir)),
            None => {
                tracing::warn!("No data directory available, quest progress will not persist");
                Box::new(MemoryStore::new())
            }
        };
        let mut session = Self::with_parts(config, storage, Box::new(SystemClock));
        session.data_dir = data_dir;
        session
    }

    pub fn with_parts(
        config: AppConfig,
        storage: Box<dyn KeyValueStore>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let store = QuestStore::with_clock(storage, clock).with_key(config.storage_key.clone());
        let state = store.load();
        tracing::debug!(date = state.date_key(), completed = state.len(), "Loaded quest progress");
        Self {
            config,
            store,
            state,
            projects: builtin_projects(),
            data_dir: None,
        }
    }

    pub fn store(&self) -> &DynQuestStore {
        &self.store
    }

    pub fn state(&self) -> &CompletionState {
        &self.state
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn data_dir(&self) -> Option<&PathBuf> {
        self.data_dir.as_ref()
    }

    /// Toggle a catalog quest and persist. Ids outside the catalog are
    /// refused here so they never reach storage from the terminal.
    pub fn toggle(&mut self, id: &str) -> Result<bool, String> {
        if !self.store.catalog().contains(id) {
            return Err(format!("unknown quest `{id}`"));
        }
        self.state = self.store.toggle_and_save(&self.state, id);
        Ok(self.state.is_completed(id))
    }

    /// Pick up a new day if the date has rolled over. Returns whether it had.
    pub fn reload(&mut self) -> bool {
        match self.store.refresh(&self.state) {
            Some(fresh) => {
                self.state = fresh;
                true
            }
            None => false,
        }
    }

    /// Clear today's progress.
    pub fn reset(&mut self) {
        self.state = CompletionState::empty(self.store.clock().today_key());
        self.store.save(&self.state);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use morph_core::FixedClock;

    use super::*;

    fn clock() -> Box<dyn Clock> {
        Box::new(FixedClock::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()))
    }

    #[test]
    fn test_progress_survives_new_session() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::default();

        let mut first = Session::with_parts(
            config.clone(),
            Box::new(FileStore::new(dir.path())),
            clock(),
        );
        assert_eq!(first.toggle("daily-checkin"), Ok(true));
        assert_eq!(first.toggle("bridger"), Ok(true));
        assert_eq!(first.toggle("bridger"), Ok(false));

        let second = Session::with_parts(config, Box::new(FileStore::new(dir.path())), clock());
        assert!(second.state().is_completed("daily-checkin"));
        assert_eq!(second.store().earned_xp(second.state()), 10);
    }

    #[test]
    fn test_reset_persists_empty_day() {
        let storage = MemoryStore::with_entry(
            morph_types::QUEST_STORAGE_KEY,
            r#"{"date":"2026-10-19","completed":["bridger"]}"#,
        );
        let mut session = Session::with_parts(AppConfig::default(), Box::new(storage), clock());
        assert_eq!(session.state().len(), 1);

        session.reset();
        assert!(session.state().is_empty());
        session.reload();
        assert!(session.state().is_empty());
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, morph_core::StorageError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), morph_core::StorageError> {
            Err(morph_core::StorageError::Backend("read-only".to_string()))
        }
    }

    #[test]
    fn test_reload_keeps_unsaved_progress() {
        let mut session =
            Session::with_parts(AppConfig::default(), Box::new(ReadOnlyStore), clock());
        assert_eq!(session.toggle("volume-booster"), Ok(true));

        assert!(!session.reload());
        assert!(session.state().is_completed("volume-booster"));
    }

    #[test]
    fn test_config_load_error_is_kept_for_logging() {
        let (config, error) = config_or_default(Err("bad toml"));
        assert_eq!(config, AppConfig::default());
        assert_eq!(error, Some("bad toml"));

        let custom = AppConfig {
            counter_steps: 30,
            ..AppConfig::default()
        };
        let (config, error) = config_or_default::<String>(Ok(custom.clone()));
        assert_eq!(config, custom);
        assert_eq!(error, None);
    }

    #[test]
    fn test_configured_data_dir_wins() {
        let config = AppConfig {
            data_dir: Some(PathBuf::from("/tmp/morph-test")),
            ..AppConfig::default()
        };
        assert_eq!(
            resolve_data_dir(&config),
            Some(PathBuf::from("/tmp/morph-test"))
        );
    }
}
