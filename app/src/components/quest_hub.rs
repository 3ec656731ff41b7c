//! Morph Zoo daily quest drawer.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use morph_core::{CompletionState, QuestProgress, QuestStore};
use morph_types::formatting::{format_pct, format_xp};

use crate::storage::LocalStorage;

/// How often an open page re-checks the date so progress resets at midnight.
const ROLLOVER_CHECK_MS: u32 = 60_000;

fn store() -> QuestStore<LocalStorage> {
    QuestStore::new(LocalStorage)
}

/// Today's completion state, shared through context.
///
/// Access via `use_quests()` from any component.
#[derive(Clone, Copy)]
pub struct QuestTracker {
    state: Signal<CompletionState>,
    open: Signal<bool>,
}

impl QuestTracker {
    pub fn new() -> Self {
        Self {
            state: Signal::new(store().load()),
            open: Signal::new(false),
        }
    }

    pub fn progress(&self) -> QuestProgress {
        store().progress(&self.state.read())
    }

    /// Toggle a quest and write the result through to storage.
    pub fn toggle(&mut self, id: &str) {
        let next = store().toggle_and_save(&self.state.peek(), id);
        self.state.set(next);
    }

    /// Pick up a new day's empty state if the date has changed.
    pub fn refresh(&mut self) {
        let fresh = store().refresh(&self.state.peek());
        if let Some(fresh) = fresh {
            self.state.set(fresh);
        }
    }

    pub fn is_open(&self) -> bool {
        (self.open)()
    }

    pub fn set_open(&mut self, open: bool) {
        self.open.set(open);
    }
}

impl Default for QuestTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize quest state at app root.
pub fn use_quest_provider() -> QuestTracker {
    use_context_provider(QuestTracker::new)
}

pub fn use_quests() -> QuestTracker {
    use_context::<QuestTracker>()
}

#[component]
pub fn QuestHub() -> Element {
    let mut tracker = use_quests();

    use_future(move || async move {
        loop {
            TimeoutFuture::new(ROLLOVER_CHECK_MS).await;
            tracker.refresh();
        }
    });

    if !tracker.is_open() {
        return rsx! {};
    }

    let progress = tracker.progress();
    let pct = progress.fraction * 100.0;
    let xp = format_xp(progress.earned_xp, progress.total_xp);
    let pct_label = format_pct(progress.fraction);

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| tracker.set_open(false),
            aside {
                class: "quest-drawer",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h3 { "Morph Zoo" }
                    button {
                        class: "btn btn-close",
                        onclick: move |_| tracker.set_open(false),
                        "X"
                    }
                }

                div { class: "quest-goal",
                    div { class: "quest-goal-row",
                        span { "Today's XP Goal" }
                        span { class: "quest-xp", "{xp}" }
                    }
                    div { class: "progress-track",
                        div { class: "progress-fill", style: "width: {pct}%" }
                    }
                    span { class: "quest-pct", "{pct_label}" }
                }

                h4 { "Daily Quests" }
                ul { class: "quest-list",
                    for quest in progress.quests.iter() {
                        li {
                            key: "{quest.id}",
                            class: if quest.done { "quest quest-done" } else { "quest" },
                            onclick: {
                                let id = quest.id.clone();
                                move |_| tracker.toggle(&id)
                            },
                            span { class: "quest-check",
                                if quest.done {
                                    i { class: "fa-solid fa-circle-check" }
                                } else {
                                    i { class: "fa-regular fa-circle" }
                                }
                            }
                            div { class: "quest-text",
                                span { class: "quest-title", "{quest.title}" }
                                span { class: "quest-desc", "{quest.description}" }
                            }
                            span { class: "quest-reward", "+{quest.xp} XP" }
                        }
                    }
                }

                if progress.is_complete() {
                    p { class: "quest-complete", "All quests done. Come back tomorrow!" }
                }
            }
        }
    }
}
