use dioxus::prelude::*;
use morph_types::formatting::format_xp;

use super::quest_hub::use_quests;
use super::submit_modal::use_submission;

#[component]
pub fn Header() -> Element {
    let mut quests = use_quests();
    let mut submission = use_submission();
    let progress = quests.progress();
    let xp = format_xp(progress.earned_xp, progress.total_xp);

    rsx! {
        header { class: "site-header",
            div { class: "brand",
                span { class: "brand-mark", "M" }
                span { class: "brand-name", "Morph Ecosystem" }
            }
            nav { class: "header-actions",
                button {
                    class: "btn btn-quests",
                    onclick: move |_| quests.set_open(true),
                    i { class: "fa-solid fa-paw" }
                    " Quests "
                    span { class: "badge", "{xp}" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| submission.open(),
                    "Submit Project"
                }
            }
        }
    }
}
