use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

mod components;
mod storage;

use components::{
    Analytics, Directory, Header, QuestHub, StatsBar, SubmitModal, use_quest_provider,
    use_submission_provider,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        web_sys::console::warn_1(&format!("logger already initialised: {e}").into());
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_quest_provider();
    use_submission_provider();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Header {}
        main { class: "page",
            StatsBar {}
            Directory {}
            Analytics {}
        }
        QuestHub {}
        SubmitModal {}
    }
}
