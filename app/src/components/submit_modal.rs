//! "Submit Your Project" wizard modal.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use morph_core::submission::{
    CONFIRMATION_MS, Field, FieldEdit, MAX_DESCRIPTION_LEN,
};
use morph_core::{SubmissionWizard, WizardStep};
use morph_types::Category;

/// Global manager for the submission modal.
#[derive(Clone, Copy)]
pub struct SubmissionManager {
    open: Signal<bool>,
    wizard: Signal<SubmissionWizard>,
}

impl SubmissionManager {
    pub fn new() -> Self {
        Self {
            open: Signal::new(false),
            wizard: Signal::new(SubmissionWizard::new()),
        }
    }

    pub fn open(&mut self) {
        self.wizard.write().reset();
        self.open.set(true);
    }

    /// Close and discard the draft.
    pub fn close(&mut self) {
        self.open.set(false);
        self.wizard.write().reset();
    }

    fn edit(&mut self, edit: FieldEdit) {
        self.wizard.write().update(edit);
    }
}

impl Default for SubmissionManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize submission provider at app root.
pub fn use_submission_provider() -> SubmissionManager {
    use_context_provider(SubmissionManager::new)
}

pub fn use_submission() -> SubmissionManager {
    use_context::<SubmissionManager>()
}

#[component]
pub fn SubmitModal() -> Element {
    let mut manager = use_submission();

    if !(manager.open)() {
        return rsx! {};
    }

    let wizard = manager.wizard.read();
    let step = wizard.step();
    let pct = wizard.progress() * 100.0;
    let draft = wizard.draft().clone();
    let error = |field: Field| wizard.error_for(field).map(|e| e.to_string());
    let name_error = error(Field::Name);
    let category_error = error(Field::Category);
    let twitter_error = error(Field::TwitterUrl);
    let website_error = error(Field::Website);
    let description_error = error(Field::Description);
    let description_len = draft.description.chars().count();
    drop(wizard);

    let submitted = step == WizardStep::Submitted;

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| {
                if !submitted {
                    manager.close();
                }
            },
            div {
                class: "submit-modal",
                onclick: move |e| e.stop_propagation(),

                div { class: "modal-header",
                    h3 { "Submit Your Project" }
                    button {
                        class: "btn btn-close",
                        onclick: move |_| manager.close(),
                        "X"
                    }
                }

                div { class: "progress-track",
                    div { class: "progress-fill", style: "width: {pct}%" }
                }
                ol { class: "step-list",
                    for s in WizardStep::INPUT_STEPS {
                        li {
                            key: "{s.index()}",
                            class: if s == step { "step step-current" } else if s.index() < step.index() { "step step-done" } else { "step" },
                            "{s.title()}"
                        }
                    }
                }

                div { class: "modal-content",
                    match step {
                        WizardStep::Basics => rsx! {
                            label { r#for: "submit-name", class: "field-header", "Project Name" }
                            input {
                                id: "submit-name",
                                value: "{draft.name}",
                                placeholder: "e.g. Morph Zoo",
                                oninput: move |e| manager.edit(FieldEdit::Name(e.value())),
                            }
                            if let Some(msg) = name_error {
                                span { class: "field-error", "{msg}" }
                            }
                            label { r#for: "submit-category", class: "field-header", "Category" }
                            select {
                                id: "submit-category",
                                onchange: move |e| manager.edit(FieldEdit::Category(e.value().parse::<Category>().ok())),
                                option { value: "", selected: draft.category.is_none(), "Select a category" }
                                for c in Category::ALL {
                                    option {
                                        key: "{c}",
                                        value: "{c}",
                                        selected: draft.category == Some(c),
                                        "{c}"
                                    }
                                }
                            }
                            if let Some(msg) = category_error {
                                span { class: "field-error", "{msg}" }
                            }
                        },
                        WizardStep::Links => rsx! {
                            label { r#for: "submit-twitter", class: "field-header", "X / Twitter" }
                            input {
                                id: "submit-twitter",
                                r#type: "url",
                                value: "{draft.twitter_url}",
                                placeholder: "https://x.com/yourproject",
                                oninput: move |e| manager.edit(FieldEdit::TwitterUrl(e.value())),
                            }
                            if let Some(msg) = twitter_error {
                                span { class: "field-error", "{msg}" }
                            }
                            label { r#for: "submit-website", class: "field-header", "Website (optional)" }
                            input {
                                id: "submit-website",
                                r#type: "url",
                                value: "{draft.website}",
                                placeholder: "https://",
                                oninput: move |e| manager.edit(FieldEdit::Website(e.value())),
                            }
                            if let Some(msg) = website_error {
                                span { class: "field-error", "{msg}" }
                            }
                        },
                        WizardStep::Details => rsx! {
                            label { r#for: "submit-description", class: "field-header", "Description" }
                            textarea {
                                id: "submit-description",
                                rows: 4,
                                value: "{draft.description}",
                                placeholder: "What does your project do on Morph?",
                                oninput: move |e| manager.edit(FieldEdit::Description(e.value())),
                            }
                            span { class: "char-count", "{description_len}/{MAX_DESCRIPTION_LEN}" }
                            if let Some(msg) = description_error {
                                span { class: "field-error", "{msg}" }
                            }
                        },
                        WizardStep::Review => rsx! {
                            dl { class: "review",
                                dt { "Project" }
                                dd { "{draft.name}" }
                                dt { "Category" }
                                dd {
                                    if let Some(c) = draft.category {
                                        "{c}"
                                    }
                                }
                                dt { "X / Twitter" }
                                dd { "{draft.twitter_url}" }
                                if !draft.website.is_empty() {
                                    dt { "Website" }
                                    dd { "{draft.website}" }
                                }
                                dt { "Description" }
                                dd { "{draft.description}" }
                            }
                        },
                        WizardStep::Submitted => rsx! {
                            div { class: "submitted",
                                i { class: "fa-solid fa-circle-check" }
                                p { "Submitted! {draft.name} is pending review." }
                            }
                        },
                    }
                }

                if !submitted {
                    div { class: "modal-footer",
                        if step != WizardStep::Basics {
                            button {
                                class: "btn",
                                onclick: move |_| {
                                    manager.wizard.write().back();
                                },
                                "Back"
                            }
                        }
                        if step == WizardStep::Review {
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| {
                                    if manager.wizard.write().submit().is_ok() {
                                        spawn(async move {
                                            TimeoutFuture::new(CONFIRMATION_MS).await;
                                            manager.close();
                                        });
                                    }
                                },
                                "Submit"
                            }
                        } else {
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| {
                                    let _ = manager.wizard.write().next();
                                },
                                "Next"
                            }
                        }
                    }
                }
            }
        }
    }
}
