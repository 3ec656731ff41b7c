//! Ecosystem directory: category chips, search and the project grid.

use dioxus::prelude::*;
use morph_core::filter::category_counts;
use morph_core::series::DEFAULT_SPARKLINE;
use morph_core::{DirectoryQuery, filter_entities};
use morph_types::{CategoryFilter, Project, builtin_projects};

use super::sparkline::Sparkline;

#[component]
pub fn Directory() -> Element {
    let projects = use_signal(builtin_projects);
    let mut category = use_signal(CategoryFilter::default);
    let mut search = use_signal(String::new);
    let counts = use_memo(move || category_counts(&projects.read()));

    let query = DirectoryQuery::new(category(), search());
    let (visible, no_results) = {
        let all = projects.read();
        let result = filter_entities(&all, &query);
        let visible: Vec<Project> = result.iter().cloned().collect();
        (visible, result.is_no_results())
    };
    let featured: Vec<Project> = projects.read().iter().filter(|p| p.featured).cloned().collect();
    let total = projects.read().len();

    rsx! {
        section { class: "featured",
            h2 { "Featured" }
            div { class: "project-grid",
                for project in featured {
                    ProjectCard { key: "featured-{project.name}", project }
                }
            }
        }

        section { class: "directory",
            h2 { "Explore the Ecosystem" }
            div { class: "directory-controls",
                div { class: "chip-row",
                    for chip in CategoryFilter::chips() {
                        button {
                            key: "{chip}",
                            class: if category() == chip { "chip chip-active" } else { "chip" },
                            onclick: move |_| category.set(chip),
                            "{chip} "
                            span { class: "chip-count",
                                match chip {
                                    CategoryFilter::All => rsx! { "{total}" },
                                    CategoryFilter::Only(c) => {
                                        let n = counts.read().get(&c).copied().unwrap_or(0);
                                        rsx! { "{n}" }
                                    }
                                }
                            }
                        }
                    }
                }
                input {
                    class: "search",
                    r#type: "search",
                    placeholder: "Search projects...",
                    value: "{search}",
                    oninput: move |e| search.set(e.value()),
                }
            }

            if no_results {
                div { class: "empty-state",
                    p { "No projects found" }
                    button {
                        class: "btn",
                        onclick: move |_| {
                            category.set(CategoryFilter::All);
                            search.set(String::new());
                        },
                        "Clear filters"
                    }
                }
            } else {
                div { class: "project-grid",
                    for project in visible {
                        ProjectCard { key: "{project.name}", project }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let initial = project.initial();
    let status = project.status_text().to_string();
    let trend = if project.sparkline.is_empty() {
        DEFAULT_SPARKLINE.to_vec()
    } else {
        project.sparkline.clone()
    };

    rsx! {
        article { class: if project.featured { "project-card project-featured" } else { "project-card" },
            div { class: "project-head",
                span { class: "avatar", "{initial}" }
                div {
                    h3 { "{project.name}" }
                    span { class: "category-badge", "{project.category}" }
                }
                span { class: "status-badge", "{status}" }
            }
            p { class: "project-desc", "{project.description}" }

            div { class: "project-metrics",
                if let Some(followers) = &project.twitter_followers {
                    span { i { class: "fa-brands fa-x-twitter" } " {followers}" }
                }
                if let Some(discord) = &project.discord_activity {
                    span { i { class: "fa-brands fa-discord" } " {discord}" }
                }
                if let Some(fit) = &project.ecosystem_fit {
                    span { class: "fit", "{fit}" }
                }
            }

            div { class: "project-activity",
                div { class: "progress-track",
                    div { class: "progress-fill", style: "width: {project.activity}%" }
                }
                Sparkline { data: trend }
            }
        }
    }
}
