use dioxus::prelude::*;
use dioxus_logger::tracing::error;
use shared_types::ProjectSummary;

use super::header::{Logo, NavLink};
use crate::api::fetch_projects;
use crate::route::Route;

const SKELETON_ROWS: usize = 5;

/// Label shown for a project in the sidebar
pub fn project_label(project: &ProjectSummary) -> String {
    project
        .first_message
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or("Untitled project")
        .to_string()
}

#[component]
pub fn AppSidebar() -> Element {
    let mut projects = use_signal(Vec::<ProjectSummary>::new);
    let mut loading = use_signal(|| true);

    // Load projects on mount
    use_effect(move || {
        spawn(async move {
            match fetch_projects().await {
                Ok(list) => projects.set(list),
                Err(e) => error!("Failed to fetch projects: {}", e),
            }
            loading.set(false);
        });
    });

    rsx! {
        aside {
            class: "sidebar",
            div {
                class: "sidebar-header",
                Logo {}
                NavLink {
                    to: Route::Workspace,
                    class: "btn btn-primary btn-block",
                    "+ Add New Project"
                }
            }
            div {
                class: "sidebar-content",
                h3 { class: "sidebar-label", "Projects" }
                if loading() {
                    for index in 0..SKELETON_ROWS {
                        div { key: "{index}", class: "skeleton" }
                    }
                } else if projects.read().is_empty() {
                    p { class: "muted", "No Project Found" }
                } else {
                    for project in projects.read().iter() {
                        NavLink {
                            key: "{project.project_id}",
                            to: Route::playground(project.project_id.clone(), project.frame_id.clone()),
                            class: "project-link",
                            span { class: "line-clamp", "{project_label(project)}" }
                        }
                    }
                }
            }
        }
    }
}
