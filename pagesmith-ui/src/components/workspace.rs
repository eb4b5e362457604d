use dioxus::prelude::*;

use super::header::{NavLink, ThemeToggle};
use super::hero::Hero;
use super::sidebar::AppSidebar;
use crate::route::Route;

#[component]
pub fn Workspace() -> Element {
    rsx! {
        div {
            class: "workspace",
            AppSidebar {}
            main {
                class: "workspace-main",
                div { class: "workspace-toolbar", ThemeToggle {} }
                Hero {}
            }
        }
    }
}

#[component]
pub fn NotFound(path: String) -> Element {
    rsx! {
        div {
            class: "not-found",
            h2 { "Page not found" }
            p { class: "muted", "Nothing lives at {path}." }
            NavLink { to: Route::Home, class: "btn btn-primary", "Go home" }
        }
    }
}
