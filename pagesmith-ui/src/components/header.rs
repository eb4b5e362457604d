use dioxus::prelude::*;

use crate::route::{Route, RouteState};
use crate::state::{SaveRequests, ThemeState, UserState, SIGN_IN_URL};
use crate::theme::Theme;

/// In-app link: updates the route signal instead of reloading the page.
#[component]
pub fn NavLink(to: Route, #[props(default, into)] class: String, children: Element) -> Element {
    let mut route = use_context::<RouteState>();
    let href = to.href();

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: move |e: MouseEvent| {
                e.prevent_default();
                route.navigate(to.clone());
            },
            {children}
        }
    }
}

#[component]
pub fn Logo() -> Element {
    rsx! {
        div {
            class: "brand",
            span { class: "brand-mark", "◆" }
            h2 { class: "brand-name", "Pagesmith" }
        }
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<ThemeState>();
    let (icon, title) = match theme.current() {
        Theme::Dark => ("☀", "Switch to light theme"),
        Theme::Light => ("☾", "Switch to dark theme"),
    };

    rsx! {
        button {
            class: "btn btn-ghost",
            title: "{title}",
            onclick: move |_| theme.toggle(),
            "{icon}"
        }
    }
}

/// Landing page header
#[component]
pub fn SiteHeader() -> Element {
    let user = use_context::<UserState>();

    rsx! {
        header {
            class: "site-header",
            Logo {}
            div {
                class: "header-actions",
                ThemeToggle {}
                if user.identity().is_signed_in() {
                    NavLink {
                        to: Route::Workspace,
                        class: "btn btn-primary",
                        "Get Started →"
                    }
                } else {
                    a {
                        class: "btn btn-primary",
                        href: SIGN_IN_URL,
                        "Get Started →"
                    }
                }
            }
        }
    }
}

/// Playground header: Append/Replace toggle and the Save button.
#[component]
pub fn PlaygroundHeader(replace_mode: Signal<bool>) -> Element {
    let mut replace_mode = replace_mode;
    let mut saves = use_context::<SaveRequests>();
    let replacing = replace_mode();

    rsx! {
        header {
            class: "playground-header",
            div {
                class: "header-left",
                NavLink {
                    to: Route::Workspace,
                    class: "brand-link",
                    Logo {}
                }
                div {
                    class: "mode-toggle",
                    button {
                        class: if replacing { "btn btn-ghost" } else { "btn btn-secondary" },
                        onclick: move |_| replace_mode.set(false),
                        "Append"
                    }
                    button {
                        class: if replacing { "btn btn-secondary" } else { "btn btn-ghost" },
                        onclick: move |_| replace_mode.set(true),
                        "Replace"
                    }
                }
            }
            div {
                class: "header-actions",
                ThemeToggle {}
                button {
                    class: "btn btn-primary",
                    onclick: move |_| saves.request(),
                    "Save"
                }
            }
        }
    }
}
