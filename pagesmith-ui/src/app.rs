use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};

use crate::api::ensure_user;
use crate::components::{Hero, NotFound, Playground, SiteHeader, Workspace};
use crate::interop::ListenerHandle;
use crate::notify::{ToastHost, ToastList, Toasts};
use crate::route::{current_route, Route, RouteState};
use crate::state::{Identity, SaveRequests, ThemeState, UserState};
use crate::styles::APP_STYLES;
use crate::theme::{apply_theme_to_document, initial_theme};

#[component]
pub fn App() -> Element {
    let theme = use_context_provider(|| ThemeState(Signal::new(initial_theme())));
    use_context_provider(|| SaveRequests(Signal::new(0)));
    use_context_provider(|| Toasts(Signal::new(ToastList::default())));
    let mut user = use_context_provider(|| UserState(Signal::new(Identity::Unknown)));
    let mut route = use_context_provider(|| RouteState(Signal::new(current_route())));

    use_effect(move || apply_theme_to_document(theme.current()));

    // Back/forward buttons
    use_hook(move || {
        let listener = web_sys::window().and_then(|window| {
            ListenerHandle::new(window.as_ref(), "popstate", false, move |_| {
                route.0.set(current_route());
            })
            .map_err(|e| warn!("Failed to register popstate listener: {:?}", e))
            .ok()
        });
        Rc::new(listener)
    });

    // Identity probe
    use_hook(move || {
        spawn(async move {
            let identity = match ensure_user().await {
                Ok(Some(detail)) => {
                    info!(email = %detail.email, "signed in");
                    Identity::SignedIn(detail)
                }
                Ok(None) => Identity::SignedOut,
                Err(e) => {
                    warn!("Identity probe failed: {}", e);
                    Identity::SignedOut
                }
            };
            user.0.set(identity);
        })
    });

    let current = route.current();
    let page = match current.clone() {
        Route::Home => rsx! {
            SiteHeader {}
            Hero {}
        },
        Route::Workspace => rsx! {
            Workspace {}
        },
        Route::Playground {
            project_id,
            frame_id,
        } => {
            // Remount per frame so editor state never leaks between projects
            let page_key = current.href();
            rsx! {
                Playground { key: "{page_key}", project_id, frame_id }
            }
        }
        Route::NotFound(path) => rsx! {
            SiteHeader {}
            NotFound { path }
        },
    };

    rsx! {
        style { {APP_STYLES} }
        div {
            class: "app",
            {page}
        }
        ToastHost {}
    }
}
