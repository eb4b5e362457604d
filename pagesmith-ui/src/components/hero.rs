use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info};
use shared_types::{CreateProjectRequest, FrameId, Message, ProjectId};

use crate::api::create_project;
use crate::notify::Toasts;
use crate::route::{Route, RouteState};
use crate::state::{Identity, UserState, SIGN_IN_URL};

struct Suggestion {
    label: &'static str,
    icon: &'static str,
    prompt: &'static str,
}

static SUGGESTIONS: [Suggestion; 4] = [
    Suggestion {
        label: "Dashboard",
        icon: "▦",
        prompt: "Create an analytics dashboard to track customers and revenue data for a SaaS",
    },
    Suggestion {
        label: "SignUp Form",
        icon: "⚿",
        prompt: "Create a modern sign up form with email/password fields, Google and Github login options, and terms checkbox",
    },
    Suggestion {
        label: "Hero",
        icon: "⌂",
        prompt: "Create a modern header and centered hero section for a productivity SaaS. Include a badge for feature announcement, a title with a subtle gradient effect, subtitle, CTA, small social proof and an image.",
    },
    Suggestion {
        label: "User Profile Card",
        icon: "☺",
        prompt: "Create a modern user profile card component for a social media website",
    },
];

/// A fresh project whose chat opens with the user's prompt.
pub fn new_project_request(prompt: &str) -> CreateProjectRequest {
    CreateProjectRequest {
        project_id: ProjectId::new(),
        frame_id: FrameId::new(),
        messages: vec![Message::user(prompt.trim())],
    }
}

#[component]
pub fn Hero() -> Element {
    let mut user_input = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let user = use_context::<UserState>();
    let toasts = use_context::<Toasts>();
    let mut route = use_context::<RouteState>();

    let create = use_callback(move |_: ()| {
        let prompt = user_input.read().trim().to_string();
        if prompt.is_empty() || *loading.peek() {
            return;
        }
        loading.set(true);

        spawn(async move {
            let request = new_project_request(&prompt);
            match create_project(&request).await {
                Ok(summary) => {
                    info!(project_id = %summary.project_id, "project created");
                    toasts.success("Project created successfully!");
                    loading.set(false);
                    route.navigate(Route::playground(summary.project_id, summary.frame_id));
                }
                Err(e) => {
                    error!("Failed to create project: {}", e);
                    toasts.error("Internal Server Error. Please try again later.");
                    loading.set(false);
                }
            }
        });
    });

    let empty = user_input.read().trim().is_empty();
    let submit = match user.identity() {
        Identity::SignedOut => rsx! {
            a {
                class: "btn btn-primary",
                href: SIGN_IN_URL,
                title: "Sign in to create a project",
                "↑"
            }
        },
        identity => rsx! {
            button {
                class: "btn btn-primary",
                disabled: empty || loading() || identity == Identity::Unknown,
                onclick: move |_| create.call(()),
                if loading() {
                    span { class: "spinner" }
                } else {
                    "↑"
                }
            }
        },
    };

    rsx! {
        div {
            class: "hero",
            h2 { class: "hero-title", "What should we Design?" }
            p { class: "hero-subtitle", "Generate, Edit and Explore design with AI, Export code as well" }

            div {
                class: "hero-input",
                textarea {
                    class: "hero-textarea",
                    placeholder: "Describe your page design",
                    value: "{user_input}",
                    oninput: move |e: FormEvent| user_input.set(e.value()),
                }
                div {
                    class: "hero-input-actions",
                    {submit}
                }
            }

            div {
                class: "suggestions",
                for suggestion in SUGGESTIONS.iter() {
                    button {
                        key: "{suggestion.label}",
                        class: "btn btn-outline",
                        onclick: move |_| user_input.set(suggestion.prompt.to_string()),
                        span { class: "suggestion-icon", "{suggestion.icon}" }
                        "{suggestion.label}"
                    }
                }
            }
        }
    }
}
