use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, error, info, warn};
use shared_types::{FrameId, GenerationRequest, Message, ProjectId, Role, UpdateChatRequest};

use super::chat::ChatSection;
use super::design::WebsiteDesign;
use super::header::{NavLink, PlaygroundHeader};
use crate::api::{fetch_frame, stream_generation, update_chat};
use crate::notify::Toasts;
use crate::route::Route;
use crate::stream::GenerationStream;

/// Prompt to generate from right after loading: a frame that has no code yet
/// but whose chat ends with a user message never got its first reply.
pub fn pending_prompt(messages: &[Message], design_code: &str) -> Option<String> {
    if !design_code.trim().is_empty() {
        return None;
    }
    messages
        .last()
        .filter(|message| message.role == Role::User)
        .map(|message| message.content.clone())
}

#[component]
pub fn Playground(project_id: ProjectId, frame_id: Option<FrameId>) -> Element {
    match frame_id {
        Some(frame_id) => rsx! {
            PlaygroundView { project_id, frame_id }
        },
        None => rsx! {
            div {
                class: "playground-missing",
                h2 { "No frame selected" }
                p { class: "muted", "Open a project from the workspace to edit its page." }
                NavLink { to: Route::Workspace, class: "btn btn-primary", "Back to workspace" }
            }
        },
    }
}

#[component]
fn PlaygroundView(project_id: ProjectId, frame_id: FrameId) -> Element {
    let mut messages = use_signal(Vec::<Message>::new);
    let mut generated_code = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let replace_mode = use_signal(|| false);
    let toasts = use_context::<Toasts>();

    let frame_for_generate = frame_id.clone();
    let generate = use_callback(move |user_input: String| {
        if *loading.peek() {
            return;
        }
        let previous_code = generated_code.peek().clone();
        let existing_code = (!previous_code.trim().is_empty()).then(|| previous_code.clone());
        let request = GenerationRequest::from_input(user_input, existing_code, *replace_mode.peek());
        let frame_id = frame_for_generate.clone();
        loading.set(true);

        spawn(async move {
            let mut stream = GenerationStream::new();
            let result = stream_generation(&request, |text| {
                stream.push(text);
                if !stream.code().trim().is_empty() {
                    generated_code.set(stream.code().to_string());
                }
            })
            .await;

            match result {
                Ok(()) => {
                    debug!(bytes = stream.raw().len(), has_code = stream.has_code(), "generation finished");
                    messages.write().push(Message::assistant(stream.final_message()));
                    let snapshot = messages.peek().clone();
                    persist_chat(&frame_id, snapshot).await;
                }
                Err(e) => {
                    error!("Generation failed: {}", e);
                    generated_code.set(previous_code);
                    toasts.error("Generation failed. Please try again.");
                }
            }
            loading.set(false);
        });
    });

    // Load the frame on mount
    let (load_project, load_frame) = (project_id.clone(), frame_id.clone());
    use_effect(move || {
        let (project_id, frame_id) = (load_project.clone(), load_frame.clone());
        spawn(async move {
            match fetch_frame(&project_id, &frame_id).await {
                Ok(detail) => {
                    let design_code = detail.design_code.unwrap_or_default();
                    let pending = pending_prompt(&detail.chat_messages, &design_code);
                    info!(frame_id = %frame_id, messages = detail.chat_messages.len(), "frame loaded");
                    messages.set(detail.chat_messages);
                    generated_code.set(design_code);
                    if let Some(prompt) = pending {
                        generate.call(prompt);
                    }
                }
                Err(e) => {
                    error!("Failed to load frame: {}", e);
                    toasts.error("Could not load this project.");
                }
            }
        });
    });

    let on_send = move |text: String| {
        messages.write().push(Message::user(text.clone()));
        generate.call(text);
    };

    rsx! {
        div {
            class: "playground",
            PlaygroundHeader { replace_mode }
            div {
                class: "playground-body",
                ChatSection { messages, loading: loading(), on_send }
                WebsiteDesign { generated_code, project_id, frame_id }
            }
        }
    }
}

async fn persist_chat(frame_id: &FrameId, messages: Vec<Message>) {
    let request = UpdateChatRequest {
        frame_id: frame_id.clone(),
        messages,
    };
    if let Err(e) = update_chat(&request).await {
        warn!("Failed to store chat: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_prompt_when_frame_has_no_code() {
        let messages = vec![Message::user("a portfolio page")];
        assert_eq!(
            pending_prompt(&messages, "  "),
            Some("a portfolio page".to_string())
        );
    }

    #[test]
    fn no_pending_prompt_once_code_exists() {
        let messages = vec![Message::user("a portfolio page")];
        assert_eq!(pending_prompt(&messages, "<div></div>"), None);
    }

    #[test]
    fn no_pending_prompt_after_assistant_reply() {
        let messages = vec![
            Message::user("a portfolio page"),
            Message::assistant("Your code is ready!"),
        ];
        assert_eq!(pending_prompt(&messages, ""), None);
        assert_eq!(pending_prompt(&[], ""), None);
    }
}
