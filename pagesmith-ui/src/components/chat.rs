use dioxus::prelude::*;
use shared_types::{Message, Role};

#[component]
pub fn ChatSection(
    messages: Signal<Vec<Message>>,
    loading: bool,
    on_send: EventHandler<String>,
) -> Element {
    let mut input_text = use_signal(String::new);

    let send_message = use_callback(move |_: ()| {
        let text = input_text.read().trim().to_string();
        if text.is_empty() {
            return;
        }
        on_send.call(text);
        input_text.set(String::new());
    });

    let onkeydown = move |e: KeyboardEvent| {
        if e.key() == Key::Enter && !e.modifiers().shift() {
            e.prevent_default();
            if !loading {
                send_message.call(());
            }
        }
    };

    rsx! {
        div {
            class: "chat-section",
            div {
                class: "chat-messages",
                if messages.read().is_empty() {
                    p { class: "muted chat-empty", "No Messages Yet" }
                } else {
                    for (index, msg) in messages.read().iter().enumerate() {
                        div {
                            key: "{index}",
                            class: if msg.role == Role::User { "chat-row chat-row-user" } else { "chat-row" },
                            div {
                                class: if msg.role == Role::User { "chat-bubble chat-bubble-user" } else { "chat-bubble" },
                                "{msg.content}"
                            }
                        }
                    }
                }
                if loading {
                    div {
                        class: "chat-thinking",
                        span { class: "spinner" }
                        span { class: "muted", "Thinking..." }
                    }
                }
            }

            div {
                class: "chat-input",
                textarea {
                    class: "chat-textarea",
                    placeholder: "Describe your website design idea",
                    value: "{input_text}",
                    oninput: move |e: FormEvent| input_text.set(e.value()),
                    onkeydown,
                }
                button {
                    class: "btn btn-primary",
                    disabled: loading || input_text.read().trim().is_empty(),
                    onclick: move |_| send_message.call(()),
                    "↑"
                }
            }
        }
    }
}
