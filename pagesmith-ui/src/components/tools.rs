use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use crate::editor::normalize;
use crate::editor::surface::SHELL_HTML;
use crate::interop::copy_to_clipboard;
use crate::notify::Toasts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenSize {
    Web,
    Mobile,
}

impl ScreenSize {
    pub fn frame_class(self) -> &'static str {
        match self {
            ScreenSize::Web => "preview-frame",
            ScreenSize::Mobile => "preview-frame preview-frame-mobile",
        }
    }
}

/// Standalone page for the code dialog: the preview shell with the
/// normalized content in its root container.
pub fn page_source(generated_code: &str) -> String {
    let body = normalize(generated_code, "");
    SHELL_HTML.replacen(
        "<body id=\"root\"></body>",
        &format!("<body id=\"root\">\n{}\n</body>", body.trim()),
        1,
    )
}

#[component]
pub fn WebPageTools(generated_code: Signal<String>, screen: Signal<ScreenSize>) -> Element {
    let mut screen = screen;
    let mut show_code = use_signal(|| false);
    let toasts = use_context::<Toasts>();

    let current = screen();
    let size_class = |size: ScreenSize| {
        if current == size {
            "btn btn-secondary"
        } else {
            "btn btn-ghost"
        }
    };

    let source = if show_code() {
        page_source(&generated_code.read())
    } else {
        String::new()
    };

    let copy_code = move |_: MouseEvent| {
        let source = page_source(&generated_code.peek());
        spawn(async move {
            match copy_to_clipboard(&source).await {
                Ok(()) => toasts.success("Code copied!"),
                Err(e) => {
                    warn!("Clipboard write failed: {}", e);
                    toasts.error("Could not copy the code.");
                }
            }
        });
    };

    rsx! {
        div {
            class: "page-tools",
            div {
                class: "segmented",
                button {
                    class: size_class(ScreenSize::Web),
                    title: "Desktop preview",
                    onclick: move |_| screen.set(ScreenSize::Web),
                    "🖥 Web"
                }
                button {
                    class: size_class(ScreenSize::Mobile),
                    title: "Mobile preview",
                    onclick: move |_| screen.set(ScreenSize::Mobile),
                    "📱 Mobile"
                }
            }
            button {
                class: "btn btn-outline",
                disabled: generated_code.read().trim().is_empty(),
                onclick: move |_| show_code.set(true),
                "</> View Code"
            }
        }

        if show_code() {
            div {
                class: "modal-backdrop",
                onclick: move |_| show_code.set(false),
                div {
                    class: "modal",
                    onclick: move |e: MouseEvent| e.stop_propagation(),
                    div {
                        class: "modal-header",
                        h3 { "Source Code" }
                        div {
                            class: "modal-actions",
                            button { class: "btn btn-primary", onclick: copy_code, "Copy" }
                            button {
                                class: "btn btn-ghost",
                                onclick: move |_| show_code.set(false),
                                "Close"
                            }
                        }
                    }
                    pre {
                        class: "code-view",
                        code { "{source}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_source_fills_the_shell() {
        let source = page_source("```html\n<main>Hi</main>\n```");
        assert!(source.starts_with("<!DOCTYPE html>"));
        assert!(source.contains("<body id=\"root\">\n<main>Hi</main>\n</body>"));
        assert!(!source.contains("```"));
    }

    #[test]
    fn page_source_keeps_relative_images() {
        let source = page_source("<img src=\"/hero.png\">");
        assert!(source.contains("src=\"/hero.png\""));
    }

    #[test]
    fn mobile_frame_is_narrower() {
        assert_ne!(ScreenSize::Web.frame_class(), ScreenSize::Mobile.frame_class());
    }
}
