//! Transient notifications.

use dioxus::dioxus_core::spawn_forever;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastList {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastList {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            kind,
            message: message.into(),
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// App-wide toast queue, provided by the root component.
#[derive(Clone, Copy)]
pub struct Toasts(pub Signal<ToastList>);

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    fn show(&self, kind: ToastKind, message: String) {
        let mut list = self.0;
        let id = list.write().push(kind, message);
        // Outlive the caller: toasts are often raised right before navigating away.
        let _ = spawn_forever(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            list.write().dismiss(id);
        });
    }
}

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_context::<Toasts>();
    let list = toasts.0.read();

    rsx! {
        div {
            class: "toast-host",
            for toast in list.items().iter() {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    },
                    "{toast.message}"
                }
            }
        }
    }
}
