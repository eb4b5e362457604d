use std::cell::Cell;
use std::rc::Rc;

use dioxus::dioxus_core::Task;
use dioxus::prelude::*;
use dioxus_logger::tracing::{error, warn};
use gloo_timers::future::TimeoutFuture;
use shared_types::{FrameId, ProjectId};
use wasm_bindgen::JsCast;
use web_sys::HtmlIFrameElement;

use super::settings::{ElementSettings, ImageSettings};
use super::tools::{ScreenSize, WebPageTools};
use crate::editor::save::save_document;
use crate::editor::surface::SETTINGS_PANEL_ID;
use crate::editor::{normalize, RenderSurface, SelectedElement, SelectedElementKind, SurfaceHandle};
use crate::interop::window_origin;
use crate::notify::Toasts;
use crate::state::SaveRequests;

pub const PREVIEW_FRAME_ID: &str = "pagesmith-preview";

/// The shell's root container can lag behind bootstrap while its CDN scripts load.
const ROOT_POLL_ATTEMPTS: u32 = 50;
const ROOT_POLL_MS: u32 = 100;

/// Holds the one root poller allowed to run. A newer revision of the code
/// does not start another poller; the running one renders the latest code.
struct PollSlot<T: Copy>(Cell<Option<T>>);

impl<T: Copy> Default for PollSlot<T> {
    fn default() -> Self {
        Self(Cell::new(None))
    }
}

impl<T: Copy> PollSlot<T> {
    fn is_busy(&self) -> bool {
        self.0.get().is_some()
    }

    fn occupy(&self, task: T) {
        self.0.set(Some(task));
    }

    fn release(&self) -> Option<T> {
        self.0.take()
    }
}

#[component]
pub fn WebsiteDesign(
    generated_code: Signal<String>,
    project_id: ProjectId,
    frame_id: FrameId,
) -> Element {
    let surface = use_hook(SurfaceHandle::default);
    let selection = use_signal(|| None::<SelectedElement>);
    let screen = use_signal(|| ScreenSize::Web);
    let saves = use_context::<SaveRequests>();
    let toasts = use_context::<Toasts>();
    // Saves requested before this view mounted belong to another frame.
    let save_baseline = use_hook(|| saves.peek_count());

    // Write the shell and attach the editing listeners once
    let bootstrap_surface = surface.clone();
    use_effect(move || {
        if bootstrap_surface.is_installed() {
            return;
        }
        let Some(iframe) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(PREVIEW_FRAME_ID))
            .and_then(|el| el.dyn_into::<HtmlIFrameElement>().ok())
        else {
            warn!("preview iframe is not mounted");
            return;
        };

        let mut render = RenderSurface::from_iframe(&iframe);
        render.bootstrap(&window_origin());
        render.attach_listeners(Rc::new(move |next| {
            let mut selection = selection;
            selection.set(next);
        }));
        bootstrap_surface.install(render);
    });

    // Render the latest code into the root container
    let content_surface = surface.clone();
    let root_poll = use_hook(|| Rc::new(PollSlot::<Task>::default()));
    use_effect(move || {
        let html = normalize(&generated_code.read(), &window_origin());
        if content_surface.set_content(&html) {
            if let Some(task) = root_poll.release() {
                task.cancel();
            }
            return;
        }
        if root_poll.is_busy() {
            return;
        }
        let surface = content_surface.clone();
        let slot = root_poll.clone();
        let task = spawn(async move {
            for _ in 0..ROOT_POLL_ATTEMPTS {
                TimeoutFuture::new(ROOT_POLL_MS).await;
                let html = normalize(&generated_code.peek(), &window_origin());
                if surface.set_content(&html) {
                    slot.release();
                    return;
                }
            }
            slot.release();
            warn!("preview root never became available");
        });
        root_poll.occupy(task);
    });

    // Save whenever the header asks for it
    let save_surface = surface.clone();
    use_effect(move || {
        if saves.count() == save_baseline {
            return;
        }
        let Some(document) = save_surface.document() else {
            warn!("save requested before the preview was ready");
            return;
        };
        let (project_id, frame_id) = (project_id.clone(), frame_id.clone());
        spawn(async move {
            match save_document(&document, &frame_id, &project_id).await {
                Ok(_) => toasts.success("Saved Successfully!"),
                Err(e) => {
                    error!("Failed to save frame {}: {}", frame_id, e);
                    toasts.error("Could not save your changes. Please try again.");
                }
            }
        });
    });

    let release_surface = surface.clone();
    use_drop(move || release_surface.release());

    let panel = match selection() {
        Some(element) => {
            let serial = element.serial;
            if element.kind == SelectedElementKind::Image {
                rsx! {
                    ImageSettings { key: "{serial}", element, surface: surface.clone() }
                }
            } else {
                rsx! {
                    ElementSettings { key: "{serial}", element, surface: surface.clone() }
                }
            }
        }
        None => rsx! {},
    };

    rsx! {
        div {
            class: "design-section",
            div {
                class: "preview-column",
                iframe {
                    id: PREVIEW_FRAME_ID,
                    class: screen().frame_class(),
                    title: "Page preview",
                    "sandbox": "allow-scripts allow-same-origin",
                }
                WebPageTools { generated_code, screen }
            }
            div {
                id: SETTINGS_PANEL_ID,
                class: "settings-column",
                {panel}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_slot_admits_one_poller_at_a_time() {
        let slot = PollSlot::<u32>::default();
        assert!(!slot.is_busy());

        slot.occupy(1);
        assert!(slot.is_busy());

        assert_eq!(slot.release(), Some(1));
        assert!(!slot.is_busy());
        assert_eq!(slot.release(), None);
    }
}
