//! The iframe document the generated page is rendered into.
//!
//! The shell is written once at bootstrap; afterwards only the inner content of
//! `<body id="root">` changes. Dropping the surface removes every listener it
//! registered, so events arriving after unmount find nothing to act on.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus_logger::tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, EventTarget, FocusEvent, HtmlDocument, HtmlIFrameElement, KeyboardEvent, Node,
};

use super::guard::EditGuard;
use super::node::{DomNode, EditableNode};
use super::save::serialize_document;
use super::tracker::Tracker;
use super::SelectedElement;
use crate::interop::{now_ms, ListenerHandle};

pub const SHELL_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Pagesmith Preview</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <link href="https://cdnjs.cloudflare.com/ajax/libs/flowbite/2.3.0/flowbite.min.css" rel="stylesheet">
    <script src="https://cdnjs.cloudflare.com/ajax/libs/flowbite/2.3.0/flowbite.min.js"></script>
    <script src="https://unpkg.com/lucide@latest/dist/umd/lucide.js"></script>
    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
</head>
<body id="root"></body>
</html>"#;

/// Id of the container whose content is replaced by [`RenderSurface::set_content`]
pub const ROOT_ID: &str = "root";

/// Id of the host element wrapping the settings panels. Pointer-down inside it
/// arms the [`EditGuard`].
pub const SETTINGS_PANEL_ID: &str = "element-settings";

pub type SelectionListener = Rc<dyn Fn(Option<SelectedElement>)>;

pub struct RenderSurface {
    document: Option<Document>,
    tracker: Rc<RefCell<Tracker<DomNode>>>,
    guard: Rc<RefCell<EditGuard>>,
    on_selection: Option<SelectionListener>,
    listeners: Vec<ListenerHandle>,
    bootstrapped: bool,
}

impl RenderSurface {
    pub fn new(document: Option<Document>) -> Self {
        Self {
            document,
            tracker: Rc::new(RefCell::new(Tracker::new())),
            guard: Rc::new(RefCell::new(EditGuard::new())),
            on_selection: None,
            listeners: Vec::new(),
            bootstrapped: false,
        }
    }

    pub fn from_iframe(iframe: &HtmlIFrameElement) -> Self {
        Self::new(iframe.content_document())
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.bootstrapped
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref().filter(|_| self.bootstrapped)
    }

    /// Write the shell and point relative URLs at `origin`. Runs once.
    pub fn bootstrap(&mut self, origin: &str) {
        self.bootstrap_shell(origin, SHELL_HTML);
    }

    /// Like [`bootstrap`](Self::bootstrap) with a caller-supplied shell, which
    /// must contain an element with id [`ROOT_ID`].
    pub fn bootstrap_shell(&mut self, origin: &str, shell: &str) {
        if self.bootstrapped {
            return;
        }
        let Some(document) = self.document.as_ref() else {
            return;
        };

        // The iframe document lives in another realm; skip instanceof.
        let html_doc: &HtmlDocument = document.unchecked_ref();
        let written = html_doc
            .open()
            .and_then(|_| html_doc.write_1(shell))
            .and_then(|_| html_doc.close());
        if let Err(e) = written {
            warn!("Failed to write preview shell: {:?}", e);
            return;
        }

        inject_base(document, origin);
        self.bootstrapped = true;
        debug!("preview shell written");
    }

    /// Register the editing listeners on the iframe document and the
    /// settings-panel listener on the host window.
    pub fn attach_listeners(&mut self, on_selection: SelectionListener) {
        let Some(document) = self.document().cloned() else {
            return;
        };
        self.listeners.clear();
        self.on_selection = Some(on_selection.clone());
        let target: &EventTarget = document.as_ref();

        let tracker = self.tracker.clone();
        self.listen(target, "mouseover", true, move |event| {
            let Some(node) = DomNode::from_target(event.target()) else {
                return;
            };
            if let Ok(mut tracker) = tracker.try_borrow_mut() {
                tracker.pointer_over(node);
            }
        });

        let tracker = self.tracker.clone();
        self.listen(target, "mouseout", true, move |_| {
            if let Ok(mut tracker) = tracker.try_borrow_mut() {
                tracker.pointer_out();
            }
        });

        let tracker = self.tracker.clone();
        let notify = on_selection.clone();
        self.listen(target, "click", true, move |event| {
            event.prevent_default();
            event.stop_propagation();
            let Some(node) = DomNode::from_target(event.target()) else {
                return;
            };
            let selection = match tracker.try_borrow_mut() {
                Ok(mut tracker) => tracker.select(node),
                Err(_) => return,
            };
            selection.focus.focus();
            notify(Some(selection.element));
        });

        let tracker = self.tracker.clone();
        let guard = self.guard.clone();
        let notify = on_selection.clone();
        self.listen(target, "focusout", true, move |event| {
            // Events from the iframe belong to another realm; skip instanceof.
            let next = DomNode::from_target(event.unchecked_ref::<FocusEvent>().related_target());
            let cleared = match tracker.try_borrow_mut() {
                Ok(mut tracker) => tracker.focus_left(next.as_ref(), || {
                    guard
                        .try_borrow_mut()
                        .map(|mut guard| guard.take_suppression(now_ms()))
                        .unwrap_or(false)
                }),
                Err(_) => return,
            };
            if cleared {
                notify(None);
            }
        });

        let tracker = self.tracker.clone();
        let notify = on_selection;
        self.listen(target, "keydown", true, move |event| {
            if event.unchecked_ref::<KeyboardEvent>().key() != "Escape" {
                return;
            }
            let cleared = match tracker.try_borrow_mut() {
                Ok(mut tracker) => tracker.clear(),
                Err(_) => return,
            };
            if cleared {
                notify(None);
            }
        });

        if let Some(window) = web_sys::window() {
            let guard = self.guard.clone();
            self.listen(window.as_ref(), "mousedown", false, move |event| {
                let panel = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id(SETTINGS_PANEL_ID));
                let Some(panel) = panel else {
                    return;
                };
                let target = event.target().map(|t| t.unchecked_into::<Node>());
                if panel.contains(target.as_ref()) {
                    if let Ok(mut guard) = guard.try_borrow_mut() {
                        guard.mark_external_interaction(now_ms());
                    }
                }
            });
        }
    }

    fn listen(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        capture: bool,
        handler: impl FnMut(Event) + 'static,
    ) {
        match ListenerHandle::new(target, event, capture, handler) {
            Ok(listener) => self.listeners.push(listener),
            Err(e) => warn!("Failed to register {} listener: {:?}", event, e),
        }
    }

    /// Replace the root container's content. Selection and hover handles are
    /// dropped first since they point into the old content.
    ///
    /// Returns `false` while the shell has no root container yet.
    pub fn set_content(&self, html: &str) -> bool {
        let cleared = self
            .tracker
            .try_borrow_mut()
            .map(|mut tracker| tracker.invalidate())
            .unwrap_or(false);
        if cleared {
            self.notify(None);
        }

        let Some(root) = self
            .document()
            .and_then(|document| document.get_element_by_id(ROOT_ID))
        else {
            return false;
        };
        root.set_inner_html(html);
        true
    }

    pub fn clear_selection(&self) -> bool {
        let cleared = self
            .tracker
            .try_borrow_mut()
            .map(|mut tracker| tracker.clear())
            .unwrap_or(false);
        if cleared {
            self.notify(None);
        }
        cleared
    }

    pub fn apply_style(&self, property: &str, value: &str) -> bool {
        self.tracker
            .try_borrow()
            .map(|tracker| tracker.apply_style(property, value))
            .unwrap_or(false)
    }

    pub fn set_attribute(&self, name: &str, value: &str) -> bool {
        self.tracker
            .try_borrow()
            .map(|tracker| tracker.set_attribute(name, value))
            .unwrap_or(false)
    }

    pub fn selection(&self) -> Option<SelectedElement> {
        self.tracker.try_borrow().ok()?.snapshot()
    }

    /// Cleaned page markup, as it would be saved.
    pub fn serialize(&self) -> Option<String> {
        self.document().and_then(serialize_document)
    }

    pub fn teardown(&mut self) {
        self.listeners.clear();
        if let Ok(mut tracker) = self.tracker.try_borrow_mut() {
            tracker.invalidate();
        }
        self.on_selection = None;
        self.document = None;
    }

    fn notify(&self, selection: Option<SelectedElement>) {
        if let Some(on_selection) = self.on_selection.as_ref() {
            on_selection(selection);
        }
    }
}

impl Drop for RenderSurface {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn inject_base(document: &Document, origin: &str) {
    let Some(head) = document.head() else {
        return;
    };
    if let Ok(Some(existing)) = head.query_selector("base") {
        existing.remove();
    }
    let Ok(base) = document.create_element("base") else {
        return;
    };
    let _ = base.set_attribute("href", &format!("{}/", origin.trim_end_matches('/')));
    let _ = head.append_child(&base);
}

/// Shared, late-bound access to the surface for the components around it.
#[derive(Clone, Default)]
pub struct SurfaceHandle(Rc<RefCell<Option<RenderSurface>>>);

impl PartialEq for SurfaceHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl SurfaceHandle {
    pub fn install(&self, surface: RenderSurface) {
        if let Ok(mut slot) = self.0.try_borrow_mut() {
            *slot = Some(surface);
        }
    }

    pub fn is_installed(&self) -> bool {
        self.0.try_borrow().map(|slot| slot.is_some()).unwrap_or(false)
    }

    /// Drop the surface, tearing down its listeners.
    pub fn release(&self) {
        let surface = self.0.try_borrow_mut().ok().and_then(|mut slot| slot.take());
        drop(surface);
    }

    fn with<T>(&self, f: impl FnOnce(&RenderSurface) -> T) -> Option<T> {
        let slot = self.0.try_borrow().ok()?;
        slot.as_ref().map(f)
    }

    pub fn set_content(&self, html: &str) -> bool {
        self.with(|surface| surface.set_content(html))
            .unwrap_or(false)
    }

    pub fn clear_selection(&self) -> bool {
        self.with(RenderSurface::clear_selection).unwrap_or(false)
    }

    pub fn apply_style(&self, property: &str, value: &str) -> bool {
        self.with(|surface| surface.apply_style(property, value))
            .unwrap_or(false)
    }

    pub fn set_attribute(&self, name: &str, value: &str) -> bool {
        self.with(|surface| surface.set_attribute(name, value))
            .unwrap_or(false)
    }

    pub fn document(&self) -> Option<Document> {
        self.with(|surface| surface.document().cloned()).flatten()
    }

    pub fn serialize(&self) -> Option<String> {
        self.with(RenderSurface::serialize).flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_surface_is_a_no_op() {
        let mut surface = RenderSurface::new(None);
        surface.bootstrap("http://localhost:8080");
        assert!(!surface.set_content("<p>hi</p>"));

        assert!(!surface.is_bootstrapped());
        assert!(surface.document().is_none());
        assert!(surface.serialize().is_none());
        assert!(!surface.clear_selection());
        assert!(!surface.apply_style("color", "red"));
    }

    #[test]
    fn handle_without_surface_does_nothing() {
        let handle = SurfaceHandle::default();
        assert!(!handle.is_installed());
        assert!(!handle.set_content("<p>x</p>"));
        assert!(!handle.apply_style("color", "red"));
        assert!(handle.document().is_none());
    }

    #[test]
    fn release_drops_installed_surface() {
        let handle = SurfaceHandle::default();
        handle.install(RenderSurface::new(None));
        assert!(handle.is_installed());
        handle.release();
        assert!(!handle.is_installed());
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = SurfaceHandle::default();
        assert!(a == a.clone());
        assert!(a != SurfaceHandle::default());
    }
}
