//! Render surface against a real browser DOM.
//!
//! Run with `wasm-pack test --headless --firefox pagesmith-ui`.
#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use pagesmith_ui::editor::surface::{RenderSurface, ROOT_ID, SHELL_HTML};
use pagesmith_ui::editor::SelectedElement;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, HtmlIFrameElement};

wasm_bindgen_test_configure!(run_in_browser);

fn mount_iframe() -> HtmlIFrameElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let iframe: HtmlIFrameElement = document
        .create_element("iframe")
        .unwrap()
        .dyn_into()
        .unwrap();
    iframe.set_attribute("sandbox", "allow-scripts allow-same-origin").unwrap();
    document.body().unwrap().append_child(&iframe).unwrap();
    iframe
}

/// Same head and root container as the real shell, minus the CDN scripts.
const LOCAL_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8" /><title>Preview</title></head>
<body id="root"></body>
</html>"#;

fn bootstrapped() -> (HtmlIFrameElement, RenderSurface) {
    let iframe = mount_iframe();
    let mut surface = RenderSurface::from_iframe(&iframe);
    surface.bootstrap_shell("http://localhost:8080", LOCAL_SHELL);
    (iframe, surface)
}

/// Render `html`, waiting for the root container like the design view does.
async fn render(surface: &RenderSurface, html: &str) {
    for _ in 0..50 {
        if surface.set_content(html) {
            return;
        }
        TimeoutFuture::new(100).await;
    }
    panic!("root container never appeared");
}

fn inner_document(surface: &RenderSurface) -> Document {
    surface.document().cloned().unwrap()
}

fn click(document: &Document, id: &str) {
    let element: HtmlElement = document.get_element_by_id(id).unwrap().unchecked_into();
    element.click();
}

#[wasm_bindgen_test]
fn bootstrap_injects_base_href() {
    let (_iframe, surface) = bootstrapped();
    assert!(surface.is_bootstrapped());

    let document = inner_document(&surface);
    let base = document.query_selector("head base").unwrap().unwrap();
    assert_eq!(base.get_attribute("href").as_deref(), Some("http://localhost:8080/"));
}

#[wasm_bindgen_test]
fn local_shell_keeps_the_real_root_id() {
    assert!(SHELL_HTML.contains(&format!("id=\"{ROOT_ID}\"")));
    assert!(LOCAL_SHELL.contains(&format!("id=\"{ROOT_ID}\"")));
}

#[wasm_bindgen_test]
async fn set_content_replaces_only_the_root() {
    let (_iframe, surface) = bootstrapped();
    let document = inner_document(&surface);

    render(&surface, "<h1 id=\"title\">Hello</h1>").await;
    let root = document.get_element_by_id(ROOT_ID).unwrap();
    assert_eq!(root.inner_html(), "<h1 id=\"title\">Hello</h1>");

    assert!(surface.set_content(""));
    assert_eq!(root.inner_html(), "");
    assert!(surface.selection().is_none());
    assert!(document.query_selector("head base").unwrap().is_some());
}

#[wasm_bindgen_test]
async fn click_selects_and_save_output_is_clean() {
    let (_iframe, mut surface) = bootstrapped();
    let document = inner_document(&surface);
    render(&surface, "<p id=\"lead\" style=\"color: red;\">Lead</p>").await;

    let published: Rc<RefCell<Vec<Option<SelectedElement>>>> = Rc::default();
    let sink = published.clone();
    surface.attach_listeners(Rc::new(move |selection| sink.borrow_mut().push(selection)));

    click(&document, "lead");
    let selected = surface.selection().unwrap();
    assert_eq!(selected.tag_name, "P");
    assert_eq!(published.borrow().len(), 1);

    let lead = document.get_element_by_id("lead").unwrap();
    assert_eq!(lead.get_attribute("contenteditable").as_deref(), Some("true"));

    let saved = surface.serialize().unwrap();
    assert!(!saved.contains("outline"));
    assert!(!saved.contains("contenteditable"));
    assert!(saved.contains("color: red"));
}

#[wasm_bindgen_test]
async fn teardown_detaches_listeners() {
    let (_iframe, mut surface) = bootstrapped();
    let document = inner_document(&surface);
    render(&surface, "<span id=\"target\">x</span>").await;

    let published: Rc<RefCell<Vec<Option<SelectedElement>>>> = Rc::default();
    let sink = published.clone();
    surface.attach_listeners(Rc::new(move |selection| sink.borrow_mut().push(selection)));
    surface.teardown();

    click(&document, "target");
    assert!(published.borrow().is_empty());
    let target = document.get_element_by_id("target").unwrap();
    assert!(target.get_attribute("contenteditable").is_none());
}
