//! Handles onto elements of the isolated document.
//!
//! The editor only needs a handful of element operations, so the tracker and
//! the save pipeline are written against [`EditableNode`] and the browser
//! binding lives in [`DomNode`].

use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement, Node};

pub trait EditableNode: Clone + PartialEq {
    /// Upper-case tag name, as reported by the DOM (`IMG`, `DIV`, ...)
    fn tag_name(&self) -> String;
    /// Inline style value, empty when unset
    fn style(&self, property: &str) -> String;
    fn set_style(&self, property: &str, value: &str);
    fn remove_style(&self, property: &str);
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);
    /// Whether `other` is this node or one of its descendants
    fn contains(&self, other: &Self) -> bool;
    fn focus(&self);
}

/// Element living in the iframe document.
///
/// The iframe has its own JS realm, so `instanceof` checks against the host
/// window's constructors fail; conversions use `unchecked_into` after checking
/// the node type.
#[derive(Debug, Clone)]
pub struct DomNode(pub HtmlElement);

impl DomNode {
    pub fn from_target(target: Option<EventTarget>) -> Option<Self> {
        let node: Node = target?.unchecked_into();
        (node.node_type() == Node::ELEMENT_NODE).then(|| DomNode(node.unchecked_into()))
    }

    pub fn from_element(element: Element) -> Self {
        DomNode(element.unchecked_into())
    }
}

impl PartialEq for DomNode {
    fn eq(&self, other: &Self) -> bool {
        self.0.is_same_node(Some(other.0.as_ref()))
    }
}

impl EditableNode for DomNode {
    fn tag_name(&self) -> String {
        self.0.tag_name()
    }

    fn style(&self, property: &str) -> String {
        self.0
            .style()
            .get_property_value(property)
            .unwrap_or_default()
    }

    fn set_style(&self, property: &str, value: &str) {
        let _ = self.0.style().set_property(property, value);
    }

    fn remove_style(&self, property: &str) {
        let _ = self.0.style().remove_property(property);
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = self.0.set_attribute(name, value);
    }

    fn remove_attribute(&self, name: &str) {
        let _ = self.0.remove_attribute(name);
    }

    fn contains(&self, other: &Self) -> bool {
        self.0.contains(Some(other.0.as_ref()))
    }

    fn focus(&self) {
        let _ = self.0.focus();
    }
}
