//! Visual editor core.
//!
//! The iframe document is owned by [`surface::RenderSurface`]; the UI framework
//! never renders into it. Selection lives in [`tracker::Tracker`] and the host
//! only sees [`SelectedElement`] snapshots.

pub mod guard;
pub mod node;
pub mod normalize;
pub mod save;
pub mod settings;
pub mod surface;
pub mod tracker;

use std::collections::BTreeMap;

pub use guard::EditGuard;
pub use node::{DomNode, EditableNode};
pub use normalize::normalize;
pub use surface::{RenderSurface, SurfaceHandle};
pub use tracker::Tracker;

/// Which settings panel a selection gets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectedElementKind {
    Image,
    Generic,
}

impl SelectedElementKind {
    pub fn from_tag(tag_name: &str) -> Self {
        if tag_name.eq_ignore_ascii_case("img") {
            SelectedElementKind::Image
        } else {
            SelectedElementKind::Generic
        }
    }
}

/// Read-only copy of the selected element, published to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedElement {
    /// Increments on every selection, so panels can reset their inputs
    pub serial: u64,
    pub tag_name: String,
    pub kind: SelectedElementKind,
    pub styles: BTreeMap<String, String>,
    pub attributes: BTreeMap<String, String>,
}

impl SelectedElement {
    pub fn capture<N: EditableNode>(serial: u64, node: &N) -> Self {
        let tag_name = node.tag_name();
        let kind = SelectedElementKind::from_tag(&tag_name);

        let styles = settings::captured_style_properties(kind)
            .iter()
            .map(|property| (property.to_string(), node.style(property)))
            .collect();
        let attributes = settings::captured_attributes(kind)
            .iter()
            .filter_map(|name| node.attribute(name).map(|value| (name.to_string(), value)))
            .collect();

        Self {
            serial,
            tag_name,
            kind,
            styles,
            attributes,
        }
    }

    pub fn style(&self, property: &str) -> &str {
        self.styles.get(property).map(String::as_str).unwrap_or("")
    }

    pub fn attribute(&self, name: &str) -> &str {
        self.attributes.get(name).map(String::as_str).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::node::fake::FakeNode;
    use super::*;

    #[test]
    fn kind_follows_tag() {
        assert_eq!(SelectedElementKind::from_tag("IMG"), SelectedElementKind::Image);
        assert_eq!(SelectedElementKind::from_tag("img"), SelectedElementKind::Image);
        assert_eq!(SelectedElementKind::from_tag("DIV"), SelectedElementKind::Generic);
    }

    #[test]
    fn capture_reads_panel_values() {
        let node = FakeNode::new("img").with_style("border-radius", "8px");
        node.set_attribute("src", "/a.png");

        let snapshot = SelectedElement::capture(3, &node);
        assert_eq!(snapshot.serial, 3);
        assert_eq!(snapshot.kind, SelectedElementKind::Image);
        assert_eq!(snapshot.style("border-radius"), "8px");
        assert_eq!(snapshot.attribute("src"), "/a.png");
        assert_eq!(snapshot.attribute("alt"), "");
    }
}
