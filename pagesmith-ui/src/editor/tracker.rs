//! Hover and selection state for the isolated document.
//!
//! `Idle -> Hovering -> Selected -> Idle`. At most one node carries the hover
//! marker, at most one carries the selection marker and `contenteditable`, and
//! the hover marker is never shown while something is selected.

use super::{EditableNode, SelectedElement};

pub const HOVER_OUTLINE: &str = "2px dotted blue";
pub const SELECTED_OUTLINE: &str = "2px solid red";
pub const CONTENT_EDITABLE: &str = "contenteditable";

/// Result of a click: the snapshot to publish and the node to focus once the
/// tracker is no longer borrowed.
#[derive(Debug, Clone)]
pub struct Selection<N> {
    pub element: SelectedElement,
    pub focus: N,
}

#[derive(Debug)]
pub struct Tracker<N: EditableNode> {
    hovered: Option<N>,
    selected: Option<N>,
    serial: u64,
}

impl<N: EditableNode> Default for Tracker<N> {
    fn default() -> Self {
        Self {
            hovered: None,
            selected: None,
            serial: 0,
        }
    }
}

impl<N: EditableNode> Tracker<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<&N> {
        self.hovered.as_ref()
    }

    pub fn selected(&self) -> Option<&N> {
        self.selected.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.hovered.is_none() && self.selected.is_none()
    }

    pub fn pointer_over(&mut self, node: N) {
        if self.selected.is_some() {
            return;
        }
        if let Some(previous) = self.hovered.take() {
            if previous != node {
                previous.remove_style("outline");
            }
        }
        node.set_style("outline", HOVER_OUTLINE);
        self.hovered = Some(node);
    }

    pub fn pointer_out(&mut self) {
        if self.selected.is_some() {
            return;
        }
        if let Some(previous) = self.hovered.take() {
            previous.remove_style("outline");
        }
    }

    /// Make `node` the selection. The previous selection is unmarked first.
    pub fn select(&mut self, node: N) -> Selection<N> {
        if let Some(previous) = self.selected.take() {
            if previous != node {
                unmark(&previous);
            }
        }
        if let Some(hovered) = self.hovered.take() {
            if hovered != node {
                hovered.remove_style("outline");
            }
        }

        node.set_style("outline", SELECTED_OUTLINE);
        node.set_attribute(CONTENT_EDITABLE, "true");
        self.serial += 1;

        let element = SelectedElement::capture(self.serial, &node);
        self.selected = Some(node.clone());
        Selection {
            element,
            focus: node,
        }
    }

    /// Focus left the selected node for `next` (`None` when focus left the
    /// document). Moves within the selection are ignored; otherwise the
    /// selection is cleared unless `suppressed` says the move came from the
    /// settings panel. Returns whether the selection was cleared.
    pub fn focus_left(&mut self, next: Option<&N>, suppressed: impl FnOnce() -> bool) -> bool {
        let Some(selected) = self.selected.as_ref() else {
            return false;
        };
        if next.is_some_and(|next| selected.contains(next)) {
            return false;
        }
        if suppressed() {
            return false;
        }
        self.clear()
    }

    /// Remove the selection markers. Returns whether anything was selected.
    pub fn clear(&mut self) -> bool {
        match self.selected.take() {
            Some(node) => {
                unmark(&node);
                true
            }
            None => false,
        }
    }

    /// Forget every handle before the document content is replaced.
    pub fn invalidate(&mut self) -> bool {
        let cleared = self.clear();
        if let Some(hovered) = self.hovered.take() {
            hovered.remove_style("outline");
        }
        cleared
    }

    /// Set (or, for a blank value, remove) an inline style on the selection.
    pub fn apply_style(&self, property: &str, value: &str) -> bool {
        let Some(node) = self.selected.as_ref() else {
            return false;
        };
        if value.trim().is_empty() {
            node.remove_style(property);
        } else {
            node.set_style(property, value.trim());
        }
        true
    }

    pub fn set_attribute(&self, name: &str, value: &str) -> bool {
        let Some(node) = self.selected.as_ref() else {
            return false;
        };
        node.set_attribute(name, value);
        true
    }

    pub fn snapshot(&self) -> Option<SelectedElement> {
        self.selected
            .as_ref()
            .map(|node| SelectedElement::capture(self.serial, node))
    }
}

fn unmark<N: EditableNode>(node: &N) {
    node.remove_style("outline");
    node.remove_attribute(CONTENT_EDITABLE);
}
