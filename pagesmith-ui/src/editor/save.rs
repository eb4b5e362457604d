//! Serializes the edited page without the editor's own markings.

use shared_types::{FrameId, ProjectId, SaveFrameRequest, SaveFrameResponse};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use super::node::{DomNode, EditableNode};
use super::tracker::CONTENT_EDITABLE;
use crate::api::save_frame;

/// Inline style properties only the editor sets
pub const EDITOR_STYLE_PROPERTIES: [&str; 2] = ["outline", "cursor"];

/// Remove hover/selection markers and edit affordances from `nodes`.
pub fn strip_editor_artifacts<N, I>(nodes: I)
where
    N: EditableNode,
    I: IntoIterator<Item = N>,
{
    for node in nodes {
        for property in EDITOR_STYLE_PROPERTIES {
            node.remove_style(property);
        }
        if node
            .attribute("style")
            .is_some_and(|style| style.trim().is_empty())
        {
            node.remove_attribute("style");
        }
        node.remove_attribute(CONTENT_EDITABLE);
    }
}

/// `outerHTML` of a cleaned deep copy of the document. The live document is
/// left untouched so an ongoing selection survives the save.
pub fn serialize_document(document: &Document) -> Option<String> {
    let root = document.document_element()?;
    let copy: Element = root.clone_node_with_deep(true).ok()?.unchecked_into();

    let mut nodes = vec![DomNode::from_element(copy.clone())];
    if let Ok(list) = copy.query_selector_all("*") {
        nodes.extend(
            (0..list.length())
                .filter_map(|index| list.item(index))
                .map(|node| DomNode::from_element(node.unchecked_into())),
        );
    }
    strip_editor_artifacts(nodes);

    Some(copy.outer_html())
}

pub async fn save_document(
    document: &Document,
    frame_id: &FrameId,
    project_id: &ProjectId,
) -> Result<SaveFrameResponse, String> {
    let design_code =
        serialize_document(document).ok_or_else(|| "Page is not ready yet".to_string())?;

    save_frame(&SaveFrameRequest {
        design_code,
        frame_id: frame_id.clone(),
        project_id: project_id.clone(),
    })
    .await
}
