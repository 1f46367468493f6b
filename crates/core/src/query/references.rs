use crate::error::Result;
use crate::index::IndexView;
use crate::model::{Node, NodeKind};

/// Locations of the `Reference` children directly under `node`, in sibling order.
///
/// Grandchildren are not visited, and references without a location are skipped.
pub fn list_references<'a>(view: &IndexView<'a>, node: &Node<'a>) -> Result<Vec<&'a str>> {
    if !node.has_children() {
        return Ok(Vec::new());
    }
    let mut locations = Vec::new();
    for child in view.children(node) {
        let child = child?;
        if child.kind != NodeKind::Reference {
            continue;
        }
        if let Some(location) = view.location_of(&child)? {
            locations.push(location);
        }
    }
    Ok(locations)
}
