use crate::error::Result;
use crate::index::IndexView;
use crate::model::{Node, NodeKind};

/// How a node kind finds its counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pairing<'a> {
    /// A same-parent sibling of `target` kind named `name`.
    Sibling { target: NodeKind, name: &'a str },
    /// The enclosing node.
    Container,
    Unpaired,
}

impl<'a> Pairing<'a> {
    pub fn of(node: &Node<'a>) -> Self {
        match node.kind {
            NodeKind::MethodDeclaration => Pairing::Sibling {
                target: NodeKind::MethodDefinition,
                name: node.symbol_name,
            },
            NodeKind::MethodDefinition => Pairing::Sibling {
                target: NodeKind::MethodDeclaration,
                name: node.symbol_name,
            },
            NodeKind::Reference | NodeKind::EnumValue => Pairing::Container,
            _ => Pairing::Unpaired,
        }
    }
}

/// Location of the node paired with `node`, or `None`.
///
/// Declarations and definitions of a method are same-name siblings under one parent;
/// references and enum values resolve to their parent.
pub fn resolve<'a>(view: &IndexView<'a>, node: &Node<'a>) -> Result<Option<&'a str>> {
    match Pairing::of(node) {
        Pairing::Sibling { target, name } => {
            let Some(parent) = view.parent_of(node)? else {
                tracing::debug!("{} {} has no parent", node.kind, node.symbol_name);
                return Ok(None);
            };
            find_sibling(view, &parent, target, name)
        }
        Pairing::Container => match view.parent_of(node)? {
            Some(parent) => view.location_of(&parent),
            None => Ok(None),
        },
        Pairing::Unpaired => Ok(None),
    }
}

/// First child of `parent` with the given kind and exact name. Its location is the
/// answer even when absent.
fn find_sibling<'a>(
    view: &IndexView<'a>,
    parent: &Node<'a>,
    target: NodeKind,
    name: &str,
) -> Result<Option<&'a str>> {
    for sibling in view.children(parent) {
        let sibling = sibling?;
        if sibling.kind == target && sibling.symbol_name == name {
            return view.location_of(&sibling);
        }
    }
    Ok(None)
}
