use crate::error::Result;
use crate::format::{
    NODE_FIRST_CHILD, NODE_LOCATION, NODE_NEXT_SIBLING, NODE_PARENT, NODE_SYMBOL_NAME, NODE_TYPE,
    offset_field, read_cstr, read_i32,
};
use rtscope_api::NodeKind;

/// A node record decoded from the index buffer.
///
/// Nodes are views: they hold offsets into the buffer and a borrowed name, and are
/// re-decoded whenever they are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node<'a> {
    /// Position of this record in the buffer.
    pub offset: usize,
    pub kind: NodeKind,
    pub symbol_name: &'a str,
    pub location: Option<usize>,
    pub parent: Option<usize>,
    pub first_child: Option<usize>,
    pub next_sibling: Option<usize>,
}

impl<'a> Node<'a> {
    pub fn read(buf: &'a [u8], offset: usize) -> Result<Self> {
        let field = |rel: usize| read_i32(buf, offset.saturating_add(rel));

        let kind = NodeKind::try_from(field(NODE_TYPE)?)?;
        Ok(Node {
            offset,
            kind,
            location: offset_field(field(NODE_LOCATION)?)?,
            parent: offset_field(field(NODE_PARENT)?)?,
            first_child: offset_field(field(NODE_FIRST_CHILD)?)?,
            next_sibling: offset_field(field(NODE_NEXT_SIBLING)?)?,
            symbol_name: read_cstr(buf, offset.saturating_add(NODE_SYMBOL_NAME))?,
        })
    }

    pub fn has_children(&self) -> bool {
        self.first_child.is_some()
    }
}
