pub mod lookup;
pub mod store;

pub use store::SymbolIndex;

use crate::error::Result;
use crate::format::{Header, read_cstr};
use crate::model::Node;

/// Read-only view over the bytes of an index with its parsed header.
///
/// Every query runs against a view; the bytes may come from a memory map or from
/// an in-memory buffer.
#[derive(Debug, Clone, Copy)]
pub struct IndexView<'a> {
    buf: &'a [u8],
    header: Header,
}

impl<'a> IndexView<'a> {
    pub fn new(buf: &'a [u8]) -> Result<Self> {
        let header = Header::parse(buf)?;
        Ok(Self { buf, header })
    }

    pub(crate) fn from_parts(buf: &'a [u8], header: Header) -> Self {
        Self { buf, header }
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.buf
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn node(&self, offset: usize) -> Result<Node<'a>> {
        Node::read(self.buf, offset)
    }

    pub fn root(&self) -> Result<Node<'a>> {
        self.node(self.header.root_offset())
    }

    pub fn string_at(&self, offset: usize) -> Result<&'a str> {
        read_cstr(self.buf, offset)
    }

    /// The node's location string, if it has one.
    pub fn location_of(&self, node: &Node<'a>) -> Result<Option<&'a str>> {
        node.location.map(|offset| self.string_at(offset)).transpose()
    }

    pub fn parent_of(&self, node: &Node<'a>) -> Result<Option<Node<'a>>> {
        node.parent.map(|offset| self.node(offset)).transpose()
    }

    /// Direct children of `node`, in sibling order.
    pub fn children(&self, node: &Node<'a>) -> Siblings<'a> {
        Siblings {
            view: *self,
            next: node.first_child,
        }
    }
}

/// Iterator over a sibling chain.
pub struct Siblings<'a> {
    view: IndexView<'a>,
    next: Option<usize>,
}

impl<'a> Iterator for Siblings<'a> {
    type Item = Result<Node<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.next.take()?;
        let node = self.view.node(offset);
        if let Ok(node) = &node {
            self.next = node.next_sibling;
        }
        Some(node)
    }
}
