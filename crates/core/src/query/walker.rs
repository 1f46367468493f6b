use crate::error::Result;
use crate::index::IndexView;
use crate::model::Node;

/// Preorder walk over a first-child/next-sibling forest.
///
/// Yields `(node, depth)`: a node, then its first child's subtree at `depth + 1`, then
/// its next sibling's subtree at the same depth. Links are followed as stored; a cycle
/// in the index makes the walk endless.
pub struct TreeWalker<'a> {
    view: IndexView<'a>,
    stack: Vec<(usize, usize)>,
    max_depth: Option<usize>,
}

impl<'a> TreeWalker<'a> {
    /// Walk from the record at `start`. An offset of 0 walks nothing.
    pub fn new(view: IndexView<'a>, start: usize) -> Self {
        let stack = if start == 0 { Vec::new() } else { vec![(start, 0)] };
        Self {
            view,
            stack,
            max_depth: None,
        }
    }

    /// Do not descend into children deeper than `max_depth`.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl<'a> Iterator for TreeWalker<'a> {
    type Item = Result<(Node<'a>, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        let (offset, depth) = self.stack.pop()?;
        match self.view.node(offset) {
            Ok(node) => {
                // Sibling goes under the child so the child's subtree comes out first.
                if let Some(sibling) = node.next_sibling {
                    self.stack.push((sibling, depth));
                }
                if let Some(child) = node.first_child {
                    if self.max_depth.is_none_or(|max| depth < max) {
                        self.stack.push((child, depth + 1));
                    }
                }
                Some(Ok((node, depth)))
            }
            Err(e) => {
                self.stack.clear();
                Some(Err(e))
            }
        }
    }
}
