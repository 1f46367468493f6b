use super::dictionary::DictionaryScanner;
use super::matcher::SymbolMatcher;
use super::references::list_references;
use super::resolver::resolve;
use super::walker::TreeWalker;
use crate::error::Result;
use crate::index::IndexView;
use crate::model::Node;
use rtscope_api::{Query, QueryItem};

/// Runs queries against an index view, streaming result items to a sink.
pub struct QueryEngine<'a> {
    view: IndexView<'a>,
}

impl<'a> QueryEngine<'a> {
    pub fn new(view: IndexView<'a>) -> Self {
        Self { view }
    }

    /// Execute `query`, handing each result item to `sink` in order.
    ///
    /// Any decode error aborts the query. Errors returned by the sink are passed through.
    pub fn execute<F>(&self, query: &Query, mut sink: F) -> Result<()>
    where
        F: FnMut(QueryItem<'a>) -> Result<()>,
    {
        match query {
            Query::ShowTree { max_depth } => {
                let walker = TreeWalker::new(self.view, self.view.header().root_offset())
                    .with_max_depth(*max_depth);
                for step in walker {
                    let (node, depth) = step?;
                    sink(QueryItem::TreeNode {
                        depth,
                        kind: node.kind,
                        name: node.symbol_name,
                        location: self.view.location_of(&node)?,
                    })?;
                }
            }
            Query::FollowSymbol {
                location,
                case_insensitive,
            } => {
                if let Some(node) = self.locate(location, *case_insensitive)? {
                    match resolve(&self.view, &node)? {
                        Some(target) => sink(QueryItem::Location { location: target })?,
                        None => sink(QueryItem::NotFound)?,
                    }
                }
            }
            Query::References {
                location,
                case_insensitive,
            } => {
                if let Some(node) = self.locate(location, *case_insensitive)? {
                    for reference in list_references(&self.view, &node)? {
                        sink(QueryItem::Location {
                            location: reference,
                        })?;
                    }
                }
            }
            Query::ListSymbols {
                pattern,
                match_mode,
                case_insensitive,
            } => {
                let matcher = SymbolMatcher::new(pattern, *match_mode, *case_insensitive);
                for hit in DictionaryScanner::new(self.view, matcher) {
                    let (name, location) = hit?;
                    sink(QueryItem::Symbol { name, location })?;
                }
            }
        }
        Ok(())
    }

    /// Execute `query` and collect its items.
    pub fn collect(&self, query: &Query) -> Result<Vec<QueryItem<'a>>> {
        let mut items = Vec::new();
        self.execute(query, |item| {
            items.push(item);
            Ok(())
        })?;
        Ok(items)
    }

    fn locate(&self, location: &str, case_insensitive: bool) -> Result<Option<Node<'a>>> {
        match self.view.find_by_location(location, case_insensitive)? {
            Some(offset) => self.view.node(offset).map(Some),
            None => {
                tracing::warn!("No node at location {}", location);
                Ok(None)
            }
        }
    }
}
