use super::kind::NodeKind;
use serde::Serialize;
use std::fmt;

/// One result line produced by a query.
///
/// Strings borrow from the index buffer, so items live no longer than the mapped index.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueryItem<'a> {
    TreeNode {
        depth: usize,
        kind: NodeKind,
        name: &'a str,
        location: Option<&'a str>,
    },
    Location {
        location: &'a str,
    },
    NotFound,
    Symbol {
        name: &'a str,
        location: &'a str,
    },
}

impl fmt::Display for QueryItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryItem::TreeNode {
                depth,
                kind,
                name,
                location,
            } => write!(
                f,
                "{:indent$}{} {} {}",
                "",
                kind,
                name,
                location.unwrap_or(""),
                indent = depth * 2
            ),
            QueryItem::Location { location } => f.write_str(location),
            QueryItem::NotFound => f.write_str("Couldn't find it"),
            QueryItem::Symbol { name, location } => write!(f, "{} {}", name, location),
        }
    }
}
