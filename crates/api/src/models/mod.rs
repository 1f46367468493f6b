pub mod item;
pub mod kind;
pub mod query;

pub use item::QueryItem;
pub use kind::{NodeKind, UnknownNodeKind};
pub use query::{MatchMode, Query};
