pub mod config;
pub mod discovery;
pub mod error;
pub mod format;
pub mod index;
pub mod logging;
pub mod model;
pub mod query;

pub use config::QueryConfig;
pub use error::{Result, RtscopeError};
pub use index::{IndexView, SymbolIndex};
pub use model::Node;
pub use query::QueryEngine;
