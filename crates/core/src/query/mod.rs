pub mod dictionary;
pub mod engine;
pub mod matcher;
pub mod references;
pub mod resolver;
pub mod walker;

pub use dictionary::DictionaryScanner;
pub use engine::QueryEngine;
pub use matcher::SymbolMatcher;
pub use references::list_references;
pub use resolver::resolve;
pub use walker::TreeWalker;
