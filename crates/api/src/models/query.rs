use serde::{Deserialize, Serialize};

/// How a search pattern is matched against dictionary symbol names.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Substring containment.
    #[default]
    Anywhere,
    /// Prefix match over the pattern's length.
    StartsWith,
    /// Exact equality.
    CompleteSymbol,
}

/// A validated request against a symbol index.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Query {
    /// Print the whole node forest starting at the root.
    ShowTree {
        /// Children deeper than this are not visited.
        max_depth: Option<usize>,
    },
    /// Resolve the occurrence at `location` to its paired declaration/definition.
    FollowSymbol {
        location: String,
        case_insensitive: bool,
    },
    /// List the references recorded under the node at `location`.
    References {
        location: String,
        case_insensitive: bool,
    },
    /// Search the symbol dictionary. An empty pattern lists everything.
    ListSymbols {
        pattern: String,
        match_mode: MatchMode,
        case_insensitive: bool,
    },
}
