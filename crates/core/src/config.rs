use crate::error::{Result, RtscopeError};
use rtscope_api::{MatchMode, Query};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    ShowTree,
    FollowSymbol(String),
    References(String),
    ListSymbols(String),
}

impl Mode {
    fn name(&self) -> &'static str {
        match self {
            Mode::ShowTree => "print-tree",
            Mode::FollowSymbol(_) => "follow-symbol",
            Mode::References(_) => "references",
            Mode::ListSymbols(_) => "list-symbols",
        }
    }
}

/// Query options as collected from the command line, validated into a [`Query`].
///
/// Exactly one mode must be chosen. A non-default match mode is only valid with
/// symbol listing.
#[derive(Debug, Clone, Default)]
pub struct QueryConfig {
    mode: Option<Mode>,
    match_mode: Option<MatchMode>,
    case_insensitive: bool,
    max_depth: Option<usize>,
}

impl QueryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_tree(&mut self) -> Result<&mut Self> {
        self.set_mode(Mode::ShowTree)
    }

    pub fn follow_symbol(&mut self, location: impl Into<String>) -> Result<&mut Self> {
        self.set_mode(Mode::FollowSymbol(location.into()))
    }

    pub fn references(&mut self, location: impl Into<String>) -> Result<&mut Self> {
        self.set_mode(Mode::References(location.into()))
    }

    pub fn list_symbols(&mut self, pattern: impl Into<String>) -> Result<&mut Self> {
        self.set_mode(Mode::ListSymbols(pattern.into()))
    }

    pub fn match_mode(&mut self, mode: MatchMode) -> Result<&mut Self> {
        if mode == MatchMode::Anywhere {
            return Ok(self);
        }
        if let Some(existing) = self.match_mode {
            return Err(RtscopeError::Config(format!(
                "conflicting match modes: {:?} and {:?}",
                existing, mode
            )));
        }
        self.match_mode = Some(mode);
        Ok(self)
    }

    pub fn case_insensitive(&mut self, enabled: bool) -> &mut Self {
        self.case_insensitive = enabled;
        self
    }

    pub fn max_depth(&mut self, depth: Option<usize>) -> &mut Self {
        self.max_depth = depth;
        self
    }

    pub fn build(&self) -> Result<Query> {
        let Some(mode) = &self.mode else {
            return Err(RtscopeError::Config("no query mode selected".to_string()));
        };
        if self.match_mode.is_some() && !matches!(mode, Mode::ListSymbols(_)) {
            return Err(RtscopeError::Config(format!(
                "match modes only apply to list-symbols, not {}",
                mode.name()
            )));
        }
        if self.max_depth.is_some() && *mode != Mode::ShowTree {
            return Err(RtscopeError::Config(format!(
                "max depth only applies to print-tree, not {}",
                mode.name()
            )));
        }

        let case_insensitive = self.case_insensitive;
        let query = match mode {
            Mode::ShowTree => Query::ShowTree {
                max_depth: self.max_depth,
            },
            Mode::FollowSymbol(location) => Query::FollowSymbol {
                location: require_location(location, mode)?,
                case_insensitive,
            },
            Mode::References(location) => Query::References {
                location: require_location(location, mode)?,
                case_insensitive,
            },
            Mode::ListSymbols(pattern) => Query::ListSymbols {
                pattern: pattern.clone(),
                match_mode: self.match_mode.unwrap_or_default(),
                case_insensitive,
            },
        };
        Ok(query)
    }

    fn set_mode(&mut self, mode: Mode) -> Result<&mut Self> {
        if let Some(existing) = &self.mode {
            return Err(RtscopeError::Config(format!(
                "conflicting modes: {} and {}",
                existing.name(),
                mode.name()
            )));
        }
        self.mode = Some(mode);
        Ok(self)
    }
}

fn require_location(location: &str, mode: &Mode) -> Result<String> {
    if location.is_empty() {
        return Err(RtscopeError::Config(format!(
            "{} needs a location such as /tmp/main.cpp:32:1",
            mode.name()
        )));
    }
    Ok(location.to_string())
}
