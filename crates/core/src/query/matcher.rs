use rtscope_api::MatchMode;

/// Decides whether a dictionary name matches a search pattern.
#[derive(Debug, Clone, Copy)]
pub struct SymbolMatcher<'p> {
    pattern: &'p str,
    mode: MatchMode,
    case_insensitive: bool,
}

impl<'p> SymbolMatcher<'p> {
    pub fn new(pattern: &'p str, mode: MatchMode, case_insensitive: bool) -> Self {
        Self {
            pattern,
            mode,
            case_insensitive,
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        let pattern = self.pattern.as_bytes();
        let name = name.as_bytes();
        if pattern.is_empty() {
            return true;
        }
        match self.mode {
            MatchMode::Anywhere => name
                .windows(pattern.len())
                .any(|window| self.bytes_eq(window, pattern)),
            MatchMode::StartsWith => name
                .get(..pattern.len())
                .is_some_and(|prefix| self.bytes_eq(prefix, pattern)),
            MatchMode::CompleteSymbol => self.bytes_eq(name, pattern),
        }
    }

    fn bytes_eq(&self, a: &[u8], b: &[u8]) -> bool {
        if self.case_insensitive {
            a.eq_ignore_ascii_case(b)
        } else {
            a == b
        }
    }
}
