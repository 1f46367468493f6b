use super::matcher::SymbolMatcher;
use crate::error::Result;
use crate::format::{INT32_WIDTH, offset_field, read_cstr, read_i32};
use crate::index::IndexView;

/// Single pass over the symbol dictionary, yielding `(name, location)` for every
/// occurrence of every matching name.
///
/// Each entry is `name\0` followed by location offsets and a 0 terminator. The whole
/// offset list is consumed for unmatched entries too, so the next entry starts at
/// the right byte. A decode error ends the scan.
pub struct DictionaryScanner<'a, 'p> {
    view: IndexView<'a>,
    matcher: SymbolMatcher<'p>,
    pos: usize,
    remaining: usize,
    current: Option<(&'a str, bool)>,
    failed: bool,
}

impl<'a, 'p> DictionaryScanner<'a, 'p> {
    pub fn new(view: IndexView<'a>, matcher: SymbolMatcher<'p>) -> Self {
        let header = view.header();
        Self {
            pos: header.dictionary_pos,
            remaining: header.dictionary_count,
            view,
            matcher,
            current: None,
            failed: false,
        }
    }

    /// Byte position of the next unread dictionary byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn begin_entry(&mut self) -> Result<()> {
        let name = read_cstr(self.view.bytes(), self.pos)?;
        self.pos += name.len() + 1;
        self.remaining -= 1;
        self.current = Some((name, self.matcher.matches(name)));
        Ok(())
    }

    fn step(&mut self) -> Result<Option<(&'a str, &'a str)>> {
        loop {
            let Some((name, matched)) = self.current else {
                if self.remaining == 0 {
                    return Ok(None);
                }
                self.begin_entry()?;
                continue;
            };

            let raw = read_i32(self.view.bytes(), self.pos)?;
            self.pos += INT32_WIDTH;
            match offset_field(raw)? {
                None => self.current = None,
                Some(location) if matched => {
                    return Ok(Some((name, self.view.string_at(location)?)));
                }
                Some(_) => {}
            }
        }
    }
}

impl<'a> Iterator for DictionaryScanner<'a, '_> {
    type Item = Result<(&'a str, &'a str)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.step() {
            Ok(hit) => hit.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
