use crate::Matcher;
use crate::PatternError;
use crate::PrefixTable;

///
/// Knuth-Morris-Pratt scan.
/// Keeps a count of pattern bytes currently matched ; on a mismatch it falls
/// back through the prefix table, so no text byte is ever examined twice.
#[derive(Debug)]
pub struct KmpMatcher {
    pattern: Vec<u8>,
    prefix_table: PrefixTable,
    matched_sz: usize,
}

impl KmpMatcher {
    ///
    /// Build the matcher, computing the prefix table of the pattern.
    /// An empty pattern is refused.
    pub fn new(pattern: &[u8]) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::EmptyPattern);
        }
        Ok(Self {
            pattern: pattern.to_vec(),
            prefix_table: PrefixTable::build(pattern),
            matched_sz: 0,
        })
    }
}

impl Matcher for KmpMatcher {
    fn sequel(&mut self, el: u8, pos: usize) -> Option<usize> {
        while self.matched_sz > 0 && self.pattern[self.matched_sz] != el {
            self.matched_sz = self.prefix_table.at(self.matched_sz - 1);
        }
        if self.pattern[self.matched_sz] == el {
            self.matched_sz += 1;
        }
        if self.matched_sz == self.pattern.len() {
            // Full pattern matched : report it, then fall back to the longest
            // border so an overlapping occurrence can still be found
            self.matched_sz = self.prefix_table.at(self.matched_sz - 1);
            Some(pos + 1 - self.pattern.len())
        } else {
            None
        }
    }

    fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    fn reset(&mut self) {
        self.matched_sz = 0;
    }
}
