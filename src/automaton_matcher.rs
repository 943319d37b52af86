use crate::Matcher;
use crate::PatternError;
use crate::TransitionTable;

///
/// Finite-automaton scan.
/// All the matching logic lives in the transition table : the scan itself is
/// one table lookup per byte, with no fallback loop. Overlaps come out of the
/// table too, since the accepting state transitions like any other.
pub struct AutomatonMatcher {
    table: TransitionTable,
    state: usize,
}

impl AutomatonMatcher {
    ///
    /// Build the matcher, computing the full transition table of the pattern.
    /// An empty pattern is refused.
    pub fn new(pattern: &[u8]) -> Result<Self, PatternError> {
        Ok(Self {
            table: TransitionTable::build(pattern)?,
            state: 0,
        })
    }
}

impl Matcher for AutomatonMatcher {
    fn sequel(&mut self, el: u8, pos: usize) -> Option<usize> {
        self.state = self.table.step(self.state, el);
        if self.state == self.table.accepting_state() {
            Some(pos + 1 - self.pattern_len())
        } else {
            None
        }
    }

    fn pattern_len(&self) -> usize {
        self.table.state_count() - 1
    }

    fn reset(&mut self) {
        self.state = 0;
    }
}
