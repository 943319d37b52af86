use crate::PatternError;
use crate::PrefixTable;

///
/// Number of symbols : the scan works on raw bytes, never on decoded text
pub const ALPHABET_SZ: usize = 256;

///
/// The full transition function of the pattern automaton.
/// States 0..=m count how many pattern bytes the input currently ends with ;
/// state m is the only accepting state. One row of 256 entries per state,
/// stored flat, so a scan step is a single indexed load.
pub struct TransitionTable {
    table: Vec<usize>,
    state_count: usize,
}

impl TransitionTable {
    ///
    /// Build the table for a non-empty pattern.
    /// Row q is the row of the longest border of `pattern[0..q]`, with the
    /// single entry for `pattern[q]` redirected to q+1 : exactly the
    /// "longest suffix that is a prefix" rule, computed in O(m * 256) via
    /// the prefix table instead of re-deriving it per state and symbol.
    pub fn build(pattern: &[u8]) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::EmptyPattern);
        }
        let m = pattern.len();
        let prefix_table = PrefixTable::build(pattern);
        let mut table = vec![0usize; (m + 1) * ALPHABET_SZ];
        table[pattern[0] as usize] = 1;
        for q in 1..=m {
            let border = prefix_table.at(q - 1);
            let (head, tail) = table.split_at_mut(q * ALPHABET_SZ);
            tail[..ALPHABET_SZ]
                .copy_from_slice(&head[border * ALPHABET_SZ..(border + 1) * ALPHABET_SZ]);
            if q < m {
                tail[pattern[q] as usize] = q + 1;
            }
        }
        #[cfg(feature = "log")]
        log::trace!("transition table built : {} states", m + 1);
        Ok(Self {
            table,
            state_count: m + 1,
        })
    }
    ///
    /// Next state from `state` on input byte `el`
    pub fn step(&self, state: usize, el: u8) -> usize {
        self.table[state * ALPHABET_SZ + el as usize]
    }
    ///
    /// Number of states, pattern length + 1
    pub fn state_count(&self) -> usize {
        self.state_count
    }
    ///
    /// The accepting state, reached exactly when an occurrence ends
    pub fn accepting_state(&self) -> usize {
        self.state_count - 1
    }
}
