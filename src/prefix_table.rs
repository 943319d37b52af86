///
/// The KMP prefix function of a pattern.
/// Entry `q` holds the length of the longest proper prefix of `pattern[0..=q]`
/// that is also a suffix of it (its longest border). On a mismatch the scan
/// falls back through these values instead of re-reading matched bytes.
#[derive(Debug)]
pub struct PrefixTable {
    table: Vec<usize>,
}

impl PrefixTable {
    ///
    /// Compute the prefix function of a non-empty pattern.
    /// The candidate length `k` only grows by one per position, and every
    /// fallback shrinks it, so the whole loop is O(m).
    pub fn build(pattern: &[u8]) -> Self {
        debug_assert!(!pattern.is_empty());
        let mut table = vec![0usize; pattern.len()];
        let mut k = 0;
        for q in 1..pattern.len() {
            while k > 0 && pattern[k] != pattern[q] {
                k = table[k - 1];
            }
            if pattern[k] == pattern[q] {
                k += 1;
            }
            table[q] = k;
        }
        #[cfg(feature = "log")]
        log::trace!("prefix table of {} bytes : {:?}", pattern.len(), table);
        Self { table }
    }
    ///
    /// Border length at position `q`
    pub fn at(&self, q: usize) -> usize {
        self.table[q]
    }
    ///
    /// Number of entries, equal to the pattern length
    pub fn len(&self) -> usize {
        self.table.len()
    }
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
