///
/// A pattern matcher fed one text byte at a time.
/// Both scan strategies (KMP and the finite automaton) implement this, so the
/// caller can drive either one over a text without knowing which is which.
pub trait Matcher {
    // This function is called for each byte of the text
    //   `el` contains the value of the byte
    //   `pos` contains its position in the text
    // It returns the starting position of an occurrence that completes on
    // this byte, or None. Overlapping occurrences are reported too, so the
    // same matcher keeps being fed after a match.
    fn sequel(&mut self, el: u8, pos: usize) -> Option<usize>;

    ///
    /// Length of the pattern this matcher was built from
    fn pattern_len(&self) -> usize;

    ///
    /// Forget all progress, as if no byte had been fed yet
    fn reset(&mut self);
}
