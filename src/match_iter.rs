use crate::Matcher;

///
/// Lazy pass of a matcher over a text, yielding the starting position of each
/// occurrence in ascending order. Dropping it early is fine : the matcher is
/// a plain forward scan with no state outside itself.
pub struct MatchIter<'a, M: Matcher> {
    matcher: M,
    text: &'a [u8],
    next_pos: usize,
}
impl<'a, M: Matcher> MatchIter<'a, M> {
    pub fn new(mut matcher: M, text: &'a [u8]) -> Self {
        matcher.reset();
        Self {
            matcher,
            text,
            next_pos: 0,
        }
    }
}
impl<'a, M: Matcher> Iterator for MatchIter<'a, M> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_pos < self.text.len() {
            let old_val = self.next_pos;
            self.next_pos += 1;
            if let Some(start) = self.matcher.sequel(self.text[old_val], old_val) {
                return Some(start);
            }
        }
        None
    }
}
