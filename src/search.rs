use std::str::FromStr;

use crate::AutomatonMatcher;
use crate::KmpMatcher;
use crate::MatchIter;
use crate::PatternError;

///
/// The two scan strategies. A closed set : selection happens by name at the
/// boundary (the CLI), everything after that is a plain enum dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Kmp,
    Automaton,
}

///
/// Parse the names the command line accepts : "KMP" and "FA", any case
impl FromStr for Algorithm {
    type Err = PatternError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name.eq_ignore_ascii_case("KMP") {
            Ok(Algorithm::Kmp)
        } else if name.eq_ignore_ascii_case("FA") {
            Ok(Algorithm::Automaton)
        } else {
            Err(PatternError::UnknownAlgorithm(name.to_string()))
        }
    }
}

///
/// Find every occurrence of `pattern` in `text` with the KMP scan.
/// Positions come back in ascending order, overlaps included.
/// An empty pattern is refused ; a pattern longer than the text just finds
/// nothing.
pub fn search_kmp(pattern: &[u8], text: &[u8]) -> Result<Vec<usize>, PatternError> {
    let matcher = KmpMatcher::new(pattern)?;
    Ok(MatchIter::new(matcher, text).collect())
}

///
/// Same contract as `search_kmp`, with the finite-automaton scan.
/// Both functions return the identical position list for identical inputs.
pub fn search_automaton(pattern: &[u8], text: &[u8]) -> Result<Vec<usize>, PatternError> {
    let matcher = AutomatonMatcher::new(pattern)?;
    Ok(MatchIter::new(matcher, text).collect())
}

///
/// Dispatch on the selected strategy
pub fn search(algorithm: Algorithm, pattern: &[u8], text: &[u8]) -> Result<Vec<usize>, PatternError> {
    let positions = match algorithm {
        Algorithm::Kmp => search_kmp(pattern, text)?,
        Algorithm::Automaton => search_automaton(pattern, text)?,
    };
    #[cfg(feature = "log")]
    log::debug!(
        "{algorithm:?} scan over {} bytes : {} occurrence(s)",
        text.len(),
        positions.len()
    );
    Ok(positions)
}
