//! byte_pattern_search locates every occurrence of a fixed byte pattern in a
//! text held in memory, with the scan strategy of your choice : the
//! Knuth-Morris-Pratt prefix-function scan, or a finite automaton built
//! entirely from the pattern. Both report the same positions, overlapping
//! occurrences included ; the automaton pays a bigger build (one transition
//! row of 256 entries per pattern byte) for the simplest possible scan loop.
//!
//! Example :
//! ```
//! use byte_pattern_search::search_kmp;
//!
//! let positions = search_kmp(b"aa", b"aaaa").unwrap();
//! assert_eq!(positions, vec![0, 1, 2]);
//! ```
//!
//! Everything works on raw bytes : no decoding, no Unicode semantics.
//!
//! To debug purpose, add dependencies "log"
//!
pub mod automaton_matcher;
pub mod error;
pub mod kmp_matcher;
pub mod match_iter;
pub mod matcher;
pub mod prefix_table;
pub mod search;
pub mod transition_table;

pub use automaton_matcher::AutomatonMatcher;
pub use error::PatternError;
pub use kmp_matcher::KmpMatcher;
pub use match_iter::MatchIter;
pub use matcher::Matcher;
pub use prefix_table::PrefixTable;
pub use search::{search, search_automaton, search_kmp, Algorithm};
pub use transition_table::{TransitionTable, ALPHABET_SZ};
