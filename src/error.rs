use core::fmt;

///
/// Errors that can be raised before a scan starts.
/// A scan itself cannot fail : it is a pure pass over bytes already in memory.
#[derive(Debug, PartialEq, Eq)]
pub enum PatternError {
    ///
    /// The pattern is empty. Rejected before any table is built : an empty
    /// pattern would match everywhere, which is never what the caller wants.
    EmptyPattern,
    ///
    /// Algorithm selection by name received something else than "KMP" or "FA"
    UnknownAlgorithm(String),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::EmptyPattern => write!(f, "empty pattern"),
            PatternError::UnknownAlgorithm(name) => {
                write!(f, "unknown algorithm {name:?}, use \"KMP\" or \"FA\"")
            }
        }
    }
}

impl std::error::Error for PatternError {}
