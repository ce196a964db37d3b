use std::fmt;

/// A `Result` type alias for this crate's `Error` type.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that encapsulates the fallible outcomes of stream operations.
///
/// Most of this crate treats exhaustion as ordinary data (`None`). The
/// variants here exist for callers that would rather propagate those
/// outcomes with `?`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A stream ran dry before the requested number of elements could be
    /// skipped.
    Exhausted {
        /// The number of elements the caller asked to skip.
        requested: usize,
        /// The number of elements that were actually skipped.
        advanced: usize,
    },
    /// A partial comparison found a pair of elements with no ordering
    /// between them.
    Incomparable,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::Exhausted { requested, advanced } => write!(
                f,
                "stream exhausted after {} of {} requested elements",
                advanced, requested
            ),
            Error::Incomparable => {
                write!(f, "sequences contain an incomparable pair of elements")
            }
        }
    }
}

impl std::error::Error for Error {}
