use thiserror::Error;

/// Errors raised by the sequence functions.
///
/// Only the search functions can fail; everything else is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// No element satisfies the predicate.
    ///
    /// Raised by [`first`](crate::first) when the predicate rejects every
    /// element, including when the sequence is empty.
    #[error("no element satisfies the predicate")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
