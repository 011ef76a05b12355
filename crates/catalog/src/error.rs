//! Error types produced by the catalog crate.
//!
//! The error surface is deliberately small. A missing source file is the one
//! failure a caller is expected to handle specially (show a terminal error
//! state, never call the matcher); everything else that can go wrong with the
//! source collapses into a single malformed-source variant because no
//! recovery is attempted for it.
//!
//! | Error | Description |
//! |-------|-------------|
//! | [`SourceMissing`](LoadError::SourceMissing) | The source file does not exist or could not be opened |
//! | [`Malformed`](LoadError::Malformed) | Header or row data could not be read as a scheme table |
//!
//! Note that an empty result from a search is never an error; emptiness is a
//! normal outcome and is represented as an empty collection by the matching
//! layer.

use thiserror::Error;

/// Errors that can occur while loading a scheme catalog.
///
/// A failed load is terminal for the session: the caller reports it and does
/// not search. The loader never returns a partially populated catalog; it
/// either produces every row or fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoadError {
    /// The catalog source file cannot be found or opened.
    ///
    /// Carries the path as given by the caller. This is the only failure a
    /// deployment is expected to recover from, typically by pointing the
    /// application at an existing file and reopening the session.
    #[error("catalog source missing: {0}")]
    SourceMissing(String),

    /// The source exists but does not parse as a scheme table.
    ///
    /// Covers a header row missing one of the required columns, rows whose
    /// field count disagrees with the header, and undecodable bytes. The
    /// message names the specific problem for operators; callers treat all
    /// of these the same way they treat [`SourceMissing`](LoadError::SourceMissing).
    #[error("malformed catalog source: {0}")]
    Malformed(String),
}

impl LoadError {
    /// Returns true when the failure is the recoverable missing-source case.
    pub fn is_source_missing(&self) -> bool {
        matches!(self, LoadError::SourceMissing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_lowercase_and_carry_detail() {
        let err = LoadError::SourceMissing("data/schemes.csv".into());
        assert_eq!(err.to_string(), "catalog source missing: data/schemes.csv");
        assert!(err.is_source_missing());

        let err = LoadError::Malformed("missing required column: Benefits".into());
        assert!(err.to_string().contains("missing required column"));
        assert!(!err.is_source_missing());
    }
}
