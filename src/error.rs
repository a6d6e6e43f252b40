//! Error types for corpus loading and HMM estimation.
//!
//! Every variant is fatal: the inputs are deterministic, so nothing here is
//! retried and no partial model is returned alongside an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for estimation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading a tagged corpus or estimating from it.
#[derive(Debug, Error)]
pub enum Error {
    /// A sentence-initial tag does not have the configured width.
    #[error("tag `{tag}` starting sentence {sentence} has width {width}, expected {expected}")]
    InvalidTag {
        sentence: usize,
        tag: String,
        width: usize,
        expected: usize,
    },

    /// A sentence without any tagged words reached a counter.
    #[error("sentence {0} contains no tagged words")]
    EmptySentence(usize),

    /// Normalization was attempted over zero sentences.
    #[error("cannot normalize initial-state counts over an empty corpus")]
    EmptyCorpus,

    /// Counted totals do not reconcile with the corpus structure.
    #[error("validation failed: {0}")]
    ValidationFailed(#[from] ValidationFailure),

    /// A corpus token is not of the form `word/TAG`.
    #[error("malformed token `{token}` on line {line}")]
    MalformedToken { line: usize, token: String },

    /// The corpus file could not be read.
    #[error("failed to read corpus {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The specific reconciliation check that rejected the counts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("{counted} sentence-initial tags counted for {sentences} sentences")]
    InitialStateMismatch { sentences: usize, counted: usize },

    #[error("expected {expected} transitions but counted {counted}")]
    MissingTransitions { expected: isize, counted: usize },
}

impl Error {
    /// Create an IO error for the corpus at `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failure_converts_into_error() {
        let err: Error = ValidationFailure::MissingTransitions {
            expected: 4,
            counted: 3,
        }
        .into();
        assert!(matches!(
            err,
            Error::ValidationFailed(ValidationFailure::MissingTransitions {
                expected: 4,
                counted: 3
            })
        ));
        assert_eq!(
            err.to_string(),
            "validation failed: expected 4 transitions but counted 3"
        );
    }

    #[test]
    fn test_invalid_tag_message() {
        let err = Error::InvalidTag {
            sentence: 0,
            tag: "N".to_string(),
            width: 1,
            expected: 2,
        };
        assert_eq!(
            err.to_string(),
            "tag `N` starting sentence 0 has width 1, expected 2"
        );
    }
}
