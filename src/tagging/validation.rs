//! Reconciliation checks between counted tables and corpus structure.

use crate::corpus::{expected_transitions, Sentence};
use crate::error::{Result, ValidationFailure};

use super::initial_state::InitialStateCounts;

/// Whether the initial-state counts cover every sentence exactly once.
pub fn is_initial_count_consistent(corpus: &[Sentence], counts: &InitialStateCounts) -> bool {
    counts.values().sum::<usize>() == corpus.len()
}

/// Checks that `total_transitions` equals `words - sentences`.
///
/// A corpus with more sentences than words can never pass, whatever was
/// counted.
///
/// # Errors
///
/// Returns [`ValidationFailure::MissingTransitions`] on mismatch.
pub fn check_transition_total(corpus: &[Sentence], total_transitions: usize) -> Result<()> {
    let expected = expected_transitions(corpus);
    if expected != total_transitions as isize {
        return Err(ValidationFailure::MissingTransitions {
            expected,
            counted: total_transitions,
        }
        .into());
    }
    Ok(())
}
