use std::collections::BTreeMap;

use crate::corpus::Sentence;
use crate::error::{Error, Result};

/// Number of sentences starting with each tag.
pub type InitialStateCounts = BTreeMap<String, usize>;

/// Probability that a sentence starts with each tag.
pub type InitialStateProbabilities = BTreeMap<String, f64>;

/// Counts the tag of the first word of every sentence.
///
/// # Errors
///
/// - [`Error::EmptySentence`] if a sentence has no words.
/// - [`Error::InvalidTag`] if a sentence-initial tag is not exactly
///   `tag_width` characters wide.
pub fn count_initial_states(corpus: &[Sentence], tag_width: usize) -> Result<InitialStateCounts> {
    let mut counts = InitialStateCounts::new();

    for (index, sentence) in corpus.iter().enumerate() {
        let first = sentence.first().ok_or(Error::EmptySentence(index))?;

        let width = first.tag.chars().count();
        if width != tag_width {
            return Err(Error::InvalidTag {
                sentence: index,
                tag: first.tag.clone(),
                width,
                expected: tag_width,
            });
        }

        *counts.entry(first.tag.clone()).or_insert(0) += 1;
    }

    Ok(counts)
}

/// Converts initial-state counts into probabilities by dividing by `total`.
///
/// `total` must be the sentence count the counts were validated against.
///
/// # Errors
///
/// Returns [`Error::EmptyCorpus`] if `total` is zero.
pub fn initial_state_probabilities(
    counts: &InitialStateCounts,
    total: usize,
) -> Result<InitialStateProbabilities> {
    if total == 0 {
        return Err(Error::EmptyCorpus);
    }

    let total = total as f64;
    Ok(counts
        .iter()
        .map(|(tag, &count)| (tag.clone(), count as f64 / total))
        .collect())
}
