//! Tag-to-tag transition counting.
//!
//! Counts are keyed destination-first (`current -> previous -> count`), which
//! is the orientation the per-tag totals are derived from.

use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::corpus::Sentence;

/// Number of times each tag was the destination of a transition.
pub type TagTotals = BTreeMap<String, usize>;

/// One observed predecessor of a destination tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredecessorCount<'a> {
    pub previous: &'a str,
    pub count: usize,
}

/// Adjacent tag pair counts, grouped by destination tag.
///
/// Entries are created on first observation, so every stored count is at
/// least 1 and each predecessor appears once per destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionCounts {
    table: BTreeMap<String, BTreeMap<String, usize>>,
}

impl TransitionCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one `previous -> current` transition.
    pub fn record(&mut self, previous: &str, current: &str) {
        self.add(previous, current, 1);
    }

    fn add(&mut self, previous: &str, current: &str, count: usize) {
        if count == 0 {
            return;
        }
        match self.table.get_mut(current) {
            Some(predecessors) => match predecessors.get_mut(previous) {
                Some(existing) => *existing += count,
                None => {
                    predecessors.insert(previous.to_string(), count);
                }
            },
            None => {
                let mut predecessors = BTreeMap::new();
                predecessors.insert(previous.to_string(), count);
                self.table.insert(current.to_string(), predecessors);
            }
        }
    }

    /// Number of times `previous` was immediately followed by `current`.
    pub fn count(&self, previous: &str, current: &str) -> usize {
        self.table
            .get(current)
            .and_then(|predecessors| predecessors.get(previous))
            .copied()
            .unwrap_or(0)
    }

    /// The predecessor records of `current`, empty if it was never a destination.
    pub fn predecessors(&self, current: &str) -> Vec<PredecessorCount<'_>> {
        self.table
            .get(current)
            .map(|predecessors| {
                predecessors
                    .iter()
                    .map(|(previous, &count)| PredecessorCount {
                        previous: previous.as_str(),
                        count,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Tags observed as the destination of at least one transition.
    pub fn destinations(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    /// Number of distinct destination tags.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Sum of every transition count.
    pub fn total(&self) -> usize {
        self.table
            .values()
            .flat_map(|predecessors| predecessors.values())
            .sum()
    }

    /// Per-destination sum of transition counts.
    pub fn tag_totals(&self) -> TagTotals {
        self.table
            .iter()
            .map(|(current, predecessors)| {
                (current.clone(), predecessors.values().sum::<usize>())
            })
            .collect()
    }

    /// Folds another table into this one, summing matching pairs.
    pub fn merge(&mut self, other: TransitionCounts) {
        for (current, predecessors) in other.table {
            for (previous, count) in predecessors {
                self.add(&previous, &current, count);
            }
        }
    }

    fn record_sentence(&mut self, sentence: &Sentence) {
        // A one-word sentence has no windows and contributes nothing.
        for pair in sentence.windows(2) {
            self.record(&pair[0].tag, &pair[1].tag);
        }
    }
}

/// Counts every adjacent `previous -> current` tag pair in the corpus.
pub fn count_transitions(corpus: &[Sentence]) -> TransitionCounts {
    let mut counts = TransitionCounts::new();
    for sentence in corpus {
        counts.record_sentence(sentence);
    }
    counts
}

/// Same result as [`count_transitions`], computed on the rayon thread pool.
///
/// Each worker folds its sentences into a private table; the partial tables
/// are then reduced with [`TransitionCounts::merge`].
#[cfg(feature = "parallel")]
pub fn count_transitions_parallel(corpus: &[Sentence]) -> TransitionCounts {
    corpus
        .par_iter()
        .fold(TransitionCounts::new, |mut counts, sentence| {
            counts.record_sentence(sentence);
            counts
        })
        .reduce(TransitionCounts::new, |mut left, right| {
            left.merge(right);
            left
        })
}

/// Total number of transitions across all destination tags.
pub fn total_transitions(counts: &TransitionCounts) -> usize {
    counts.total()
}

/// Number of times each tag was transitioned into.
pub fn tag_totals(counts: &TransitionCounts) -> TagTotals {
    counts.tag_totals()
}
