use std::path::Path;

use crate::config::EstimatorConfig;
use crate::corpus::{load_tagged_corpus, word_count, Sentence};
use crate::error::{Result, ValidationFailure};

use super::initial_state::{
    count_initial_states, initial_state_probabilities, InitialStateCounts,
    InitialStateProbabilities,
};
use super::transition::{count_transitions, TagTotals, TransitionCounts};
use super::validation::{check_transition_total, is_initial_count_consistent};

/// Validated HMM tables estimated from one corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct HmmEstimate {
    pub initial_state_counts: InitialStateCounts,
    pub initial_state_probabilities: InitialStateProbabilities,
    pub transition_counts: TransitionCounts,
    /// Per-destination transition totals, the denominators for turning
    /// transition counts into probabilities.
    pub tag_totals: TagTotals,
    pub total_transitions: usize,
    pub sentence_count: usize,
    pub word_count: usize,
}

/// Estimates initial-state and transition tables from a tagged corpus.
///
/// Each check runs as soon as the data it covers has been produced, and the
/// first failure aborts the estimation.
///
/// # Errors
///
/// - [`Error::EmptySentence`](crate::Error::EmptySentence) or
///   [`Error::InvalidTag`](crate::Error::InvalidTag) from initial-state counting.
/// - [`Error::ValidationFailed`](crate::Error::ValidationFailed) if the
///   initial-state counts or the transition total do not reconcile with the
///   corpus.
/// - [`Error::EmptyCorpus`](crate::Error::EmptyCorpus) if the corpus has no
///   sentences.
pub fn estimate(corpus: &[Sentence], config: &EstimatorConfig) -> Result<HmmEstimate> {
    let sentence_count = corpus.len();

    let initial_state_counts = count_initial_states(corpus, config.tag_width)?;
    if !is_initial_count_consistent(corpus, &initial_state_counts) {
        let counted: usize = initial_state_counts.values().sum();
        log::warn!(
            "initial-state counts ({counted}) do not match sentence count ({sentence_count})"
        );
        return Err(ValidationFailure::InitialStateMismatch {
            sentences: sentence_count,
            counted,
        }
        .into());
    }
    let initial_state_probabilities =
        initial_state_probabilities(&initial_state_counts, sentence_count)?;
    log::debug!(
        "{} distinct sentence-initial tags over {sentence_count} sentences",
        initial_state_counts.len()
    );

    let transition_counts = transition_counts(corpus, config);
    let total_transitions = transition_counts.total();
    if let Err(err) = check_transition_total(corpus, total_transitions) {
        log::warn!("transition cross-check rejected the counts: {err}");
        return Err(err);
    }
    let tag_totals = transition_counts.tag_totals();

    let word_count = word_count(corpus);
    log::info!(
        "estimated HMM tables: {sentence_count} sentences, {word_count} words, \
         {total_transitions} transitions into {} tags",
        tag_totals.len()
    );

    Ok(HmmEstimate {
        initial_state_counts,
        initial_state_probabilities,
        transition_counts,
        tag_totals,
        total_transitions,
        sentence_count,
        word_count,
    })
}

/// Loads the corpus at `path` and estimates from it.
pub fn load_and_estimate(path: &Path, config: &EstimatorConfig) -> Result<HmmEstimate> {
    let corpus = load_tagged_corpus(path)?;
    estimate(&corpus, config)
}

#[cfg(feature = "parallel")]
fn transition_counts(corpus: &[Sentence], config: &EstimatorConfig) -> TransitionCounts {
    if config.parallel {
        super::transition::count_transitions_parallel(corpus)
    } else {
        count_transitions(corpus)
    }
}

#[cfg(not(feature = "parallel"))]
fn transition_counts(corpus: &[Sentence], config: &EstimatorConfig) -> TransitionCounts {
    if config.parallel {
        log::debug!("parallel counting requested without the `parallel` feature");
    }
    count_transitions(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::tagging::test_support::{dog_cat_corpus, random_corpus, sentence};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_dog_cat_scenario() {
        let corpus = dog_cat_corpus();
        let model = estimate(&corpus, &EstimatorConfig::default()).unwrap();

        assert_eq!(model.initial_state_counts.len(), 1);
        assert_eq!(model.initial_state_counts["NN"], 2);
        assert_eq!(model.initial_state_probabilities.len(), 1);
        assert_relative_eq!(model.initial_state_probabilities["NN"], 1.0);

        assert_eq!(model.transition_counts.len(), 1);
        assert_eq!(model.transition_counts.count("NN", "VB"), 2);

        assert_eq!(model.word_count, 4);
        assert_eq!(model.sentence_count, 2);
        assert_eq!(model.total_transitions, 2);
        assert_eq!(model.tag_totals.len(), 1);
        assert_eq!(model.tag_totals["VB"], 2);
    }

    #[test]
    fn test_invalid_tag_aborts() {
        let corpus = vec![
            sentence(&[("NN", "dog"), ("VB", "runs")]),
            sentence(&[("N", "cat"), ("VB", "sleeps")]),
        ];
        let err = estimate(&corpus, &EstimatorConfig::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidTag { sentence: 1, .. }));
    }

    #[test]
    fn test_empty_corpus_aborts() {
        let err = estimate(&[], &EstimatorConfig::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyCorpus));
    }

    #[test]
    fn test_single_word_sentences() {
        let corpus = vec![sentence(&[("NN", "yes")]), sentence(&[("UH", "no")])];
        let model = estimate(&corpus, &EstimatorConfig::default()).unwrap();
        assert!(model.transition_counts.is_empty());
        assert_eq!(model.total_transitions, 0);
        assert!(model.tag_totals.is_empty());
        assert_relative_eq!(model.initial_state_probabilities["NN"], 0.5);
    }

    #[test]
    fn test_random_corpora_properties() {
        for seed in 0..25 {
            let corpus = random_corpus(seed, 250, 18);
            let model = estimate(&corpus, &EstimatorConfig::default()).unwrap();

            assert_eq!(
                model.initial_state_counts.values().sum::<usize>(),
                corpus.len()
            );
            assert_abs_diff_eq!(
                model.initial_state_probabilities.values().sum::<f64>(),
                1.0,
                epsilon = 1e-9
            );
            let expected: usize = corpus.iter().map(|s| s.len() - 1).sum();
            assert_eq!(model.total_transitions, expected);
            assert_eq!(model.tag_totals.values().sum::<usize>(), expected);
        }
    }

    #[test]
    fn test_estimation_is_idempotent() {
        let corpus = random_corpus(42, 500, 25);
        let config = EstimatorConfig::default();
        let first = estimate(&corpus, &config).unwrap();
        let second = estimate(&corpus, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_config_gives_same_model() {
        let corpus = random_corpus(3, 800, 20);
        let sequential = estimate(&corpus, &EstimatorConfig::new()).unwrap();
        let parallel = estimate(&corpus, &EstimatorConfig::new().with_parallel(true)).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_load_and_estimate() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "dog/NN runs/VB").unwrap();
        writeln!(file, "cat/NN sleeps/VB").unwrap();
        file.flush().unwrap();

        let model = load_and_estimate(file.path(), &EstimatorConfig::default()).unwrap();
        assert_eq!(model.sentence_count, 2);
        assert_eq!(model.tag_totals["VB"], 2);
    }
}
