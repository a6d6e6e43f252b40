//! First-order HMM parameter estimation for part-of-speech tagging.
//!
//! The pipeline has two independent branches over the same corpus:
//! - initial states: count sentence-initial tags, check they partition the
//!   sentences, normalize into a distribution
//! - transitions: count adjacent `previous -> current` tag pairs, derive
//!   per-destination totals, cross-check against `words - sentences`
//!
//! [`estimate`] runs both branches and fails fast on the first violation.
//!
//! # Examples
//!
//! ```rust
//! use pos_hmm::corpus::TaggedWord;
//! use pos_hmm::{estimate, EstimatorConfig};
//!
//! let corpus = vec![
//!     vec![TaggedWord::new("NN", "dog"), TaggedWord::new("VB", "runs")],
//!     vec![TaggedWord::new("NN", "cat"), TaggedWord::new("VB", "sleeps")],
//! ];
//!
//! let model = estimate(&corpus, &EstimatorConfig::default()).unwrap();
//! assert_eq!(model.initial_state_probabilities["NN"], 1.0);
//! assert_eq!(model.transition_counts.count("NN", "VB"), 2);
//! assert_eq!(model.tag_totals["VB"], 2);
//! ```

pub mod estimator;
pub mod initial_state;
pub mod transition;
pub mod validation;

pub use estimator::{estimate, load_and_estimate, HmmEstimate};
pub use initial_state::{
    count_initial_states, initial_state_probabilities, InitialStateCounts,
    InitialStateProbabilities,
};
#[cfg(feature = "parallel")]
pub use transition::count_transitions_parallel;
pub use transition::{
    count_transitions, tag_totals, total_transitions, PredecessorCount, TagTotals,
    TransitionCounts,
};
pub use validation::{check_transition_total, is_initial_count_consistent};
