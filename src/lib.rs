pub mod config;
pub mod corpus;
pub mod error;
pub mod tagging;

pub use config::EstimatorConfig;
pub use corpus::{Corpus, Sentence, TaggedWord};
pub use error::{Error, Result, ValidationFailure};
pub use tagging::{estimate, load_and_estimate, HmmEstimate, TransitionCounts};
