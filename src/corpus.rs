//! Tagged corpus data model.
//!
//! A corpus is an ordered list of sentences, each an ordered list of
//! tag/word pairs. Order inside a sentence defines tag adjacency, so nothing
//! in this crate reorders or mutates a corpus once it has been loaded.

pub mod reader;

pub use reader::{load_tagged_corpus, parse_corpus, parse_sentence};

/// A surface token together with its category tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaggedWord {
    pub tag: String,
    pub word: String,
}

impl TaggedWord {
    /// Creates a new `TaggedWord`.
    pub fn new(tag: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            word: word.into(),
        }
    }
}

/// Ordered tagged words of one sentence.
pub type Sentence = Vec<TaggedWord>;

/// Ordered sentences of a whole data file.
pub type Corpus = Vec<Sentence>;

/// Total number of tagged words across all sentences.
pub fn word_count(corpus: &[Sentence]) -> usize {
    corpus.iter().map(Vec::len).sum()
}

/// Number of adjacent tag pairs the corpus contains.
///
/// A sentence of length `L` has `L - 1` adjacent pairs, so the sum over the
/// corpus is `word_count - sentence_count`. The result is signed: empty
/// sentences can push it below zero, which no transition table can match.
pub fn expected_transitions(corpus: &[Sentence]) -> isize {
    word_count(corpus) as isize - corpus.len() as isize
}
