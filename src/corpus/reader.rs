//! Reader for `word/TAG` corpus files.
//!
//! Each non-blank line is one sentence; tokens are separated by whitespace
//! and split at their last `/`, so words may themselves contain slashes.

use std::fs;
use std::path::Path;

use super::{Corpus, Sentence, TaggedWord};
use crate::error::{Error, Result};

/// Reads and parses the tagged corpus stored at `path`.
pub fn load_tagged_corpus(path: &Path) -> Result<Corpus> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let corpus = parse_corpus(&text)?;
    log::debug!("loaded {} sentences from {}", corpus.len(), path.display());
    Ok(corpus)
}

/// Parses a whole corpus, one sentence per non-blank line.
///
/// # Examples
///
/// ```
/// use pos_hmm::corpus::parse_corpus;
///
/// let corpus = parse_corpus("the/DT dog/NN\n\nand/or/CC cat/NN\n").unwrap();
/// assert_eq!(corpus.len(), 2);
/// assert_eq!(corpus[1][0].word, "and/or");
/// assert_eq!(corpus[1][0].tag, "CC");
/// ```
pub fn parse_corpus(text: &str) -> Result<Corpus> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_sentence(line, i + 1))
        .collect()
}

/// Parses a single line of `word/TAG` tokens. `line_number` is 1-based and
/// only used for error reporting.
pub fn parse_sentence(line: &str, line_number: usize) -> Result<Sentence> {
    line.split_whitespace()
        .map(|token| parse_token(token, line_number))
        .collect()
}

fn parse_token(token: &str, line: usize) -> Result<TaggedWord> {
    match token.rsplit_once('/') {
        Some((word, tag)) if !word.is_empty() && !tag.is_empty() => {
            Ok(TaggedWord::new(tag, word))
        }
        _ => Err(Error::MalformedToken {
            line,
            token: token.to_string(),
        }),
    }
}
