//! Grouping of day-line tokens into readings.
//!
//! Book names can span several tokens ("1 Samuel", "Song of Songs"), so at
//! every position the tokenizer tries windows of 1, 2, 3... tokens against the
//! vocabulary and takes the first (smallest) window that matches. Tokens that
//! start no book are passages of the current reading.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::reading::Reading;
use crate::vocabulary::BookVocabulary;

/// What to do with tokens that appear before the first recognized book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizeMode {
    /// Keep them as passages of a reading with an empty book.
    #[default]
    Permissive,
    /// Reject the line.
    Strict,
}

/// Tokens that preceded every recognized book on a line (strict mode only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedTokens(pub Vec<String>);

#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    vocabulary: &'a BookVocabulary,
    mode: TokenizeMode,
}

impl<'a> Tokenizer<'a> {
    pub fn new(vocabulary: &'a BookVocabulary) -> Self {
        Self {
            vocabulary,
            mode: TokenizeMode::Permissive,
        }
    }

    pub fn with_mode(mut self, mode: TokenizeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Split `tokens` into readings in discovery order.
    ///
    /// Fails only in strict mode, when tokens precede the first book.
    pub fn tokenize<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<Reading>, UnmatchedTokens> {
        let mut readings = Vec::new();
        let mut current = Reading::default();
        let mut i = 0;

        while i < tokens.len() {
            match self.match_book(tokens, i) {
                Some((book, width)) => {
                    debug!(book = %book, at = i, "matched book");
                    let finished = std::mem::replace(&mut current, Reading::new(book));
                    if finished.has_book() || !finished.passages.is_empty() {
                        readings.push(finished);
                    }
                    i += width;
                }
                None => {
                    current.passages.push(tokens[i].as_ref().to_string());
                    i += 1;
                }
            }
        }

        if current.has_book() || !current.passages.is_empty() {
            readings.push(current);
        }

        if self.mode == TokenizeMode::Strict {
            if let Some(first) = readings.first().filter(|r| !r.has_book()) {
                return Err(UnmatchedTokens(first.passages.clone()));
            }
        }

        Ok(readings)
    }

    /// Smallest window starting at `start` that names a book, with its width.
    fn match_book<S: AsRef<str>>(&self, tokens: &[S], start: usize) -> Option<(String, usize)> {
        let remaining = tokens.len() - start;
        let widest = remaining.min(self.vocabulary.longest_name_words());

        for width in 1..=widest {
            let candidate = tokens[start..start + width]
                .iter()
                .map(|token| token.as_ref())
                .collect::<Vec<_>>()
                .join(" ");
            debug!(candidate = %candidate, "checking book");
            if self.vocabulary.contains(&candidate) {
                return Some((candidate, width));
            }
        }

        None
    }
}

/// Permissive tokenization against `vocabulary`.
pub fn tokenize<S: AsRef<str>>(tokens: &[S], vocabulary: &BookVocabulary) -> Vec<Reading> {
    // Permissive mode never rejects a line
    Tokenizer::new(vocabulary)
        .tokenize(tokens)
        .unwrap_or_default()
}
