//! A single scripture reference group.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One book plus the passage tokens that followed it on a day line.
///
/// `book` is empty only for the placeholder that collects tokens seen before
/// the first recognized book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub book: String,
    pub passages: Vec<String>,
}

impl Reading {
    pub fn new(book: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            passages: Vec::new(),
        }
    }

    pub fn with_passages<I, S>(book: impl Into<String>, passages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            book: book.into(),
            passages: passages.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_book(&self) -> bool {
        !self.book.is_empty()
    }

    /// Passages joined the way they are shown to a reader: "1:1-10, 17:1".
    pub fn passage_list(&self) -> String {
        self.passages.join(", ")
    }

    /// The tokens this reading was built from, in input order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.book
            .split(' ')
            .filter(|word| !word.is_empty())
            .chain(self.passages.iter().map(String::as_str))
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.book.is_empty(), self.passages.is_empty()) {
            (false, false) => write!(f, "{} {}", self.book, self.passage_list()),
            (false, true) => f.write_str(&self.book),
            (true, _) => f.write_str(&self.passage_list()),
        }
    }
}

/// Flatten readings back into the token sequence they were parsed from.
pub fn flatten(readings: &[Reading]) -> Vec<String> {
    readings
        .iter()
        .flat_map(Reading::tokens)
        .map(str::to_string)
        .collect()
}
