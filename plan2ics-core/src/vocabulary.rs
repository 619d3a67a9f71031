//! Recognized book names.
//!
//! Plans in the wild spell some books more than one way, so both forms are
//! kept for Psalms, Acts and Song of Songs. Multi-word names are stored with
//! single spaces, exactly as the tokenizer joins its window.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Canonical book names, in canonical order.
const BOOK_NAMES: &[&str] = &[
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Tobit",
    "Judith",
    "Esther",
    "1 Maccabees",
    "2 Maccabees",
    "Job",
    "Psalms",
    "Psalm",
    "Proverbs",
    "Ecclesiastes",
    "Song of Songs",
    "Song of Solomon",
    "Wisdom",
    "Sirach",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Baruch",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Acts of the Apostles",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

static STANDARD: Lazy<BookVocabulary> = Lazy::new(|| BookVocabulary::from_names(BOOK_NAMES));

/// An immutable set of book names.
#[derive(Debug, Clone)]
pub struct BookVocabulary {
    names: HashSet<String>,
    longest_name_words: usize,
}

impl BookVocabulary {
    /// The built-in English vocabulary, shared for the life of the process.
    pub fn standard() -> &'static BookVocabulary {
        &STANDARD
    }

    /// Build a vocabulary from arbitrary names. Duplicates collapse.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: HashSet<String> = names
            .into_iter()
            .map(|name| name.as_ref().split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|name| !name.is_empty())
            .collect();

        let longest_name_words = names
            .iter()
            .map(|name| name.split(' ').count())
            .max()
            .unwrap_or(0);

        Self {
            names,
            longest_name_words,
        }
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.names.contains(candidate)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Word count of the longest entry. No window wider than this can match.
    pub fn longest_name_words(&self) -> usize {
        self.longest_name_words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
