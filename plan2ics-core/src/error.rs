//! Error types for plan2ics.

use thiserror::Error;

/// Errors that can occur while reading a plan or producing a calendar.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid line {line}: expected \"Day <n>\" followed by at least 2 reading tokens. Got: {text}")]
    InvalidLine { line: usize, text: String },

    #[error("Invalid day number on line {line}: {value:?} (expected 1-366)")]
    InvalidDayNumber { line: usize, value: String },

    #[error("Day {day} on line {line} was already listed on line {first_line}")]
    DuplicateDay { line: usize, day: u32, first_line: usize },

    #[error("Line {line} has tokens before any recognized book: {}", .tokens.join(" "))]
    UnmatchedLeadingTokens { line: usize, tokens: Vec<String> },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlanError {
    /// Source line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            PlanError::InvalidLine { line, .. }
            | PlanError::InvalidDayNumber { line, .. }
            | PlanError::DuplicateDay { line, .. }
            | PlanError::UnmatchedLeadingTokens { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type alias for plan2ics operations.
pub type PlanResult<T> = Result<T, PlanError>;
