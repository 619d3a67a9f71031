//! Plan file parsing.
//!
//! A plan is a sequence of lines. Lines whose first word is `Day` carry a day
//! number followed by reading tokens; any other non-blank line names the
//! narrative period that applies to the days after it.
//!
//! ```text
//! Early World
//! Day 1 Genesis 1 2 Psalm 19
//! Day 2 Genesis 3 4 Psalm 104
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PlanError, PlanResult};
use crate::reading::Reading;
use crate::tokenizer::{TokenizeMode, Tokenizer, UnmatchedTokens};
use crate::vocabulary::BookVocabulary;

/// Keyword that starts a day line.
pub const DAY_KEYWORD: &str = "Day";

/// Highest accepted day number (a leap year).
pub const MAX_DAY: u32 = 366;

/// Fewest whitespace-separated tokens a day line may have.
const MIN_DAY_LINE_TOKENS: usize = 4;

/// The readings for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    pub day: u32,
    /// Most recent period line seen before this day, empty if none.
    pub period: String,
    pub readings: Vec<Reading>,
    /// 1-based line number in the plan file
    pub line: usize,
}

/// A parsed reading plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub days: Vec<DayEntry>,
}

impl Plan {
    pub fn load(path: &Path, vocabulary: &BookVocabulary, mode: TokenizeMode) -> PlanResult<Self> {
        let content = std::fs::read_to_string(path)?;
        parse_plan(&content, vocabulary, mode)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Period labels in the order the plan enters them.
    pub fn periods(&self) -> Vec<&str> {
        let mut periods: Vec<&str> = Vec::new();
        for day in &self.days {
            if !day.period.is_empty() && periods.last() != Some(&day.period.as_str()) {
                periods.push(&day.period);
            }
        }
        periods
    }
}

/// How a single plan line was classified.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PlanLine<'a> {
    Blank,
    Period(&'a str),
    Day { number: &'a str, tokens: Vec<String> },
}

fn classify(text: &str) -> PlanLine<'_> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return PlanLine::Blank;
    }

    let mut words = trimmed.split_whitespace();
    if words.next() != Some(DAY_KEYWORD) {
        return PlanLine::Period(trimmed);
    }

    let number = words.next().unwrap_or_default();
    let tokens = trimmed
        .split_whitespace()
        .skip(2)
        .map(|token| token.replace(',', ""))
        .filter(|token| !token.is_empty())
        .collect();

    PlanLine::Day { number, tokens }
}

/// Parse a whole plan. The first malformed day line aborts parsing.
pub fn parse_plan(
    content: &str,
    vocabulary: &BookVocabulary,
    mode: TokenizeMode,
) -> PlanResult<Plan> {
    let tokenizer = Tokenizer::new(vocabulary).with_mode(mode);
    let mut period = String::new();
    let mut days = Vec::new();
    // Day number -> line that first listed it
    let mut seen: HashMap<u32, usize> = HashMap::new();

    for (index, text) in content.lines().enumerate() {
        let line = index + 1;

        match classify(text) {
            PlanLine::Blank => {}
            PlanLine::Period(label) => {
                debug!(line, period = label, "entering period");
                period = label.to_string();
            }
            PlanLine::Day { number, tokens } => {
                // "Day", the number, then at least two reading tokens
                if tokens.len() + 2 < MIN_DAY_LINE_TOKENS {
                    return Err(PlanError::InvalidLine {
                        line,
                        text: text.to_string(),
                    });
                }

                let day = parse_day_number(number, line)?;
                if let Some(&first_line) = seen.get(&day) {
                    return Err(PlanError::DuplicateDay {
                        line,
                        day,
                        first_line,
                    });
                }
                seen.insert(day, line);

                let readings = tokenizer
                    .tokenize(&tokens)
                    .map_err(|UnmatchedTokens(tokens)| PlanError::UnmatchedLeadingTokens {
                        line,
                        tokens,
                    })?;

                if let Some(placeholder) = readings.first().filter(|r| !r.has_book()) {
                    warn!(
                        line,
                        day,
                        tokens = %placeholder.passages.join(" "),
                        "tokens before the first recognized book"
                    );
                }

                days.push(DayEntry {
                    day,
                    period: period.clone(),
                    readings,
                    line,
                });
            }
        }
    }

    debug!(days = days.len(), "parsed plan");
    Ok(Plan { days })
}

fn parse_day_number(value: &str, line: usize) -> PlanResult<u32> {
    value
        .parse::<u32>()
        .ok()
        .filter(|day| (1..=MAX_DAY).contains(day))
        .ok_or_else(|| PlanError::InvalidDayNumber {
            line,
            value: value.to_string(),
        })
}
