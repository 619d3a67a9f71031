//! Core types for plan2ics.
//!
//! This crate turns a plain-text reading plan into calendar data:
//! - `vocabulary` holds the fixed set of recognized book names
//! - `tokenizer` groups the tokens of a day line into `Reading`s
//! - `plan` walks a whole plan file, tracking the current period label
//! - `schedule` and `description` derive dates, identifiers and event text
//! - `ics` renders the final iCalendar document

pub mod config;
pub mod description;
pub mod error;
pub mod ics;
pub mod plan;
pub mod reading;
pub mod schedule;
pub mod tokenizer;
pub mod vocabulary;

pub use config::{PlanConfig, UidStrategy};
pub use error::{PlanError, PlanResult};
pub use plan::{DayEntry, Plan, parse_plan};
pub use reading::Reading;
pub use schedule::ScheduledDay;
pub use tokenizer::{TokenizeMode, Tokenizer};
pub use vocabulary::BookVocabulary;
