//! ICS generation.
//!
//! Turns scheduled plan days into an RFC 5545 calendar with one yearly
//! recurring all-day event per day.

mod generate;

pub use generate::{generate_event, generate_ics, plan_to_ics};
