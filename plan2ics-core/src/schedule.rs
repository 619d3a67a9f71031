//! Placement of plan days on the calendar.

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use uuid::Uuid;

use crate::config::{PlanConfig, UidStrategy};
use crate::description::{LinkBuilder, render_description};
use crate::plan::{DayEntry, Plan};

/// A plan day with everything needed to write its calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledDay {
    pub day: u32,
    pub uid: String,
    /// First day of the all-day event
    pub start: NaiveDate,
    /// Exclusive end, the day after `start`
    pub end: NaiveDate,
    pub summary: String,
    pub description: String,
}

impl ScheduledDay {
    pub fn new(entry: &DayEntry, config: &PlanConfig) -> Self {
        let links = LinkBuilder::new(&config.link_base, &config.translation);
        let (start, end) = day_dates(config.start_date, entry.day);

        Self {
            day: entry.day,
            uid: event_uid(config.uid_strategy, &config.calendar_name, entry.day),
            start,
            end,
            summary: summary(entry.day, &entry.period),
            description: render_description(&entry.readings, &links),
        }
    }
}

/// Schedule every day of `plan`, in plan order.
pub fn schedule(plan: &Plan, config: &PlanConfig) -> Vec<ScheduledDay> {
    plan.days
        .iter()
        .map(|entry| ScheduledDay::new(entry, config))
        .collect()
}

/// Start and exclusive end dates of a 1-based plan day.
pub fn day_dates(start_date: NaiveDate, day: u32) -> (NaiveDate, NaiveDate) {
    let offset = i64::from(day.max(1)) - 1;
    let start = start_date + Duration::days(offset);
    (start, start + Duration::days(1))
}

pub fn event_uid(strategy: UidStrategy, calendar_name: &str, day: u32) -> String {
    match strategy {
        UidStrategy::Stable => {
            let name = format!("{calendar_name}/day/{day}");
            Uuid::new_v5(&Uuid::NAMESPACE_URL, name.as_bytes()).to_string()
        }
        UidStrategy::Random => Uuid::new_v4().to_string(),
    }
}

pub fn summary(day: u32, period: &str) -> String {
    if period.is_empty() {
        format!("Day {day}")
    } else {
        format!("Day {day}: {period}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::Reading;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_one_starts_on_start_date() {
        assert_eq!(
            day_dates(date(2021, 1, 1), 1),
            (date(2021, 1, 1), date(2021, 1, 2))
        );
    }

    #[test]
    fn later_days_cross_month_boundaries() {
        assert_eq!(
            day_dates(date(2021, 1, 1), 32),
            (date(2021, 2, 1), date(2021, 2, 2))
        );
        assert_eq!(
            day_dates(date(2021, 1, 1), 365),
            (date(2021, 12, 31), date(2022, 1, 1))
        );
    }

    #[test]
    fn leap_year_includes_february_29() {
        assert_eq!(
            day_dates(date(2024, 1, 1), 60),
            (date(2024, 2, 29), date(2024, 3, 1))
        );
    }

    #[test]
    fn stable_uids_repeat_across_runs_and_differ_per_day() {
        let a = event_uid(UidStrategy::Stable, "Bible in a Year", 1);
        let b = event_uid(UidStrategy::Stable, "Bible in a Year", 1);
        let c = event_uid(UidStrategy::Stable, "Bible in a Year", 2);
        let d = event_uid(UidStrategy::Stable, "Chronological", 1);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn random_uids_differ() {
        assert_ne!(
            event_uid(UidStrategy::Random, "x", 1),
            event_uid(UidStrategy::Random, "x", 1)
        );
    }

    #[test]
    fn summary_includes_period_when_known() {
        assert_eq!(summary(3, "Early World"), "Day 3: Early World");
        assert_eq!(summary(3, ""), "Day 3");
    }

    #[test]
    fn scheduled_day_combines_entry_and_config() {
        let entry = DayEntry {
            day: 2,
            period: "Early World".to_string(),
            readings: vec![Reading::with_passages("Genesis", ["3"])],
            line: 3,
        };
        let config = PlanConfig::default();

        let scheduled = ScheduledDay::new(&entry, &config);

        assert_eq!(scheduled.start, date(2021, 1, 2));
        assert_eq!(scheduled.end, date(2021, 1, 3));
        assert_eq!(scheduled.summary, "Day 2: Early World");
        assert!(scheduled.description.starts_with("Genesis 3<br><br><a href="));
        assert_eq!(scheduled.uid, event_uid(UidStrategy::Stable, "Bible in a Year", 2));
    }
}
