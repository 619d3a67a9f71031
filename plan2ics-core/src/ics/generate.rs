//! ICS file generation.

use chrono::{DateTime, NaiveDate, Utc};
use icalendar::{Calendar, Component, Property, ValueType};

use crate::config::PlanConfig;
use crate::error::{PlanError, PlanResult};
use crate::plan::Plan;
use crate::schedule::{ScheduledDay, schedule};

/// Schedule every day of `plan` and render the calendar.
pub fn plan_to_ics(plan: &Plan, config: &PlanConfig, stamp: DateTime<Utc>) -> PlanResult<String> {
    generate_ics(&schedule(plan, config), config, stamp)
}

/// Generate a complete calendar for `days`, stamped with `stamp`.
pub fn generate_ics(
    days: &[ScheduledDay],
    config: &PlanConfig,
    stamp: DateTime<Utc>,
) -> PlanResult<String> {
    for (field, value) in [("calendar_name", &config.calendar_name), ("prodid", &config.prodid)] {
        if value.contains(['\r', '\n']) {
            return Err(PlanError::IcsGenerate(format!(
                "{field} must be a single line, got {value:?}"
            )));
        }
    }

    let mut cal = Calendar::new();
    cal.append_property(Property::new("METHOD", "PUBLISH"));
    cal.append_property(Property::new("X-WR-CALNAME", config.calendar_name.as_str()));

    for day in days {
        cal.push(generate_event(day, config, stamp));
    }

    let cal = cal.done();

    Ok(set_prodid(&cal.to_string(), &config.prodid))
}

/// Build the VEVENT for a single day.
pub fn generate_event(
    day: &ScheduledDay,
    config: &PlanConfig,
    stamp: DateTime<Utc>,
) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&day.uid);
    ics_event.summary(&day.summary);
    ics_event.description(&day.description);

    // DTSTAMP - required by RFC 5545
    ics_event.add_property("DTSTAMP", stamp.format("%Y%m%dT%H%M%SZ").to_string());

    add_date_property(&mut ics_event, "DTSTART", day.start);
    add_date_property(&mut ics_event, "DTEND", day.end);

    // Same day every year
    ics_event.add_property("RRULE", "FREQ=YEARLY");
    ics_event.add_property("STATUS", "CONFIRMED");

    let transp = if config.transparent {
        "TRANSPARENT"
    } else {
        "OPAQUE"
    };
    ics_event.add_property("TRANSP", transp);

    ics_event.done()
}

/// Replace the PRODID written by the icalendar crate with our own
fn set_prodid(ics: &str, prodid: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(prodid);
        } else {
            result.push_str(line);
        }
        result.push_str("\r\n");
    }

    result
}

/// Add an all-day date property (`NAME;VALUE=DATE:YYYYMMDD`)
fn add_date_property(ics_event: &mut icalendar::Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_test_day(day: u32) -> ScheduledDay {
        let start = NaiveDate::from_ymd_opt(2021, 1, day).unwrap();
        ScheduledDay {
            day,
            uid: format!("test-day-{day}@plan2ics"),
            start,
            end: start.succ_opt().unwrap(),
            summary: format!("Day {day}: Early World"),
            description: "Genesis 1<br><br>Psalm 19".to_string(),
        }
    }

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 1, 12, 15, 14, 54).unwrap()
    }

    /// Undo RFC 5545 line folding so assertions can match whole values
    fn unfold(ics: &str) -> String {
        ics.replace("\r\n ", "").replace("\r\n\t", "")
    }

    #[test]
    fn test_generate_ics_calendar_properties() {
        let ics = generate_ics(&[], &PlanConfig::default(), stamp()).unwrap();

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"), "ICS:\n{}", ics);
        assert!(ics.ends_with("END:VCALENDAR\r\n"), "ICS:\n{}", ics);
        assert!(ics.contains("VERSION:2.0"));
        assert!(ics.contains("CALSCALE:GREGORIAN\r\n"), "ICS:\n{}", ics);
        assert_eq!(ics.matches("CALSCALE:").count(), 1);
        assert!(ics.contains("METHOD:PUBLISH"));
        assert!(ics.contains("X-WR-CALNAME:Bible in a Year"));
        assert!(
            ics.contains("PRODID:-//plan2ics//Reading Plan//EN\r\n"),
            "PRODID should be replaced. ICS:\n{}",
            ics
        );
        assert_eq!(ics.matches("PRODID:").count(), 1);
        assert!(!ics.contains("BEGIN:VEVENT"));
    }

    #[test]
    fn test_generate_ics_one_event_per_day() {
        let days: Vec<ScheduledDay> = (1..=3).map(make_test_day).collect();
        let ics = generate_ics(&days, &PlanConfig::default(), stamp()).unwrap();

        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 3);
        assert_eq!(ics.matches("END:VEVENT").count(), 3);

        // Events appear in plan order
        let first = ics.find("UID:test-day-1@plan2ics").unwrap();
        let third = ics.find("UID:test-day-3@plan2ics").unwrap();
        assert!(first < third);
    }

    #[test]
    fn test_generate_event_is_all_day_and_yearly() {
        let ics = generate_ics(&[make_test_day(1)], &PlanConfig::default(), stamp()).unwrap();

        assert!(
            ics.contains("DTSTART;VALUE=DATE:20210101"),
            "DTSTART should have VALUE=DATE parameter. ICS:\n{}",
            ics
        );
        assert!(
            ics.contains("DTEND;VALUE=DATE:20210102"),
            "DTEND should have VALUE=DATE parameter. ICS:\n{}",
            ics
        );
        assert!(ics.contains("RRULE:FREQ=YEARLY"));
        assert!(ics.contains("DTSTAMP:20210112T151454Z"));
        assert!(ics.contains("STATUS:CONFIRMED"));
        assert!(ics.contains("TRANSP:OPAQUE"));
        assert!(ics.contains("SUMMARY:Day 1: Early World"));
    }

    #[test]
    fn test_generate_event_description_survives_folding() {
        let mut day = make_test_day(1);
        day.description = format!("{}<br><br>Psalm 19", "Genesis 1".repeat(20));

        let ics = generate_ics(&[day.clone()], &PlanConfig::default(), stamp()).unwrap();

        assert!(unfold(&ics).contains(&format!("DESCRIPTION:{}", day.description)));
    }

    #[test]
    fn test_generate_event_transparent() {
        let config = PlanConfig {
            transparent: true,
            ..PlanConfig::default()
        };
        let ics = generate_ics(&[make_test_day(1)], &config, stamp()).unwrap();

        assert!(ics.contains("TRANSP:TRANSPARENT"));
        assert!(!ics.contains("TRANSP:OPAQUE"));
    }

    #[test]
    fn test_generate_ics_rejects_multiline_calendar_name() {
        let config = PlanConfig {
            calendar_name: "Bible\nin a Year".to_string(),
            ..PlanConfig::default()
        };
        let err = generate_ics(&[], &config, stamp()).unwrap_err();
        assert!(matches!(err, PlanError::IcsGenerate(_)));
    }
}
