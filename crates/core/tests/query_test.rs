use chrono::NaiveDateTime;
use openhours_core::errors::HoursError;
use openhours_core::hours::HoursParser;
use openhours_core::query::{parse_datetime, QueryService};
use openhours_core::schedule::{Schedule, ScheduleEntry};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn fixture_schedule() -> Schedule {
    let parser = HoursParser::new();
    let mut schedule = Schedule::new();
    schedule.put(
        "Tupelo Honey",
        parser
            .parse_cell("Mon-Sat 11:30 am - 11 pm, Sun 10 am - 9 pm")
            .unwrap(),
    );
    schedule.put(
        "Night Owl Diner",
        parser.parse_cell("Mon-Sun 11 pm - 2 am").unwrap(),
    );
    schedule.put(
        "Weekend Brunch Co",
        parser.parse_cell("Sat-Sun 9 am - 2 pm").unwrap(),
    );
    schedule
}

#[rstest]
#[case("2025-05-19 09:14")]
#[case("2025-05-19T09:14")]
#[case("2025-05-19 09:14:00")]
#[case("05/19/2025 09:14")]
fn test_parse_datetime_accepts_common_shapes(#[case] input: &str) {
    let dt = parse_datetime(input).unwrap();
    assert_eq!(
        dt,
        NaiveDateTime::parse_from_str("2025-05-19 09:14", "%Y-%m-%d %H:%M").unwrap()
    );
}

#[test]
fn test_parse_datetime_bare_date_is_midnight() {
    let dt = parse_datetime("2025-05-19").unwrap();
    assert_eq!(dt.format("%H:%M").to_string(), "00:00");
}

#[rstest]
#[case("2025-05-19 24:00")]
#[case("2025-13-01 10:00")]
#[case("next tuesday")]
#[case("")]
fn test_parse_datetime_rejects_invalid_input(#[case] input: &str) {
    assert!(matches!(
        parse_datetime(input),
        Err(HoursError::InvalidDateTime(_))
    ));
}

// 2025-05-19 is a Monday.
#[test]
fn test_closed_before_opening() {
    let service = QueryService::new(fixture_schedule());
    assert_eq!(service.query("2025-05-19 09:14").unwrap(), Vec::<String>::new());
}

#[test]
fn test_open_at_noon_on_monday() {
    let service = QueryService::new(fixture_schedule());
    assert_eq!(
        service.query("2025-05-19 12:00").unwrap(),
        vec!["Tupelo Honey".to_string()]
    );
}

#[test]
fn test_overnight_entry_matches_past_midnight() {
    let service = QueryService::new(fixture_schedule());
    // 1 am on Tuesday falls inside Monday night's 11 pm - 2 am span.
    assert_eq!(
        service.query("2025-05-20 01:00").unwrap(),
        vec!["Night Owl Diner".to_string()]
    );
}

#[test]
fn test_results_follow_insertion_order() {
    let service = QueryService::new(fixture_schedule());
    // Saturday 11:45 pm: Tupelo Honey is still open and the diner has
    // opened; names come back in data-file row order.
    assert_eq!(
        service.query("2025-05-24 23:45").unwrap(),
        vec!["Night Owl Diner".to_string()]
    );
    assert_eq!(
        service.query("2025-05-24 13:00").unwrap(),
        vec![
            "Tupelo Honey".to_string(),
            "Weekend Brunch Co".to_string()
        ]
    );
}

#[test]
fn test_no_duplicate_names_for_overlapping_entries() {
    let parser = HoursParser::new();
    let mut schedule = Schedule::new();
    schedule.put(
        "Always Open",
        parser
            .parse_cell("Mon-Sun 12 am - 11 pm, Mon-Fri 9 am - 5 pm")
            .unwrap(),
    );
    let service = QueryService::new(schedule);
    assert_eq!(
        service.query("2025-05-19 10:00").unwrap(),
        vec!["Always Open".to_string()]
    );
}

#[test]
fn test_malformed_entry_is_skipped_not_fatal() {
    let mut schedule = Schedule::new();
    schedule.put(
        "Broken Clock Cafe",
        vec![ScheduleEntry {
            days: (0u8..7).collect(),
            hours: "eleven - noonish".to_string(),
        }],
    );
    schedule.put(
        "Reliable Bistro",
        HoursParser::new().parse_cell("Mon-Sun 9 am - 5 pm").unwrap(),
    );
    let service = QueryService::new(schedule);
    assert_eq!(
        service.query("2025-05-19 10:00").unwrap(),
        vec!["Reliable Bistro".to_string()]
    );
}

#[test]
fn test_repeated_queries_are_idempotent() {
    let service = QueryService::new(fixture_schedule());
    let first = service.query("2025-05-24 13:00").unwrap();
    let second = service.query("2025-05-24 13:00").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_duplicate_name_overwrites_prior_entries() {
    let parser = HoursParser::new();
    let mut schedule = Schedule::new();
    schedule.put("Twice Listed", parser.parse_cell("Mon-Sun 9 am - 5 pm").unwrap());
    schedule.put("Twice Listed", parser.parse_cell("Sat 9 am - 5 pm").unwrap());
    assert_eq!(schedule.len(), 1);

    let service = QueryService::new(schedule);
    // Monday no longer matches after the overwrite.
    assert_eq!(service.query("2025-05-19 10:00").unwrap(), Vec::<String>::new());
    assert_eq!(
        service.query("2025-05-24 10:00").unwrap(),
        vec!["Twice Listed".to_string()]
    );
}
