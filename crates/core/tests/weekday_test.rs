use openhours_core::errors::HoursError;
use openhours_core::weekday::{weekday_from_name, weekday_set, WeekdaySet};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("mon", 0)]
#[case("monday", 0)]
#[case("tue", 1)]
#[case("tues", 1)]
#[case("tuesday", 1)]
#[case("wed", 2)]
#[case("wednesday", 2)]
#[case("thu", 3)]
#[case("thurs", 3)]
#[case("thursday", 3)]
#[case("fri", 4)]
#[case("friday", 4)]
#[case("sat", 5)]
#[case("saturday", 5)]
#[case("sun", 6)]
#[case("sunday", 6)]
fn test_every_alias_resolves(#[case] token: &str, #[case] expected: u8) {
    assert_eq!(weekday_from_name(token).unwrap(), expected);
}

#[rstest]
#[case("Mon")]
#[case("  SATURDAY  ")]
#[case("Thurs")]
fn test_aliases_ignore_case_and_whitespace(#[case] token: &str) {
    assert!(weekday_from_name(token).is_ok());
}

#[test]
fn test_unknown_token_is_rejected() {
    let err = weekday_from_name("Funday").unwrap_err();
    assert!(matches!(err, HoursError::InvalidWeekday(ref t) if t == "Funday"));
}

#[test]
fn test_range_expands_inclusively() {
    let set = weekday_set("Mon-Wed").unwrap();
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[test]
fn test_comma_separated_list() {
    let set = weekday_set("Fri, Sun").unwrap();
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![4, 6]);
}

#[test]
fn test_mixed_ranges_and_single_days() {
    let set = weekday_set("Mon-Thu, Sun").unwrap();
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 6]);
}

#[test]
fn test_reversed_range_wraps_around_the_week() {
    let set = weekday_set("Fri-Mon").unwrap();
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 4, 5, 6]);
}

#[test]
fn test_duplicate_days_collapse() {
    let set = weekday_set("Mon, Mon-Tue").unwrap();
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn test_single_day_range_is_that_day() {
    let set = weekday_set("Sat-Sat").unwrap();
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![5]);
}

#[test]
fn test_bad_token_inside_list_fails_the_list() {
    assert!(weekday_set("Mon, Blursday").is_err());
}

#[test]
fn test_weekday_set_membership() {
    let set: WeekdaySet = [0u8, 4, 6].into_iter().collect();
    assert!(set.contains(0));
    assert!(set.contains(4));
    assert!(set.contains(6));
    assert!(!set.contains(3));
    assert!(!set.contains(7));
}

#[test]
fn test_empty_weekday_set() {
    let set = WeekdaySet::empty();
    assert!(set.is_empty());
    assert_eq!(set.iter().count(), 0);
}
