use super::*;

#[test]
fn default_is_weekdays_nine_to_five() {
    let availability = Availability::default();
    assert_eq!(
        availability.open_days(),
        [Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday, Weekday::Thursday, Weekday::Friday]
    );
    assert_eq!(availability.day(Weekday::Saturday).start, "10:00");
    assert_eq!(availability.max_daily_pickups, 5);
    assert!(availability.validate().is_ok());
}

#[test]
fn parse_clock_accepts_hh_mm_only() {
    assert_eq!(parse_clock("09:30"), Some(570));
    assert_eq!(parse_clock(" 0:00 "), Some(0));
    assert_eq!(parse_clock("24:00"), None);
    assert_eq!(parse_clock("12:60"), None);
    assert_eq!(parse_clock("noon"), None);
    assert_eq!(parse_clock(""), None);
}

#[test]
fn enabling_a_day_checks_its_window() {
    let mut availability = Availability::default();
    availability.set_enabled(Weekday::Sunday, true);
    availability.set_start(Weekday::Sunday, "15:00");
    assert_eq!(availability.validate(), Err(ActionError::InvalidTimeWindow { day: "Sunday" }));

    availability.set_end(Weekday::Sunday, "18:00");
    assert!(availability.validate().is_ok());
}

#[test]
fn disabled_days_are_not_checked() {
    let mut availability = Availability::default();
    availability.set_enabled(Weekday::Monday, false);
    availability.set_end(Weekday::Monday, "");
    assert!(availability.validate().is_ok());
}

#[test]
fn daily_cap_is_bounded() {
    let mut availability = Availability { max_daily_pickups: 0, ..Availability::default() };
    assert_eq!(
        availability.validate(),
        Err(ActionError::OutOfRange { field: "max_daily_pickups", min: 1, max: 20 })
    );
    availability.max_daily_pickups = 21;
    assert!(availability.validate().is_err());
    availability.max_daily_pickups = 20;
    assert!(availability.validate().is_ok());
}

#[test]
fn blackout_dates_reject_blank_and_duplicates() {
    let mut availability = Availability::default();
    assert!(availability.add_blackout("2024-12-25"));
    assert!(!availability.add_blackout(" 2024-12-25 "));
    assert!(!availability.add_blackout("  "));
    assert!(availability.add_blackout("2024-01-01"));
    assert_eq!(availability.blackout_dates(), ["2024-12-25", "2024-01-01"]);

    assert!(availability.remove_blackout("2024-12-25"));
    assert!(!availability.remove_blackout("2024-12-25"));
    assert_eq!(availability.blackout_dates(), ["2024-01-01"]);
}
