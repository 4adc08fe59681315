//! Donor pickup availability: weekly windows, blackout dates, daily cap.
//!
//! The availability dialog edits a copy and only writes it back after
//! `validate` passes, so the stored value is always valid.

#[cfg(test)]
#[path = "availability_test.rs"]
mod availability_test;

use super::error::{ActionError, required};

pub const MIN_DAILY_PICKUPS: u32 = 1;
pub const MAX_DAILY_PICKUPS: u32 = 20;

/// `(value, label)` pairs for the timezone select.
pub const TIMEZONES: [(&str, &str); 4] = [
    ("America/New_York", "Eastern Time (ET)"),
    ("America/Chicago", "Central Time (CT)"),
    ("America/Denver", "Mountain Time (MT)"),
    ("America/Los_Angeles", "Pacific Time (PT)"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayWindow {
    pub enabled: bool,
    /// `HH:MM`, 24-hour.
    pub start: String,
    pub end: String,
}

impl DayWindow {
    fn new(enabled: bool, start: &str, end: &str) -> Self {
        Self { enabled, start: start.to_owned(), end: end.to_owned() }
    }
}

/// Minutes past midnight for an `HH:MM` string.
#[must_use]
pub fn parse_clock(raw: &str) -> Option<u32> {
    let (h, m) = raw.trim().split_once(':')?;
    let (h, m): (u32, u32) = (h.parse().ok()?, m.parse().ok()?);
    (h < 24 && m < 60).then_some(h * 60 + m)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Availability {
    days: [DayWindow; 7],
    blackout_dates: Vec<String>,
    pub timezone: String,
    pub max_daily_pickups: u32,
    pub auto_accept: bool,
}

impl Default for Availability {
    /// Weekdays 09:00-17:00; weekends off with a 10:00-14:00 window ready.
    fn default() -> Self {
        let weekday = DayWindow::new(true, "09:00", "17:00");
        let weekend = DayWindow::new(false, "10:00", "14:00");
        Self {
            days: [
                weekday.clone(),
                weekday.clone(),
                weekday.clone(),
                weekday.clone(),
                weekday,
                weekend.clone(),
                weekend,
            ],
            blackout_dates: Vec::new(),
            timezone: TIMEZONES[0].0.to_owned(),
            max_daily_pickups: 5,
            auto_accept: false,
        }
    }
}

impl Availability {
    #[must_use]
    pub fn day(&self, day: Weekday) -> &DayWindow {
        &self.days[day.index()]
    }

    pub fn set_enabled(&mut self, day: Weekday, enabled: bool) {
        self.days[day.index()].enabled = enabled;
    }

    pub fn set_start(&mut self, day: Weekday, start: &str) {
        self.days[day.index()].start = start.trim().to_owned();
    }

    pub fn set_end(&mut self, day: Weekday, end: &str) {
        self.days[day.index()].end = end.trim().to_owned();
    }

    #[must_use]
    pub fn blackout_dates(&self) -> &[String] {
        &self.blackout_dates
    }

    /// Add a date the donor is unavailable. Returns false for a blank or
    /// duplicate date.
    pub fn add_blackout(&mut self, date: &str) -> bool {
        let Ok(date) = required("blackout_date", date) else {
            return false;
        };
        if self.blackout_dates.contains(&date) {
            return false;
        }
        self.blackout_dates.push(date);
        true
    }

    pub fn remove_blackout(&mut self, date: &str) -> bool {
        let before = self.blackout_dates.len();
        self.blackout_dates.retain(|d| d != date.trim());
        self.blackout_dates.len() != before
    }

    /// Days open for pickups, in week order.
    #[must_use]
    pub fn open_days(&self) -> Vec<Weekday> {
        Weekday::ALL.into_iter().filter(|d| self.day(*d).enabled).collect()
    }

    /// # Errors
    ///
    /// `InvalidTimeWindow` for the first enabled day whose start is not a
    /// valid time before its end, `OutOfRange` for the daily cap.
    pub fn validate(&self) -> Result<(), ActionError> {
        for day in Weekday::ALL {
            let window = self.day(day);
            if !window.enabled {
                continue;
            }
            match (parse_clock(&window.start), parse_clock(&window.end)) {
                (Some(start), Some(end)) if start < end => {}
                _ => return Err(ActionError::InvalidTimeWindow { day: day.label() }),
            }
        }
        if !(MIN_DAILY_PICKUPS..=MAX_DAILY_PICKUPS).contains(&self.max_daily_pickups) {
            return Err(ActionError::OutOfRange {
                field: "max_daily_pickups",
                min: MIN_DAILY_PICKUPS,
                max: MAX_DAILY_PICKUPS,
            });
        }
        Ok(())
    }
}
