use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::attendance::{rounded_percentage, AttendanceStatus, StatusCounts};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Column headers, Sunday first.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Recorded attendance keyed by calendar date. Days absent from the map
/// have no status and do not count toward any total.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CalendarRecords {
    records: BTreeMap<NaiveDate, AttendanceStatus>,
}

impl CalendarRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: NaiveDate, status: AttendanceStatus) {
        self.records.insert(date, status);
    }

    /// Build from `("YYYY-MM-DD", status)` pairs. Unparseable dates are
    /// skipped.
    pub fn from_iso_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, AttendanceStatus)>,
    {
        let mut records = Self::new();
        for (iso, status) in pairs {
            match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
                Ok(date) => records.insert(date, status),
                Err(e) => tracing::warn!(date = iso, error = %e, "skipping calendar record"),
            }
        }
        records
    }

    pub fn status_on(&self, date: NaiveDate) -> Option<AttendanceStatus> {
        self.records.get(&date).copied()
    }

    pub fn total_recorded_days(&self) -> usize {
        self.records.len()
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts::tally(self.records.values().copied())
    }

    /// Present days over recorded days, rounded to the nearest integer.
    pub fn attendance_percentage(&self) -> u32 {
        rounded_percentage(self.counts().present, self.total_recorded_days())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &AttendanceStatus)> {
        self.records.iter()
    }
}

/// The month currently displayed by the calendar view. Only built through
/// [`MonthCursor::new`], which keeps `month` in 1..=12.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    /// 1-based.
    month: u32,
}

impl MonthCursor {
    /// `month` outside 1..=12 is clamped.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// "January 2024".
    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }

    /// Day before the 1st of the following month.
    pub fn days_in_month(&self) -> u32 {
        let following = self.next();
        NaiveDate::from_ymd_opt(following.year, following.month, 1)
            .and_then(|first| first.pred_opt())
            .map(|last| last.day())
            .unwrap_or(31)
    }

    /// Blank cells before the 1st, Sunday = 0.
    pub fn leading_blanks(&self) -> u32 {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

/// One recorded-or-not day in the month grid.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub status: Option<AttendanceStatus>,
    pub is_today: bool,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum CalendarCell {
    Blank,
    Day(DayCell),
}

/// Leading blanks for the weekday of the 1st, then one cell per day.
pub fn month_grid(cursor: MonthCursor, records: &CalendarRecords, today: NaiveDate) -> Vec<CalendarCell> {
    let blanks = cursor.leading_blanks();
    let days = cursor.days_in_month();
    let mut cells = Vec::with_capacity((blanks + days) as usize);

    cells.extend((0..blanks).map(|_| CalendarCell::Blank));
    for day in 1..=days {
        let date = cursor.date(day);
        cells.push(CalendarCell::Day(DayCell {
            day,
            status: date.and_then(|d| records.status_on(d)),
            is_today: date == Some(today),
        }));
    }
    cells
}
