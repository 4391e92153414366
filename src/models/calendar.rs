use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AdvisorError, Result};
use crate::utils::calendar::{day_of_year, month_name, validate_month_day};

/// A month/day pair without a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CalendarDateFields")]
pub struct CalendarDate {
    month: u32,
    day: u32,
}

/// Unchecked wire form; deserialisation goes through [`CalendarDate::new`]
#[derive(Deserialize)]
struct CalendarDateFields {
    month: u32,
    day: u32,
}

impl TryFrom<CalendarDateFields> for CalendarDate {
    type Error = AdvisorError;

    fn try_from(fields: CalendarDateFields) -> Result<Self> {
        Self::new(fields.month, fields.day)
    }
}

impl CalendarDate {
    pub fn new(month: u32, day: u32) -> Result<Self> {
        validate_month_day(month, day)?;
        Ok(Self { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn day_of_year(&self) -> u32 {
        // Fields were validated on construction
        day_of_year(self.month, self.day).unwrap_or(self.day)
    }

    /// `"15 March"` style label
    pub fn formatted(&self) -> String {
        format!("{} {}", self.day, month_name(self.month).unwrap_or_default())
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.day, self.month)
    }
}

/// Early-to-late sowing dates. `late` before `early` in the year means the
/// window runs across December into January.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SowingWindow {
    pub early: CalendarDate,
    pub late: CalendarDate,
}

impl SowingWindow {
    pub fn new(early: CalendarDate, late: CalendarDate) -> Self {
        Self { early, late }
    }

    pub fn wraps_year_end(&self) -> bool {
        self.late.day_of_year() < self.early.day_of_year()
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        let current = date.day_of_year();
        let early = self.early.day_of_year();
        let late = self.late.day_of_year();

        if self.wraps_year_end() {
            current >= early || current <= late
        } else {
            current >= early && current <= late
        }
    }
}
