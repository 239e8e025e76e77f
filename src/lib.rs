mod bundle;
mod consts;
mod prelude;
mod provider;
mod types;
mod week;

pub use bundle::{BundleOptions, DateBundle};
pub use consts::*;
pub use provider::{CalendarProvider, CivilFields, DisplayNames, Gregorian, NameStyle};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use week::{WeekBounds, WeekError, WeekStart, Weekday, resolve_week};

use crate::prelude::*;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

/// One concrete day of the proleptic Gregorian calendar, with no time-of-day
/// or timezone component. Immutable once constructed; every component is
/// validated, so an existing value always names a real calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CivilDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl CivilDate {
    /// Creates a date from its numeric components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `InvalidMonth` or `InvalidDay` when a
    /// component is out of range for the Gregorian calendar.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year_v = Year::new(year)?;
        let month_v = Month::new(month)?;
        let day_v = Day::new(day, year, month)?;
        Ok(Self {
            year: year_v,
            month: month_v,
            day: day_v,
        })
    }

    /// Returns the year component (1..=9999)
    #[inline]
    pub const fn year(self) -> u16 {
        self.year.get()
    }

    /// Returns the month component (1..=12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month.get()
    }

    /// Returns the day-of-month component (1..=31)
    #[inline]
    pub const fn day(self) -> u8 {
        self.day.get()
    }

    /// Number of days since 1970-01-01 (negative before it).
    pub fn to_unix_days(self) -> i64 {
        let y = i64::from(self.year()) - i64::from(self.month() < MARCH);
        let era = y.div_euclid(YEARS_PER_ERA);
        let yoe = y - era * YEARS_PER_ERA;
        let shifted_month = i64::from(if self.month() >= MARCH {
            self.month() - 3
        } else {
            self.month() + 9
        });
        let doy = (153 * shifted_month + 2) / 5 + i64::from(self.day()) - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * DAYS_PER_ERA + doe - UNIX_EPOCH_SHIFT_DAYS
    }

    /// Date for a count of days since 1970-01-01.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` when the day count lands outside
    /// years `1..=9999`.
    pub fn from_unix_days(days: i64) -> Result<Self, DateError> {
        let z = days + UNIX_EPOCH_SHIFT_DAYS;
        let era = if z >= 0 { z } else { z - (DAYS_PER_ERA - 1) } / DAYS_PER_ERA;
        let doe = z - era * DAYS_PER_ERA;
        let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
        let y = yoe + era * YEARS_PER_ERA;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let y = if month <= 2 { y + 1 } else { y };

        // Years at or below 0 collapse to 0 and are rejected as InvalidYear.
        let year = u16::try_from(y).unwrap_or(0);
        Self::new(year, month as u8, day as u8)
    }

    /// Today's date in UTC, from the system clock.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the clock reads outside the
    /// supported year range.
    pub fn today() -> Result<Self, DateError> {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Self::from_unix_days((secs / SECONDS_PER_DAY) as i64)
    }
}

impl FromStr for CivilDate {
    type Err = DateError;

    /// Parses the fixed ISO 8601 calendar form `YYYY-MM-DD`. This is the
    /// crate's wire format, not a general date parser.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        }

        let year = parts[0]
            .parse::<u16>()
            .map_err(|_| DateError::InvalidFormat(parts[0].to_owned()))?;
        let month = parts[1]
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(parts[1].to_owned()))?;
        let day = parts[2]
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(parts[2].to_owned()))?;

        Self::new(year, month, day)
    }
}

impl serde::Serialize for CivilDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CivilDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::CivilDate;

    /// Shorthand constructor for test fixtures.
    pub fn civil(year: u16, month: u8, day: u8) -> CivilDate {
        CivilDate::new(year, month, day).expect("test fixture date is valid")
    }
}
