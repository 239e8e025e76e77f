use crate::CivilDate;
use crate::consts::MARCH;
use crate::week::Weekday;

/// English weekday names, indexed from Sunday.
const WEEKDAY_NAMES_LONG: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const WEEKDAY_NAMES_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// English month names, indexed from January.
const MONTH_NAMES_LONG: [&str; 12] = [
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

const MONTH_NAMES_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Length of a display name: the full word or its conventional abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameStyle {
    Long,
    Short,
}

/// Named calendar fields for one date.
///
/// `weekday` carries the English name regardless of locale; week resolution
/// matches on it. Named fields rather than a positional parts sequence, so
/// consumers never depend on formatting-option ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CivilFields {
    pub weekday: String,
    pub day: u8,
    pub month: u8,
    pub year: u16,
}

/// User-facing weekday and month names for one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNames {
    pub weekday: String,
    pub month: String,
}

/// Source of calendar fields and localized display names.
///
/// The week resolver consumes only [`CalendarProvider::civil_fields`];
/// display names feed the presentation bundle. `locale` is an opaque tag
/// the provider is free to interpret or ignore.
pub trait CalendarProvider {
    /// Civil calendar fields for `date`, with the weekday spelled in English.
    fn civil_fields(&self, date: CivilDate) -> CivilFields;

    /// Weekday and month names for `date` in `locale`.
    fn display_names(
        &self,
        date: CivilDate,
        locale: &str,
        weekday_style: NameStyle,
        month_style: NameStyle,
    ) -> DisplayNames;
}

/// Built-in provider for the proleptic Gregorian calendar.
///
/// Display names are English for every locale; callers needing other
/// languages implement [`CalendarProvider`] over their own name source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gregorian;

impl Gregorian {
    /// Weekday of `date`, by Sakamoto's method.
    pub fn weekday_of(date: CivilDate) -> Weekday {
        const MONTH_OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

        let mut y = i32::from(date.year());
        if date.month() < MARCH {
            y -= 1;
        }
        let index = (y + y / 4 - y / 100 + y / 400
            + MONTH_OFFSETS[usize::from(date.month() - 1)]
            + i32::from(date.day()))
        .rem_euclid(7);
        Weekday::from_index(index as u8)
    }
}

impl CalendarProvider for Gregorian {
    fn civil_fields(&self, date: CivilDate) -> CivilFields {
        CivilFields {
            weekday: Self::weekday_of(date).to_string(),
            day: date.day(),
            month: date.month(),
            year: date.year(),
        }
    }

    fn display_names(
        &self,
        date: CivilDate,
        _locale: &str,
        weekday_style: NameStyle,
        month_style: NameStyle,
    ) -> DisplayNames {
        let weekday_index = Self::weekday_of(date) as usize;
        let month_index = usize::from(date.month() - 1);

        let weekday = match weekday_style {
            NameStyle::Long => WEEKDAY_NAMES_LONG[weekday_index],
            NameStyle::Short => WEEKDAY_NAMES_SHORT[weekday_index],
        };
        let month = match month_style {
            NameStyle::Long => MONTH_NAMES_LONG[month_index],
            NameStyle::Short => MONTH_NAMES_SHORT[month_index],
        };

        DisplayNames {
            weekday: weekday.to_owned(),
            month: month.to_owned(),
        }
    }
}
