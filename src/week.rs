use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DECEMBER, JANUARY, WEEK_SEPARATOR, WEEK_SPAN_DAYS};
use crate::types::days_in_month;
use crate::{CivilDate, DateError, prelude::*};

/// Which weekday opens a calendar week. Two conventions are supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum WeekStart {
    #[default]
    #[display(fmt = "Sunday")]
    Sunday,
    #[display(fmt = "Monday")]
    Monday,
}

impl WeekStart {
    /// Interprets a free-form week-start option such as `"SUN"`, `"monday"`
    /// or `"Mo"`. Only the first two characters are significant, compared
    /// case-insensitively; `"MO"` selects Monday and everything else falls
    /// back to Sunday. Total, there is no error path.
    pub fn normalize(input: &str) -> Self {
        let key: String = input.chars().take(2).collect::<String>().to_uppercase();
        if key == "MO" { Self::Monday } else { Self::Sunday }
    }
}

impl From<&str> for WeekStart {
    fn from(input: &str) -> Self {
        Self::normalize(input)
    }
}

/// The seven weekday names as the `en-US` locale spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Weekday {
    #[display(fmt = "Sunday")]
    Sunday,
    #[display(fmt = "Monday")]
    Monday,
    #[display(fmt = "Tuesday")]
    Tuesday,
    #[display(fmt = "Wednesday")]
    Wednesday,
    #[display(fmt = "Thursday")]
    Thursday,
    #[display(fmt = "Friday")]
    Friday,
    #[display(fmt = "Saturday")]
    Saturday,
}

impl Weekday {
    /// Weekday for an index counted from Sunday, reduced modulo 7.
    pub(crate) const fn from_index(index: u8) -> Self {
        match index % 7 {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    /// Days to count backward from this weekday to reach the opening day of
    /// the week. The Monday-start offsets are the Sunday-start offsets
    /// rotated by one day.
    pub const fn days_from_week_start(self, week_start: WeekStart) -> u8 {
        match week_start {
            WeekStart::Sunday => self as u8,
            WeekStart::Monday => (self as u8 + 6) % 7,
        }
    }

    /// Days to count forward from this weekday to reach the closing day of
    /// the week.
    pub const fn days_to_week_end(self, week_start: WeekStart) -> u8 {
        WEEK_SPAN_DAYS - self.days_from_week_start(week_start)
    }
}

impl FromStr for Weekday {
    type Err = WeekError;

    /// Accepts exactly the seven English names ("Sunday" .. "Saturday"),
    /// as produced by an `en-US` calendar provider.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sunday" => Ok(Self::Sunday),
            "Monday" => Ok(Self::Monday),
            "Tuesday" => Ok(Self::Tuesday),
            "Wednesday" => Ok(Self::Wednesday),
            "Thursday" => Ok(Self::Thursday),
            "Friday" => Ok(Self::Friday),
            "Saturday" => Ok(Self::Saturday),
            other => Err(WeekError::UnknownWeekday(other.to_owned())),
        }
    }
}

/// Error type for week resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeekError {
    /// A weekday name did not match any of the seven English names.
    #[error("Unrecognized weekday name: {0}")]
    UnknownWeekday(String),

    /// A deserialized pair of dates did not span exactly one week.
    #[error("Invalid week span: {start}/{end} does not cover exactly seven days")]
    InvalidSpan { start: CivilDate, end: CivilDate },

    /// Error validating a date component.
    #[error(transparent)]
    Date(#[from] DateError),
}

/// The first and last calendar date of one week.
///
/// `end` is always exactly six days after `start`; both dates come out of
/// [`WeekBounds::resolve`], which maintains that invariant across month and
/// year boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct WeekBounds {
    start: CivilDate,
    end: CivilDate,
}

impl WeekBounds {
    /// Computes the bounds of the week containing `reference`.
    ///
    /// `weekday` must be the actual weekday of `reference`; it is trusted,
    /// not re-derived. An inconsistent pair yields a well-formed but wrong
    /// answer (garbage in, garbage out) — deriving the weekday is the
    /// calendar provider's job.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` (wrapped) when the week would cross
    /// below year 1 or above year 9999.
    pub fn resolve(
        reference: CivilDate,
        weekday: Weekday,
        week_start: WeekStart,
    ) -> Result<Self, WeekError> {
        let year = reference.year();
        let month = reference.month();
        let back = i32::from(weekday.days_from_week_start(week_start));
        let ahead = i32::from(weekday.days_to_week_end(week_start));

        let start_day = i32::from(reference.day()) - back;
        let start = if start_day <= 0 {
            // Week opens in the previous month; count backward from its last
            // day, using the year that month actually belongs to.
            let (prev_year, prev_month) = if month == JANUARY {
                (year - 1, DECEMBER)
            } else {
                (year, month - 1)
            };
            let day = i32::from(days_in_month(prev_year, prev_month)) + start_day;
            CivilDate::new(prev_year, prev_month, day as u8)?
        } else {
            CivilDate::new(year, month, start_day as u8)?
        };

        let overflow = i32::from(reference.day()) + ahead - i32::from(days_in_month(year, month));
        let end = if overflow > 0 {
            // Week closes in the opening days of the next month.
            let (next_year, next_month) = if month == DECEMBER {
                (year + 1, JANUARY)
            } else {
                (year, month + 1)
            };
            CivilDate::new(next_year, next_month, overflow as u8)?
        } else {
            CivilDate::new(year, month, (i32::from(reference.day()) + ahead) as u8)?
        };

        Ok(Self { start, end })
    }

    /// Returns the first date of the week
    pub const fn start(&self) -> CivilDate {
        self.start
    }

    /// Returns the last date of the week
    pub const fn end(&self) -> CivilDate {
        self.end
    }

    /// Returns both bounds as a tuple
    pub const fn dates(&self) -> (CivilDate, CivilDate) {
        (self.start, self.end)
    }

    /// Checks if the week contains a given date
    pub fn contains(&self, date: &CivilDate) -> bool {
        self.start <= *date && *date <= self.end
    }
}

/// Resolves the bounds of the week containing `(year, month, day)`.
///
/// The numeric components are validated first, so malformed provider output
/// surfaces as a [`DateError`] instead of a silent default. `weekday` is
/// assumed to be the actual weekday of the date — see
/// [`WeekBounds::resolve`] for the precondition.
///
/// # Errors
/// Returns `WeekError::Date` when a component is out of range or the week
/// would cross the supported year limits.
pub fn resolve_week(
    weekday: Weekday,
    day: u8,
    month: u8,
    year: u16,
    week_start: WeekStart,
) -> Result<WeekBounds, WeekError> {
    let reference = CivilDate::new(year, month, day)?;
    WeekBounds::resolve(reference, weekday, week_start)
}

impl FromStr for WeekBounds {
    type Err = WeekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (start_str, end_str) = trimmed
            .split_once(WEEK_SEPARATOR)
            .ok_or_else(|| DateError::InvalidFormat(trimmed.to_owned()))?;

        let start: CivilDate = start_str.trim().parse()?;
        let end: CivilDate = end_str.trim().parse()?;

        if end.to_unix_days() - start.to_unix_days() != i64::from(WEEK_SPAN_DAYS) {
            return Err(WeekError::InvalidSpan { start, end });
        }
        Ok(Self { start, end })
    }
}

impl Serialize for WeekBounds {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for WeekBounds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Gregorian;
    use crate::test_utils::civil;

    fn resolve(date: CivilDate, weekday: Weekday, week_start: WeekStart) -> WeekBounds {
        WeekBounds::resolve(date, weekday, week_start).expect("week resolves inside year range")
    }

    #[test]
    fn normalize_week_start() {
        assert_eq!(WeekStart::normalize("MON"), WeekStart::Monday);
        assert_eq!(WeekStart::normalize("mon"), WeekStart::Monday);
        assert_eq!(WeekStart::normalize("MONDAY"), WeekStart::Monday);
        assert_eq!(WeekStart::normalize("Mo"), WeekStart::Monday);
        assert_eq!(WeekStart::normalize("mO"), WeekStart::Monday);

        assert_eq!(WeekStart::normalize("SUN"), WeekStart::Sunday);
        assert_eq!(WeekStart::normalize("sunday"), WeekStart::Sunday);
        assert_eq!(WeekStart::normalize(""), WeekStart::Sunday);
        assert_eq!(WeekStart::normalize("tuesday"), WeekStart::Sunday);
        assert_eq!(WeekStart::normalize("??"), WeekStart::Sunday);
    }

    #[test]
    fn normalize_is_idempotent_over_display() {
        for convention in [WeekStart::Sunday, WeekStart::Monday] {
            assert_eq!(WeekStart::normalize(&convention.to_string()), convention);
        }
        assert_eq!(WeekStart::from("moNDAy"), WeekStart::Monday);
        assert_eq!(WeekStart::default(), WeekStart::Sunday);
    }

    #[test]
    fn weekday_parses_exact_english_names() {
        for (name, expected) in [
            ("Sunday", Weekday::Sunday),
            ("Monday", Weekday::Monday),
            ("Tuesday", Weekday::Tuesday),
            ("Wednesday", Weekday::Wednesday),
            ("Thursday", Weekday::Thursday),
            ("Friday", Weekday::Friday),
            ("Saturday", Weekday::Saturday),
        ] {
            let parsed: Weekday = name.parse().expect("recognized weekday name");
            assert_eq!(parsed, expected);
            assert_eq!(parsed.to_string(), name);
        }
    }

    #[test]
    fn weekday_rejects_unknown_names() {
        for bad in ["sunday", "SUN", "Funday", ""] {
            assert!(
                matches!(
                    bad.parse::<Weekday>(),
                    Err(WeekError::UnknownWeekday(ref s)) if s.as_str() == bad
                ),
                "{bad:?} must not parse"
            );
        }
    }

    #[test]
    fn offsets_match_both_conventions() {
        // (weekday, back from Sunday start, back from Monday start)
        let table = [
            (Weekday::Sunday, 0, 6),
            (Weekday::Monday, 1, 0),
            (Weekday::Tuesday, 2, 1),
            (Weekday::Wednesday, 3, 2),
            (Weekday::Thursday, 4, 3),
            (Weekday::Friday, 5, 4),
            (Weekday::Saturday, 6, 5),
        ];
        for (weekday, sun, mon) in table {
            assert_eq!(weekday.days_from_week_start(WeekStart::Sunday), sun);
            assert_eq!(weekday.days_from_week_start(WeekStart::Monday), mon);
            assert_eq!(weekday.days_to_week_end(WeekStart::Sunday), 6 - sun);
            assert_eq!(weekday.days_to_week_end(WeekStart::Monday), 6 - mon);
        }
    }

    #[test]
    fn mid_month_week() {
        let week = resolve(civil(2022, 6, 15), Weekday::Wednesday, WeekStart::Sunday);
        assert_eq!(week.start(), civil(2022, 6, 12));
        assert_eq!(week.end(), civil(2022, 6, 18));
    }

    #[test]
    fn start_crosses_into_previous_month() {
        // 2021-03-01 was a Monday; the Sunday before it closes February.
        let week = resolve(civil(2021, 3, 1), Weekday::Monday, WeekStart::Sunday);
        assert_eq!(week.start(), civil(2021, 2, 28));
        assert_eq!(week.end(), civil(2021, 3, 6));
    }

    #[test]
    fn end_crosses_into_next_month() {
        // 2023-02-27 was a Monday; the week runs through 28-day February
        // into March, and the end date carries the rolled-over month.
        let week = resolve(civil(2023, 2, 27), Weekday::Monday, WeekStart::Sunday);
        assert_eq!(week.start(), civil(2023, 2, 26));
        assert_eq!(week.end(), civil(2023, 3, 4));
        assert_eq!(week.end().month(), 3);
        assert_eq!(week.end().year(), 2023);
    }

    #[test]
    fn end_crosses_into_next_year() {
        let week = resolve(civil(2021, 12, 31), Weekday::Friday, WeekStart::Sunday);
        assert_eq!(week.start(), civil(2021, 12, 26));
        assert_eq!(week.end(), civil(2022, 1, 1));
    }

    #[test]
    fn start_crosses_into_previous_year() {
        let week = resolve(civil(2022, 1, 1), Weekday::Saturday, WeekStart::Sunday);
        assert_eq!(week.start(), civil(2021, 12, 26));
        assert_eq!(week.end(), civil(2022, 1, 1));
    }

    #[test]
    fn start_crosses_into_leap_february() {
        // 2016-03-01 was a Tuesday; leap February keeps its 29th.
        let week = resolve(civil(2016, 3, 1), Weekday::Tuesday, WeekStart::Sunday);
        assert_eq!(week.start(), civil(2016, 2, 28));
        assert_eq!(week.end(), civil(2016, 3, 5));
    }

    #[test]
    fn end_crosses_out_of_leap_february() {
        // 2020-02-29 was a Saturday; with Monday-start weeks the Sunday
        // after it is the first of March.
        let week = resolve(civil(2020, 2, 29), Weekday::Saturday, WeekStart::Monday);
        assert_eq!(week.start(), civil(2020, 2, 24));
        assert_eq!(week.end(), civil(2020, 3, 1));
    }

    #[test]
    fn monday_convention_mid_month() {
        let week = resolve(civil(2022, 6, 15), Weekday::Wednesday, WeekStart::Monday);
        assert_eq!(week.start(), civil(2022, 6, 13));
        assert_eq!(week.end(), civil(2022, 6, 19));
    }

    #[test]
    fn monday_convention_sunday_belongs_to_previous_week() {
        // 2022-01-02 was a Sunday; under Monday-start it closes the week
        // that began in December.
        let week = resolve(civil(2022, 1, 2), Weekday::Sunday, WeekStart::Monday);
        assert_eq!(week.start(), civil(2021, 12, 27));
        assert_eq!(week.end(), civil(2022, 1, 2));
    }

    #[test]
    fn resolve_week_validates_components() {
        let err = resolve_week(Weekday::Monday, 1, 13, 2022, WeekStart::Sunday);
        assert!(matches!(
            err,
            Err(WeekError::Date(DateError::InvalidMonth(13)))
        ));

        let err = resolve_week(Weekday::Monday, 30, 2, 2023, WeekStart::Sunday);
        assert!(matches!(
            err,
            Err(WeekError::Date(DateError::InvalidDay { .. }))
        ));
    }

    #[test]
    fn week_crossing_year_limits_errors() {
        // 0001-01-01 was a Monday; its Sunday-start week begins in year 0.
        let err = WeekBounds::resolve(civil(1, 1, 1), Weekday::Monday, WeekStart::Sunday);
        assert!(matches!(
            err,
            Err(WeekError::Date(DateError::InvalidYear(0)))
        ));

        // 9999-12-31 is a Friday; its week ends in year 10000.
        let err = WeekBounds::resolve(civil(9999, 12, 31), Weekday::Friday, WeekStart::Sunday);
        assert!(matches!(
            err,
            Err(WeekError::Date(DateError::InvalidYear(10000)))
        ));
    }

    #[test]
    fn span_is_always_six_days() {
        // Sweep a leap year and a non-leap year under both conventions,
        // measuring the span with the day-number arithmetic instead of the
        // resolver's own month math.
        for year in [2020u16, 2023] {
            for month in 1..=12u8 {
                for day in 1..=days_in_month(year, month) {
                    let date = civil(year, month, day);
                    let weekday = Gregorian::weekday_of(date);
                    for convention in [WeekStart::Sunday, WeekStart::Monday] {
                        let week = resolve(date, weekday, convention);
                        assert_eq!(
                            week.end().to_unix_days() - week.start().to_unix_days(),
                            6,
                            "span for {date} ({convention:?} start)"
                        );
                        assert!(week.contains(&date), "{date} inside its own week");
                        assert_eq!(
                            Gregorian::weekday_of(week.start())
                                .days_from_week_start(convention),
                            0,
                            "week of {date} opens on the configured weekday"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn accessors_and_contains() {
        let week = resolve(civil(2022, 6, 15), Weekday::Wednesday, WeekStart::Sunday);
        assert_eq!(week.dates(), (civil(2022, 6, 12), civil(2022, 6, 18)));
        assert!(week.contains(&civil(2022, 6, 12)));
        assert!(week.contains(&civil(2022, 6, 18)));
        assert!(!week.contains(&civil(2022, 6, 11)));
        assert!(!week.contains(&civil(2022, 6, 19)));
    }

    #[test]
    fn ordering_follows_start_date() {
        let earlier = resolve(civil(2022, 6, 8), Weekday::Wednesday, WeekStart::Sunday);
        let later = resolve(civil(2022, 6, 15), Weekday::Wednesday, WeekStart::Sunday);
        assert!(earlier < later);
    }

    #[test]
    fn display_and_parse_round_trip() {
        let week = resolve(civil(2021, 12, 31), Weekday::Friday, WeekStart::Sunday);
        assert_eq!(week.to_string(), "2021-12-26/2022-01-01");

        let parsed: WeekBounds = "2021-12-26/2022-01-01"
            .parse()
            .expect("week string parses");
        assert_eq!(parsed, week);
    }

    #[test]
    fn parse_rejects_broken_spans() {
        let err = "2022-06-12/2022-06-20".parse::<WeekBounds>();
        assert!(matches!(err, Err(WeekError::InvalidSpan { .. })));

        let err = "2022-06-12".parse::<WeekBounds>();
        assert!(matches!(
            err,
            Err(WeekError::Date(DateError::InvalidFormat(_)))
        ));
    }

    #[test]
    fn serde_string_format() {
        let week = resolve(civil(2022, 6, 15), Weekday::Wednesday, WeekStart::Sunday);
        let json = serde_json::to_string(&week).expect("week serializes");
        assert_eq!(json, r#""2022-06-12/2022-06-18""#);

        let parsed: WeekBounds = serde_json::from_str(&json).expect("week deserializes");
        assert_eq!(week, parsed);

        let rejected: Result<WeekBounds, _> =
            serde_json::from_str(r#""2022-06-12/2022-06-17""#);
        assert!(rejected.is_err());
    }

    #[test]
    fn inconsistent_weekday_is_garbage_in_garbage_out() {
        // 2022-06-15 was a Wednesday; claiming Friday shifts the window but
        // still yields a well-formed six-day span.
        let week = resolve(civil(2022, 6, 15), Weekday::Friday, WeekStart::Sunday);
        assert_eq!(week.start(), civil(2022, 6, 10));
        assert_eq!(week.end(), civil(2022, 6, 16));
    }
}
