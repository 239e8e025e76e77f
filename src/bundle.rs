use serde::Serialize;

use crate::CivilDate;
use crate::consts::DEFAULT_LOCALE;
use crate::provider::{CalendarProvider, NameStyle};
use crate::week::{WeekError, WeekStart, Weekday, resolve_week};

/// Options accepted by [`DateBundle::assemble`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleOptions {
    /// Locale tag forwarded verbatim to the calendar provider.
    pub locale: String,
    /// Which weekday opens the week. Use [`WeekStart::normalize`] to build
    /// this from a free-form option string.
    pub week_starts_on: WeekStart,
    /// Reference date; today's date (UTC) when absent.
    pub date: Option<CivilDate>,
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_owned(),
            week_starts_on: WeekStart::default(),
            date: None,
        }
    }
}

/// Everything derived from one reference date: the bounds of its week, the
/// three numeric string permutations, and the locale display names.
///
/// Value object, assembled fresh on each call; recomputation on input change
/// is the embedding layer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateBundle {
    /// First date of the week containing the reference date
    pub week_start_date: CivilDate,
    /// Last date of the week containing the reference date
    pub week_end_date: CivilDate,
    /// Reference date as `YYYY-MM-DD`
    pub date_ymd: String,
    /// Reference date as `DD-MM-YYYY`
    pub date_dmy: String,
    /// Reference date as `MM-DD-YYYY`
    pub date_mdy: String,
    /// Full weekday name in the requested locale
    pub weekday_long: String,
    /// Abbreviated weekday name in the requested locale
    pub weekday_short: String,
    /// Day of the month (1..=31)
    pub day_of_month: u8,
    /// Month number (1..=12)
    pub month_numeric: u8,
    /// Full month name in the requested locale
    pub month_long: String,
    /// Abbreviated month name in the requested locale
    pub month_short: String,
    /// Four-digit year
    pub year: u16,
}

impl DateBundle {
    /// Computes the bundle for `options.date` (or today) against `provider`.
    ///
    /// The provider's weekday name is parsed before any arithmetic, so a
    /// provider emitting something other than the seven English names is
    /// reported as [`WeekError::UnknownWeekday`] instead of producing a
    /// defaulted week.
    ///
    /// # Errors
    /// Returns `WeekError::UnknownWeekday` for a malformed provider weekday,
    /// or `WeekError::Date` when the provider's numeric fields are out of
    /// range or the week crosses the supported year limits.
    pub fn assemble<P: CalendarProvider>(
        provider: &P,
        options: &BundleOptions,
    ) -> Result<Self, WeekError> {
        let date = match options.date {
            Some(date) => date,
            None => CivilDate::today()?,
        };

        let fields = provider.civil_fields(date);
        let weekday: Weekday = fields.weekday.parse()?;
        let week = resolve_week(
            weekday,
            fields.day,
            fields.month,
            fields.year,
            options.week_starts_on,
        )?;

        let long =
            provider.display_names(date, &options.locale, NameStyle::Long, NameStyle::Long);
        let short =
            provider.display_names(date, &options.locale, NameStyle::Short, NameStyle::Short);

        Ok(Self {
            week_start_date: week.start(),
            week_end_date: week.end(),
            date_ymd: date.to_string(),
            date_dmy: format!("{:02}-{:02}-{:04}", fields.day, fields.month, fields.year),
            date_mdy: format!("{:02}-{:02}-{:04}", fields.month, fields.day, fields.year),
            weekday_long: long.weekday,
            weekday_short: short.weekday,
            day_of_month: fields.day,
            month_numeric: fields.month,
            month_long: long.month,
            month_short: short.month,
            year: fields.year,
        })
    }
}
