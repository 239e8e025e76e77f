/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Largest day number any month can reach
pub const MAX_DAY: u8 = 31;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Number of days in a calendar week
pub const DAYS_IN_WEEK: u8 = 7;

/// Days separating the first and last date of one week
pub const WEEK_SPAN_DAYS: u8 = DAYS_IN_WEEK - 1;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator between the first and last date of a week (ISO 8601 extended format)
pub const WEEK_SEPARATOR: char = '/';

/// Locale tag assumed when the caller does not name one
pub const DEFAULT_LOCALE: &str = "en-US";

/// Seconds in one civil day (no leap-second accounting)
pub(crate) const SECONDS_PER_DAY: u64 = 86_400;
/// Days from 0000-03-01 to the Unix epoch, used by the civil/day-number conversions
pub(crate) const UNIX_EPOCH_SHIFT_DAYS: i64 = 719_468;
/// Days in one full 400-year Gregorian era
pub(crate) const DAYS_PER_ERA: i64 = 146_097;
/// Years in one full Gregorian era
pub(crate) const YEARS_PER_ERA: i64 = 400;
