//! Calendar date in the proleptic Gregorian calendar.

use crate::error::CivilError;
use crate::weekday::Weekday;

/// Number of days in each month of a non-leap year (index 0 unused,
/// index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given month of the given year.
///
/// # Errors
///
/// Returns [`CivilError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CivilError> {
    if !(1..=12).contains(&month) {
        return Err(CivilError::InvalidMonth { month });
    }
    let days = DAYS_PER_MONTH[month as usize];
    if month == 2 && is_leap_year(year) {
        Ok(days + 1)
    } else {
        Ok(days)
    }
}

/// A validated calendar date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    year: i32,
    month: u8,
    day: u8,
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl Date {
    /// Creates a new `Date` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CivilError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CivilError::InvalidDay`] if `day` is not valid for the
    /// given month and year (February 29 requires a leap year).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CivilError> {
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CivilError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the number of days since the Unix epoch (1970-01-01 = 0).
    ///
    /// Uses the standard era-based civil-from-days algorithm; exact for the
    /// whole proleptic Gregorian range of `i32` years.
    pub fn rata_die(self) -> i64 {
        let y = i64::from(self.year) - i64::from(self.month <= 2);
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = y - era * 400;
        let m = i64::from(self.month);
        let mp = if m > 2 { m - 3 } else { m + 9 };
        let doy = (153 * mp + 2) / 5 + i64::from(self.day) - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146097 + doe - 719_468
    }

    /// Creates a `Date` from a day count since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns [`CivilError::YearOutOfRange`] if the resulting year does not
    /// fit in `i32`.
    pub fn from_rata_die(days: i64) -> Result<Self, CivilError> {
        let z = days.checked_add(719_468).ok_or(CivilError::Overflow)?;
        let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
        let y = yoe + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
        let month = if mp < 10 { mp + 3 } else { mp - 9 } as u8;
        let year = if month <= 2 { y + 1 } else { y };
        let year = i32::try_from(year).map_err(|_| CivilError::YearOutOfRange)?;
        Ok(Self { year, month, day })
    }

    /// Returns the day of the week for this date.
    pub fn weekday(self) -> Weekday {
        // 1970-01-01 (rata die 0) was a Thursday, Monday-first index 3.
        let index = (self.rata_die() + 3).rem_euclid(7) as u8;
        Weekday::from_index(index)
    }

    /// Adds `days` (may be negative) to this date.
    ///
    /// # Errors
    ///
    /// Returns [`CivilError::Overflow`] or [`CivilError::YearOutOfRange`]
    /// if the result is unrepresentable.
    pub fn add_days(self, days: i64) -> Result<Self, CivilError> {
        let rd = self.rata_die().checked_add(days).ok_or(CivilError::Overflow)?;
        Self::from_rata_die(rd)
    }

    /// Adds `months` (may be negative) to this date, clamping the day to the
    /// last valid day of the resulting month.
    ///
    /// Jan 31 + 1 month is Feb 28 (Feb 29 in leap years), never an invalid
    /// Feb 31.
    ///
    /// # Errors
    ///
    /// Returns [`CivilError::Overflow`] or [`CivilError::YearOutOfRange`]
    /// if the result is unrepresentable.
    pub fn add_months(self, months: i64) -> Result<Self, CivilError> {
        let total = i64::from(self.year) * 12 + i64::from(self.month) - 1;
        let total = total.checked_add(months).ok_or(CivilError::Overflow)?;
        let year =
            i32::try_from(total.div_euclid(12)).map_err(|_| CivilError::YearOutOfRange)?;
        let month = (total.rem_euclid(12) + 1) as u8;
        let max_day = days_in_month(year, month)?;
        Ok(Self {
            year,
            month,
            day: self.day.min(max_day),
        })
    }

    /// Adds `years` (may be negative) to this date, clamping Feb 29 to
    /// Feb 28 when the target year is not a leap year.
    ///
    /// # Errors
    ///
    /// Returns [`CivilError::Overflow`] or [`CivilError::YearOutOfRange`]
    /// if the result is unrepresentable.
    pub fn add_years(self, years: i64) -> Result<Self, CivilError> {
        let months = years.checked_mul(12).ok_or(CivilError::Overflow)?;
        self.add_months(months)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
