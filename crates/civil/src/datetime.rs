//! Calendar date, wall-clock time, and fixed offset combined.

use crate::date::Date;
use crate::error::CivilError;
use crate::offset::Offset;
use crate::time::Time;

/// An absolute instant: calendar date plus wall-clock time plus a fixed
/// UTC offset.
///
/// All arithmetic operates on the wall clock; the offset is carried along
/// unchanged and only matters for Unix-epoch conversions and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime {
    date: Date,
    time: Time,
    offset: Offset,
}

impl DateTime {
    /// Combines a date, a time, and an offset into a `DateTime`.
    pub fn new(date: Date, time: Time, offset: Offset) -> Self {
        Self { date, time, offset }
    }

    /// Returns the calendar date.
    pub fn date(self) -> Date {
        self.date
    }

    /// Returns the wall-clock time.
    pub fn time(self) -> Time {
        self.time
    }

    /// Returns the fixed UTC offset.
    pub fn offset(self) -> Offset {
        self.offset
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.date.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.date.month()
    }

    /// Returns the day (1..=31).
    pub fn day(self) -> u8 {
        self.date.day()
    }

    /// Returns a copy with the date replaced and time/offset unchanged.
    pub fn with_date(self, date: Date) -> Self {
        Self { date, ..self }
    }

    /// Returns a copy with the time replaced and date/offset unchanged.
    pub fn with_time(self, time: Time) -> Self {
        Self { time, ..self }
    }

    /// Adds `seconds` (may be negative), normalizing through day boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`CivilError::Overflow`] or [`CivilError::YearOutOfRange`]
    /// if the result is unrepresentable.
    pub fn add_seconds(self, seconds: i64) -> Result<Self, CivilError> {
        let total = i64::from(self.time.second_of_day())
            .checked_add(seconds)
            .ok_or(CivilError::Overflow)?;
        let date = self.date.add_days(total.div_euclid(86_400))?;
        let time = Time::from_second_of_day(total.rem_euclid(86_400) as u32);
        Ok(Self { date, time, ..self })
    }

    /// Adds `days` (may be negative), leaving the wall-clock time unchanged.
    ///
    /// # Errors
    ///
    /// See [`Date::add_days`].
    pub fn add_days(self, days: i64) -> Result<Self, CivilError> {
        Ok(Self {
            date: self.date.add_days(days)?,
            ..self
        })
    }

    /// Adds `months` with day-of-month clamping, time unchanged.
    ///
    /// # Errors
    ///
    /// See [`Date::add_months`].
    pub fn add_months(self, months: i64) -> Result<Self, CivilError> {
        Ok(Self {
            date: self.date.add_months(months)?,
            ..self
        })
    }

    /// Adds `years` with leap-day clamping, time unchanged.
    ///
    /// # Errors
    ///
    /// See [`Date::add_years`].
    pub fn add_years(self, years: i64) -> Result<Self, CivilError> {
        Ok(Self {
            date: self.date.add_years(years)?,
            ..self
        })
    }

    /// Returns the Unix timestamp (seconds since 1970-01-01T00:00:00Z).
    pub fn unix_timestamp(self) -> i64 {
        self.date.rata_die() * 86_400 + i64::from(self.time.second_of_day())
            - i64::from(self.offset.seconds())
    }

    /// Creates a `DateTime` from a Unix timestamp, expressed in the given
    /// offset's wall clock.
    ///
    /// # Errors
    ///
    /// Returns [`CivilError::Overflow`] or [`CivilError::YearOutOfRange`]
    /// if the timestamp is unrepresentable.
    pub fn from_unix(seconds: i64, offset: Offset) -> Result<Self, CivilError> {
        let local = seconds
            .checked_add(i64::from(offset.seconds()))
            .ok_or(CivilError::Overflow)?;
        let date = Date::from_rata_die(local.div_euclid(86_400))?;
        let time = Time::from_second_of_day(local.rem_euclid(86_400) as u32);
        Ok(Self { date, time, offset })
    }

    /// Parses an RFC 3339 timestamp: `YYYY-MM-DDTHH:MM[:SS][Z|+HH:MM|-HH:MM]`.
    ///
    /// Seconds default to zero and the offset defaults to UTC when omitted.
    /// A space or lowercase `t` is accepted as the date/time separator.
    ///
    /// # Errors
    ///
    /// Returns [`CivilError::InvalidTimestamp`] on malformed input, or the
    /// relevant field-validation error when a component is out of range.
    pub fn parse_rfc3339(text: &str) -> Result<Self, CivilError> {
        let malformed = |reason: &'static str| CivilError::InvalidTimestamp {
            text: text.to_string(),
            reason,
        };
        let bytes = text.as_bytes();
        if !text.is_ascii() || bytes.len() < 16 {
            return Err(malformed("expected YYYY-MM-DDTHH:MM"));
        }
        if bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(malformed("expected - date separators"));
        }
        if !matches!(bytes[10], b'T' | b't' | b' ') {
            return Err(malformed("expected T between date and time"));
        }
        if bytes[13] != b':' {
            return Err(malformed("expected : time separator"));
        }
        let year: i32 = text[0..4].parse().map_err(|_| malformed("bad year"))?;
        let month: u8 = text[5..7].parse().map_err(|_| malformed("bad month"))?;
        let day: u8 = text[8..10].parse().map_err(|_| malformed("bad day"))?;
        let hour: u8 = text[11..13].parse().map_err(|_| malformed("bad hour"))?;
        let minute: u8 = text[14..16].parse().map_err(|_| malformed("bad minute"))?;

        let rest = &text[16..];
        let (second, rest) = if let Some(sec_text) = rest.strip_prefix(':') {
            if sec_text.len() < 2 {
                return Err(malformed("bad second"));
            }
            let second: u8 = sec_text[0..2].parse().map_err(|_| malformed("bad second"))?;
            (second, &sec_text[2..])
        } else {
            (0, rest)
        };
        let offset = if rest.is_empty() {
            Offset::UTC
        } else {
            Offset::parse(rest)?
        };

        Ok(Self {
            date: Date::new(year, month, day)?,
            time: Time::new(hour, minute, second)?,
            offset,
        })
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}T{}{}", self.date, self.time, self.offset)
    }
}
