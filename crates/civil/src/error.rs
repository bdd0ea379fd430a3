//! Error types for the whence-civil crate.

/// Error type for all fallible operations in the whence-civil crate.
///
/// Covers validation failures for calendar fields, fixed UTC offsets,
/// and arithmetic that would leave the representable year range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CivilError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number is invalid for the given month and year.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year for which the day is invalid (February depends on it).
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when an hour value is outside the valid range 0..=23.
    #[error("invalid hour: {hour} (must be 0..=23)")]
    InvalidHour {
        /// The invalid hour value that was provided.
        hour: u8,
    },

    /// Returned when a minute value is outside the valid range 0..=59.
    #[error("invalid minute: {minute} (must be 0..=59)")]
    InvalidMinute {
        /// The invalid minute value that was provided.
        minute: u8,
    },

    /// Returned when a second value is outside the valid range 0..=59.
    #[error("invalid second: {second} (must be 0..=59)")]
    InvalidSecond {
        /// The invalid second value that was provided.
        second: u8,
    },

    /// Returned when a UTC offset is not strictly between -24h and +24h.
    #[error("invalid utc offset: {seconds}s (must be within +/-86400 exclusive)")]
    InvalidOffset {
        /// The invalid offset in seconds.
        seconds: i32,
    },

    /// Returned when date arithmetic produces a year outside `i32`.
    #[error("year out of range after calendar arithmetic")]
    YearOutOfRange,

    /// Returned when an intermediate calendar computation overflows.
    #[error("date arithmetic overflow")]
    Overflow,

    /// Returned when a timestamp string is not valid RFC 3339.
    #[error("invalid timestamp {text:?}: {reason}")]
    InvalidTimestamp {
        /// The offending input text.
        text: String,
        /// Description of the problem.
        reason: &'static str,
    },
}
