//! Wall-clock time of day.

use crate::error::CivilError;

/// A validated wall-clock time of day (no date, no offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    hour: u8,
    minute: u8,
    second: u8,
}

impl Time {
    /// Midnight (00:00:00).
    pub const MIDNIGHT: Time = Time {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Creates a new `Time` from hour, minute, and second.
    ///
    /// # Errors
    ///
    /// Returns [`CivilError::InvalidHour`], [`CivilError::InvalidMinute`],
    /// or [`CivilError::InvalidSecond`] when a field is out of range.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, CivilError> {
        if hour > 23 {
            return Err(CivilError::InvalidHour { hour });
        }
        if minute > 59 {
            return Err(CivilError::InvalidMinute { minute });
        }
        if second > 59 {
            return Err(CivilError::InvalidSecond { second });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Creates a `Time` from a second-of-day value (0..=86399).
    ///
    /// This constructor is infallible for inputs produced by
    /// `rem_euclid(86400)`; other values are reduced modulo one day.
    pub fn from_second_of_day(seconds: u32) -> Self {
        let s = seconds % 86_400;
        Self {
            hour: (s / 3600) as u8,
            minute: (s / 60 % 60) as u8,
            second: (s % 60) as u8,
        }
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=59).
    pub fn second(self) -> u8 {
        self.second
    }

    /// Returns the second-of-day value (0..=86399).
    pub fn second_of_day(self) -> u32 {
        u32::from(self.hour) * 3600 + u32::from(self.minute) * 60 + u32::from(self.second)
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}
