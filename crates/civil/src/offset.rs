//! Fixed UTC offset.

use crate::error::CivilError;

/// A fixed offset from UTC in seconds, strictly between -24h and +24h.
///
/// The engine never derives offsets itself; a resolved instant always
/// carries the offset of the reference instant it was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset(i32);

impl Offset {
    /// The UTC offset (zero).
    pub const UTC: Offset = Offset(0);

    /// Creates an `Offset` from a signed second count.
    ///
    /// # Errors
    ///
    /// Returns [`CivilError::InvalidOffset`] if `seconds` is not strictly
    /// between -86400 and +86400.
    pub fn from_seconds(seconds: i32) -> Result<Self, CivilError> {
        if seconds.abs() >= 86_400 {
            return Err(CivilError::InvalidOffset { seconds });
        }
        Ok(Self(seconds))
    }

    /// Returns the offset in seconds east of UTC (negative = west).
    pub fn seconds(self) -> i32 {
        self.0
    }

    /// Parses an offset of the form `Z`, `+HH:MM`, or `-HH:MM`.
    ///
    /// # Errors
    ///
    /// Returns [`CivilError::InvalidTimestamp`] on any other shape and
    /// [`CivilError::InvalidOffset`] if the parsed value is out of range.
    pub fn parse(text: &str) -> Result<Self, CivilError> {
        if text == "Z" || text == "z" {
            return Ok(Self::UTC);
        }
        let bytes = text.as_bytes();
        let malformed = || CivilError::InvalidTimestamp {
            text: text.to_string(),
            reason: "offset must be Z or +HH:MM/-HH:MM",
        };
        if !text.is_ascii() || bytes.len() != 6 || bytes[3] != b':' {
            return Err(malformed());
        }
        let sign = match bytes[0] {
            b'+' => 1,
            b'-' => -1,
            _ => return Err(malformed()),
        };
        let hours: i32 = text[1..3].parse().map_err(|_| malformed())?;
        let minutes: i32 = text[4..6].parse().map_err(|_| malformed())?;
        if minutes > 59 {
            return Err(malformed());
        }
        Self::from_seconds(sign * (hours * 3600 + minutes * 60))
    }
}

impl std::fmt::Display for Offset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 0 {
            return f.write_str("Z");
        }
        let sign = if self.0 < 0 { '-' } else { '+' };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{:02}:{:02}", sign, abs / 3600, abs / 60 % 60)
    }
}
