//! # whence-civil
//!
//! Pure proleptic-Gregorian calendar arithmetic.
//!
//! This crate owns every calendar-correctness concern of the engine:
//! leap years, month lengths, day-of-month clamping, weekday computation,
//! and Unix-epoch conversion. It has no notion of parsing or grammar; the
//! resolver builds on these primitives.
//!
//! ## Quick Start
//!
//! ```
//! use whence_civil::{Date, DateTime};
//!
//! // Month arithmetic clamps to the end of the target month.
//! let date = Date::new(2023, 1, 31).unwrap();
//! assert_eq!(date.add_months(1).unwrap(), Date::new(2023, 2, 28).unwrap());
//!
//! // Instants carry a fixed offset and format as RFC 3339.
//! let t = DateTime::parse_rfc3339("2022-12-04T20:00:00+05:30").unwrap();
//! assert_eq!(t.add_days(1).unwrap().to_string(), "2022-12-05T20:00:00+05:30");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Validated calendar date, rata-die conversion, clamped arithmetic |
//! | `time` | Wall-clock time of day |
//! | `offset` | Fixed UTC offset |
//! | `datetime` | Date + time + offset, Unix conversion, RFC 3339 |
//! | `weekday` | Day-of-week type |
//! | `error` | Error types |

mod date;
mod datetime;
mod error;
mod offset;
mod time;
mod weekday;

pub use date::{days_in_month, is_leap_year, Date};
pub use datetime::DateTime;
pub use error::CivilError;
pub use offset::Offset;
pub use time::Time;
pub use weekday::Weekday;
