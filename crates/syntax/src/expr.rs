//! Parsed, unresolved expression tree.

use whence_civil::Weekday;

use crate::token::{Direction, Unit};

/// Explicit calendar/clock fields of an absolute expression.
///
/// Any `None` field inherits its value from the reference instant at
/// resolution time. Field values are raw and only range-validated by the
/// resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Absolute {
    pub year: Option<i32>,
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub hour: Option<u8>,
    pub minute: Option<u8>,
    pub second: Option<u8>,
}

/// A normalized time-of-day override: meridiem already applied, omitted
/// seconds already zeroed. Values may still be out of range; the resolver
/// rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// The output of the grammar matcher and sole input (besides the
/// reference instant) to the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal date and/or time; unset fields inherit from the reference.
    Absolute(Absolute),
    /// An offset from the reference, e.g. "3 days ago".
    Relative {
        quantity: i64,
        unit: Unit,
        direction: Direction,
    },
    /// The nearest matching weekday in the given direction, e.g.
    /// "next monday". When `inclusive` is false the reference day itself
    /// never matches, even if it falls on the named weekday.
    WeekdayAnchor {
        weekday: Weekday,
        direction: Direction,
        inclusive: bool,
    },
    /// The nearest matching calendar month in the given direction, e.g.
    /// "next december". The reference month itself never matches.
    MonthAnchor { month: u8, direction: Direction },
    /// A base expression with a time-of-day override, e.g.
    /// "tomorrow at 3pm". `base` is never itself a `Compound`; the matcher
    /// flattens while building.
    Compound { base: Box<Expr>, time: ClockTime },
}
