//! Token types produced by the tokenizer.

use whence_civil::Weekday;

/// Calendar or clock unit for relative offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// Direction of a relative offset or anchor seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

/// Fixed vocabulary keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Today,
    Tomorrow,
    Yesterday,
    Now,
    Next,
    Last,
    Ago,
    From,
    At,
    In,
}

/// AM/PM marker on a clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

/// The tagged union of everything the tokenizer can produce.
///
/// ISO fragments carry raw numeric fields straight off the text; they are
/// only range-validated at resolution time, so `2022-13-01` lexes fine and
/// fails later as a range error rather than a syntax error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A bare numeric run, e.g. `3` in "3 days ago".
    Number(i64),
    /// A unit word, e.g. "days", "week".
    Unit(Unit),
    /// A weekday name, e.g. "monday", "fri".
    Weekday(Weekday),
    /// A month name, e.g. "december", "jan"; value is 1..=12.
    Month(u8),
    /// An explicit direction word, e.g. "later", "earlier".
    Direction(Direction),
    /// A clock time, e.g. `3pm`, `15:04`, `3:04:05pm`.
    Clock {
        hour: u8,
        minute: u8,
        second: Option<u8>,
        meridiem: Option<Meridiem>,
    },
    /// A grammar keyword, e.g. "next", "ago", "at".
    Keyword(Keyword),
    /// An ISO date fragment `YYYY-MM-DD`.
    IsoDate { year: i32, month: u8, day: u8 },
    /// An ISO time fragment `THH:MM(:SS)`.
    IsoTime {
        hour: u8,
        minute: u8,
        second: Option<u8>,
    },
    /// A combined ISO fragment `YYYY-MM-DDTHH:MM(:SS)`.
    IsoDateTime {
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: Option<u8>,
    },
    /// An alphabetic run not in any vocabulary table. Failure is deferred
    /// to the matcher so diagnostics can carry the token position.
    Unrecognized(String),
}

impl TokenKind {
    /// Renders the token for diagnostics, e.g. `the word "banana"`.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Number(n) => format!("the number {n}"),
            TokenKind::Unit(u) => format!("the unit {u:?}").to_lowercase(),
            TokenKind::Weekday(w) => format!("the weekday {w}"),
            TokenKind::Month(m) => format!("month {m}"),
            TokenKind::Direction(_) => "a direction word".to_string(),
            TokenKind::Clock { hour, minute, .. } => {
                format!("the clock time {hour}:{minute:02}")
            }
            TokenKind::Keyword(k) => format!("`{}`", keyword_text(*k)),
            TokenKind::IsoDate { .. } => "an ISO date".to_string(),
            TokenKind::IsoTime { .. } => "an ISO time".to_string(),
            TokenKind::IsoDateTime { .. } => "an ISO date-time".to_string(),
            TokenKind::Unrecognized(word) => format!("the word {word:?}"),
        }
    }
}

/// Canonical spelling of a keyword, for diagnostics.
pub(crate) fn keyword_text(keyword: Keyword) -> &'static str {
    match keyword {
        Keyword::Today => "today",
        Keyword::Tomorrow => "tomorrow",
        Keyword::Yesterday => "yesterday",
        Keyword::Now => "now",
        Keyword::Next => "next",
        Keyword::Last => "last",
        Keyword::Ago => "ago",
        Keyword::From => "from",
        Keyword::At => "at",
        Keyword::In => "in",
    }
}

/// A token plus its index in the token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// 0-based index of this token in the sequence; the position reported
    /// by syntax errors.
    pub pos: usize,
}
