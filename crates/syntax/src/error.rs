//! Error types for the whence-syntax crate.

use crate::token::keyword_text;
use crate::token::Keyword;

/// Error type for input the tokenizer cannot scan at all.
///
/// Ordinary unknown words do not reach this error; they become
/// `Unrecognized` tokens so the matcher can report a position. `LexError`
/// is reserved for structurally unscannable input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// Returned when a character cannot begin any token.
    #[error("unexpected character {ch:?} at offset {offset}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Character offset in the normalized input.
        offset: usize,
    },

    /// Returned when a numeric run does not fit in an `i64`.
    #[error("number too large at offset {offset}")]
    NumberOutOfRange {
        /// Character offset in the normalized input.
        offset: usize,
    },
}

/// Token class accepted at some point in the grammar, for diagnostics.
///
/// A field-free mirror of the token kinds plus `End`; `Unrecognized` has
/// no counterpart here because it is never acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Number,
    Unit,
    Weekday,
    Month,
    Direction,
    Clock,
    IsoDate,
    IsoTime,
    IsoDateTime,
    Keyword(Keyword),
    End,
}

impl std::fmt::Display for TokenClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenClass::Number => f.write_str("a number"),
            TokenClass::Unit => f.write_str("a unit"),
            TokenClass::Weekday => f.write_str("a weekday"),
            TokenClass::Month => f.write_str("a month"),
            TokenClass::Direction => f.write_str("a direction word"),
            TokenClass::Clock => f.write_str("a clock time"),
            TokenClass::IsoDate => f.write_str("an ISO date"),
            TokenClass::IsoTime => f.write_str("an ISO time"),
            TokenClass::IsoDateTime => f.write_str("an ISO date-time"),
            TokenClass::Keyword(k) => write!(f, "`{}`", keyword_text(*k)),
            TokenClass::End => f.write_str("end of input"),
        }
    }
}

fn expected_list(expected: &[TokenClass]) -> String {
    expected
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Error type for a token sequence that does not form a valid expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "syntax error at position {position}: found {found}, expected {}",
    expected_list(.expected)
)]
pub struct SyntaxError {
    /// Index of the offending token (equal to the token count when the
    /// input ended too early).
    pub position: usize,
    /// Human rendering of what was found, e.g. `the word "banana"`.
    pub found: String,
    /// The set of token classes that would have been accepted instead.
    pub expected: Vec<TokenClass>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_error_message() {
        let err = LexError::UnexpectedChar { ch: '%', offset: 4 };
        assert_eq!(err.to_string(), "unexpected character '%' at offset 4");
    }

    #[test]
    fn syntax_error_message() {
        let err = SyntaxError {
            position: 0,
            found: "the word \"banana\"".to_string(),
            expected: vec![TokenClass::Number, TokenClass::Keyword(Keyword::Next)],
        };
        assert_eq!(
            err.to_string(),
            "syntax error at position 0: found the word \"banana\", expected a number or `next`"
        );
    }

    #[test]
    fn errors_are_std_errors() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<LexError>();
        assert_impl::<SyntaxError>();
    }

    #[test]
    fn errors_are_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<LexError>();
        assert_impl::<SyntaxError>();
    }
}
