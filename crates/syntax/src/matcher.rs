//! Grammar matcher: token sequence to expression tree.
//!
//! A single-pass recursive-descent parser with no backtracking across
//! productions. The first token's kind selects the production family;
//! `Number` needs a one-token lookahead (a following unit means a
//! relative offset). Informal grammar:
//!
//! ```text
//! expr      := primary (At? Clock)? END
//! primary   := iso | clock | relative | inRel | anchor | kwLiteral
//! relative  := Number Unit (Ago | From Now | Direction)
//! inRel     := In Number Unit
//! anchor    := (Next | Last) (Weekday | Month | Unit)
//! kwLiteral := Today | Tomorrow | Yesterday | Now
//! ```

use crate::error::{SyntaxError, TokenClass};
use crate::expr::{Absolute, ClockTime, Expr};
use crate::token::{Direction, Keyword, Meridiem, Token, TokenKind, Unit};

/// Token classes that can start an expression.
const EXPR_START: &[TokenClass] = &[
    TokenClass::Number,
    TokenClass::Clock,
    TokenClass::IsoDate,
    TokenClass::IsoTime,
    TokenClass::IsoDateTime,
    TokenClass::Keyword(Keyword::Next),
    TokenClass::Keyword(Keyword::Last),
    TokenClass::Keyword(Keyword::In),
    TokenClass::Keyword(Keyword::At),
    TokenClass::Keyword(Keyword::Today),
    TokenClass::Keyword(Keyword::Tomorrow),
    TokenClass::Keyword(Keyword::Yesterday),
    TokenClass::Keyword(Keyword::Now),
];

/// Matches a token sequence against the grammar, producing an expression.
///
/// # Errors
///
/// Returns [`SyntaxError`] on the first token that cannot extend the
/// current production, carrying the token position and the set of token
/// classes that would have been accepted there.
pub fn match_tokens(tokens: &[Token]) -> Result<Expr, SyntaxError> {
    let mut matcher = Matcher { tokens, pos: 0 };
    let base = matcher.primary()?;
    let expr = matcher.time_clause(base)?;
    matcher.end()?;
    Ok(expr)
}

struct Matcher<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Matcher<'_> {
    fn peek(&self) -> Option<&TokenKind> {
        self.tokens.get(self.pos).map(|t| &t.kind)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Builds a syntax error at the current position.
    fn unexpected(&self, expected: &[TokenClass]) -> SyntaxError {
        let found = match self.tokens.get(self.pos) {
            Some(token) => token.kind.describe(),
            None => "end of input".to_string(),
        };
        SyntaxError {
            position: self.pos,
            found,
            expected: expected.to_vec(),
        }
    }

    fn end(&self) -> Result<(), SyntaxError> {
        if self.pos == self.tokens.len() {
            Ok(())
        } else {
            Err(self.unexpected(&[TokenClass::End]))
        }
    }

    fn primary(&mut self) -> Result<Expr, SyntaxError> {
        match self.peek() {
            Some(&TokenKind::IsoDate { year, month, day }) => {
                self.advance();
                Ok(Expr::Absolute(Absolute {
                    year: Some(year),
                    month: Some(month),
                    day: Some(day),
                    ..Absolute::default()
                }))
            }
            Some(&TokenKind::IsoTime {
                hour,
                minute,
                second,
            }) => {
                self.advance();
                Ok(Expr::Absolute(Absolute {
                    hour: Some(hour),
                    minute: Some(minute),
                    second,
                    ..Absolute::default()
                }))
            }
            Some(&TokenKind::IsoDateTime {
                year,
                month,
                day,
                hour,
                minute,
                second,
            }) => {
                self.advance();
                Ok(Expr::Absolute(Absolute {
                    year: Some(year),
                    month: Some(month),
                    day: Some(day),
                    hour: Some(hour),
                    minute: Some(minute),
                    second,
                }))
            }
            Some(TokenKind::Clock { .. }) | Some(TokenKind::Keyword(Keyword::At)) => {
                // A leading clock ("3pm", "at 3pm") is "today at that
                // time": an empty absolute base whose time clause is
                // consumed by the caller. Nothing is consumed here.
                Ok(Expr::Absolute(Absolute::default()))
            }
            Some(&TokenKind::Number(quantity)) => {
                self.advance();
                self.relative_tail(quantity)
            }
            Some(TokenKind::Keyword(Keyword::In)) => {
                self.advance();
                let quantity = match self.peek() {
                    Some(&TokenKind::Number(n)) => n,
                    _ => return Err(self.unexpected(&[TokenClass::Number])),
                };
                self.advance();
                let unit = self.expect_unit()?;
                Ok(Expr::Relative {
                    quantity,
                    unit,
                    direction: Direction::Forward,
                })
            }
            Some(TokenKind::Keyword(Keyword::Next)) => {
                self.advance();
                self.anchor_tail(Direction::Forward)
            }
            Some(TokenKind::Keyword(Keyword::Last)) => {
                self.advance();
                self.anchor_tail(Direction::Backward)
            }
            Some(TokenKind::Keyword(Keyword::Today | Keyword::Now)) => {
                self.advance();
                Ok(Expr::Relative {
                    quantity: 0,
                    unit: Unit::Day,
                    direction: Direction::Forward,
                })
            }
            Some(TokenKind::Keyword(Keyword::Tomorrow)) => {
                self.advance();
                Ok(Expr::Relative {
                    quantity: 1,
                    unit: Unit::Day,
                    direction: Direction::Forward,
                })
            }
            Some(TokenKind::Keyword(Keyword::Yesterday)) => {
                self.advance();
                Ok(Expr::Relative {
                    quantity: 1,
                    unit: Unit::Day,
                    direction: Direction::Backward,
                })
            }
            _ => Err(self.unexpected(EXPR_START)),
        }
    }

    /// Continues after `Number`: a unit, then an explicit or inferred
    /// direction ("ago", "from now", "later", "earlier").
    fn relative_tail(&mut self, quantity: i64) -> Result<Expr, SyntaxError> {
        let unit = self.expect_unit()?;
        let direction = match self.peek() {
            Some(TokenKind::Keyword(Keyword::Ago)) => {
                self.advance();
                Direction::Backward
            }
            Some(TokenKind::Keyword(Keyword::From)) => {
                self.advance();
                match self.peek() {
                    Some(TokenKind::Keyword(Keyword::Now)) => {
                        self.advance();
                        Direction::Forward
                    }
                    _ => return Err(self.unexpected(&[TokenClass::Keyword(Keyword::Now)])),
                }
            }
            Some(&TokenKind::Direction(direction)) => {
                self.advance();
                direction
            }
            _ => {
                return Err(self.unexpected(&[
                    TokenClass::Keyword(Keyword::Ago),
                    TokenClass::Keyword(Keyword::From),
                    TokenClass::Direction,
                ]))
            }
        };
        Ok(Expr::Relative {
            quantity,
            unit,
            direction,
        })
    }

    /// Continues after `Next`/`Last`: a weekday anchor, a month anchor, or
    /// a one-unit relative ("next week").
    fn anchor_tail(&mut self, direction: Direction) -> Result<Expr, SyntaxError> {
        match self.peek() {
            Some(&TokenKind::Weekday(weekday)) => {
                self.advance();
                Ok(Expr::WeekdayAnchor {
                    weekday,
                    direction,
                    inclusive: false,
                })
            }
            Some(&TokenKind::Month(month)) => {
                self.advance();
                Ok(Expr::MonthAnchor { month, direction })
            }
            Some(&TokenKind::Unit(unit)) => {
                self.advance();
                Ok(Expr::Relative {
                    quantity: 1,
                    unit,
                    direction,
                })
            }
            _ => Err(self.unexpected(&[
                TokenClass::Weekday,
                TokenClass::Month,
                TokenClass::Unit,
            ])),
        }
    }

    fn expect_unit(&mut self) -> Result<Unit, SyntaxError> {
        match self.peek() {
            Some(&TokenKind::Unit(unit)) => {
                self.advance();
                Ok(unit)
            }
            _ => Err(self.unexpected(&[TokenClass::Unit])),
        }
    }

    /// Wraps `base` in a `Compound` if a trailing time-of-day follows,
    /// with or without a leading `at`.
    fn time_clause(&mut self, base: Expr) -> Result<Expr, SyntaxError> {
        let explicit_at = matches!(self.peek(), Some(TokenKind::Keyword(Keyword::At)));
        if explicit_at {
            self.advance();
        }
        match self.peek() {
            Some(&TokenKind::Clock {
                hour,
                minute,
                second,
                meridiem,
            }) => {
                self.advance();
                Ok(Expr::Compound {
                    base: Box::new(base),
                    time: normalize_clock(hour, minute, second, meridiem),
                })
            }
            _ if explicit_at => Err(self.unexpected(&[TokenClass::Clock])),
            _ => Ok(base),
        }
    }
}

/// Applies the meridiem (12am is 0, 12pm is 12) and zeroes omitted
/// seconds. Out-of-range hours survive and fail at resolution.
fn normalize_clock(
    hour: u8,
    minute: u8,
    second: Option<u8>,
    meridiem: Option<Meridiem>,
) -> ClockTime {
    let hour = match meridiem {
        Some(Meridiem::Pm) if hour != 12 => hour + 12,
        Some(Meridiem::Am) if hour == 12 => 0,
        _ => hour,
    };
    ClockTime {
        hour,
        minute,
        second: second.unwrap_or(0),
    }
}
