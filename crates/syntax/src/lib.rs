//! # whence-syntax
//!
//! Tokenizer and grammar matcher for the date/time expression language.
//!
//! Text flows one way: [`tokenize`] turns the input into an ordered token
//! sequence, [`match_tokens`] turns the sequence into a single [`Expr`].
//! Neither stage touches a clock; resolution against a reference instant
//! lives in `whence-engine`.
//!
//! ## Quick Start
//!
//! ```
//! use whence_syntax::{match_tokens, tokenize, Direction, Expr, Unit};
//!
//! let tokens = tokenize("3 days ago").unwrap();
//! let expr = match_tokens(&tokens).unwrap();
//! assert_eq!(
//!     expr,
//!     Expr::Relative {
//!         quantity: 3,
//!         unit: Unit::Day,
//!         direction: Direction::Backward,
//!     }
//! );
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `lexer` | Vocabulary tables and the left-to-right scanner |
//! | `matcher` | Recursive-descent grammar matcher |
//! | `token` | Token kinds |
//! | `expr` | Unresolved expression tree |
//! | `error` | Lex and syntax error types |

mod error;
mod expr;
mod lexer;
mod matcher;
mod token;

pub use error::{LexError, SyntaxError, TokenClass};
pub use expr::{Absolute, ClockTime, Expr};
pub use lexer::tokenize;
pub use matcher::match_tokens;
pub use token::{Direction, Keyword, Meridiem, Token, TokenKind, Unit};
