//! # whence-engine
//!
//! Natural-language date/time resolution: free-form text plus a reference
//! instant in, an absolute instant out.
//!
//! ## Pipeline
//!
//! ```text
//! parse()
//!   ├─ whence_syntax::tokenize()      text -> tokens
//!   ├─ whence_syntax::match_tokens()  tokens -> expression
//!   └─ resolve::resolve()             expression + reference -> instant
//! ```
//!
//! The engine never reads the system clock; the reference instant is
//! always caller-supplied, so every call is a pure function and the crate
//! is testable without time mocking. Calls are independent and safe to
//! issue concurrently from any number of threads.
//!
//! ## Quick Start
//!
//! ```
//! use whence_civil::DateTime;
//! use whence_engine::parse;
//!
//! let reference = DateTime::parse_rfc3339("2022-12-04T20:00:00Z").unwrap();
//! let resolved = parse("tomorrow at 3pm", reference).unwrap();
//! assert_eq!(resolved.to_string(), "2022-12-05T15:00:00Z");
//! ```

mod error;
mod resolve;

pub use error::ParseError;
pub use resolve::resolve;

use tracing::debug;
use whence_civil::DateTime;

/// Parses `text` and resolves it against `reference`.
///
/// Strictly sequences tokenizer, matcher, and resolver; the first failing
/// stage's error is wrapped verbatim, never swallowed or retried.
///
/// # Errors
///
/// Returns [`ParseError::Lex`] for unscannable input,
/// [`ParseError::Syntax`] for out-of-grammar token sequences, and
/// [`ParseError::Range`] for impossible calendar values.
pub fn parse(text: &str, reference: DateTime) -> Result<DateTime, ParseError> {
    let tokens = whence_syntax::tokenize(text)?;
    debug!(n_tokens = tokens.len(), "tokenized input");
    let expr = whence_syntax::match_tokens(&tokens)?;
    debug!(?expr, "matched expression");
    let resolved = resolve(&expr, reference)?;
    debug!(%resolved, "resolved expression");
    Ok(resolved)
}
