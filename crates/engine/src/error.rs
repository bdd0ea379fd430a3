//! Error type for the whence-engine crate.

use whence_civil::CivilError;
use whence_syntax::{LexError, SyntaxError};

/// Error type for the full parse pipeline.
///
/// The three stages fail with three distinct kinds, wrapped verbatim and
/// never conflated: unscannable input, an out-of-grammar token sequence,
/// or a grammatically valid expression whose resolution produced an
/// impossible calendar value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The tokenizer could not scan the input at all.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The token sequence does not form a valid expression.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// Resolution produced an out-of-range calendar value.
    #[error("value out of range: {0}")]
    Range(#[from] CivilError),
}
