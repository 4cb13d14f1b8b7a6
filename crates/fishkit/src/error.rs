//! Error types for Fishkit
//!
//! Every error the lexer can raise is fatal to the current parse: there is no
//! recovery and no warning tier. Scan errors carry the position they were
//! detected at.

use std::num::ParseIntError;

use thiserror::Error;

use crate::limits::LimitExceeded;
use crate::parser::Position;

/// Result type alias using Fishkit's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Which quoting mode was left open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteKind {
    Single,
    Double,
}

impl std::fmt::Display for QuoteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteKind::Single => f.write_str("single"),
            QuoteKind::Double => f.write_str("double"),
        }
    }
}

/// Fishkit error types.
#[derive(Error, Debug)]
pub enum Error {
    /// End of input inside a quoted region. `pos` is the opening quote.
    #[error("unterminated {quote} quote starting at {pos}")]
    UnterminatedQuote { quote: QuoteKind, pos: Position },

    /// A literal run matched no characters.
    #[error("expected identifier at {pos}")]
    EmptyIdent { pos: Position },

    /// `$` not followed by a name character.
    #[error("expected variable name after $ at {pos}")]
    InvalidVarName { pos: Position },

    /// The digits after `>&` / `^&` do not form a descriptor number.
    #[error("invalid file descriptor {text:?} at {pos}")]
    InvalidFd {
        text: String,
        pos: Position,
        #[source]
        source: ParseIntError,
    },

    /// Lexer resource limit exceeded.
    #[error("resource limit exceeded: {0}")]
    ResourceLimit(#[from] LimitExceeded),
}

impl Error {
    /// Where a scan error was detected. `None` for limit errors.
    pub fn position(&self) -> Option<Position> {
        match self {
            Error::UnterminatedQuote { pos, .. }
            | Error::EmptyIdent { pos }
            | Error::InvalidVarName { pos }
            | Error::InvalidFd { pos, .. } => Some(*pos),
            Error::ResourceLimit(_) => None,
        }
    }
}
