//! Parser front end for Fishkit
//!
//! Turns source text into tokens. The grammar that builds the AST from these
//! tokens lives outside this crate; it drives [`Lexer::next_token`] and
//! treats any error as a failed parse.

mod lexer;
mod scanner;
mod span;
mod tokens;
mod word;

pub use lexer::{Lexer, LexerOptions, SpannedToken, tokenize};
pub use scanner::Scanner;
pub use span::{Position, Span};
pub use tokens::{Keyword, Token};
pub use word::{Fd, FdTarget, Fragment, Ident, VarExpr, Word};
