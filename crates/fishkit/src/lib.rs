//! Fishkit - Lexer and AST walker for a fish-like shell command language
//!
//! The lexer turns script text into tokens for a grammar to consume; the
//! walker traverses the statement tree that grammar builds.
//!
//! # Example
//!
//! ```rust
//! use fishkit::ast::{CmdStmt, Expr, Node, Stmt, inspect};
//! use fishkit::parser::{Keyword, Lexer, Token};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut lexer = Lexer::new("if test $x; echo \"hi $name\"; end");
//!     assert_eq!(lexer.next_token()?, Token::Keyword(Keyword::If));
//!
//!     let Token::Str(cmd) = lexer.next_token()? else { unreachable!() };
//!     let Token::Str(arg) = lexer.next_token()? else { unreachable!() };
//!     assert_eq!(cmd.literal_text().as_deref(), Some("test"));
//!     assert_eq!(arg.len(), 1);
//!
//!     let stmts = vec![Stmt::Cmd(CmdStmt {
//!         cmd: Expr::Str(cmd),
//!         args: vec![Expr::Str(arg)],
//!     })];
//!     let mut entered = 0;
//!     inspect(Node::Stmts(&stmts), |node| {
//!         entered += usize::from(node.is_some());
//!         true
//!     });
//!     // Stmts, CmdStmt, two StrExprs, one Exprs and their two fragments
//!     assert_eq!(entered, 7);
//!     Ok(())
//! }
//! ```

mod error;
mod limits;
mod logging_impl;

pub mod ast;
pub mod parser;

pub use error::{Error, QuoteKind, Result};
pub use limits::{LexerLimits, LimitExceeded};
pub use logging_impl::{LogConfig, format_token_for_log, format_word_for_log, sanitize_for_log};
pub use parser::{Lexer, LexerOptions, Token, tokenize};
