//! Lexer for fish-like shell scripts
//!
//! Produces one token per call with source position tracking. Words are
//! assembled from bare text, quoted regions and `$name` references, and a
//! parenthesis touching a word is fused with it into a single token so the
//! grammar never has to look back.

use super::scanner::{Scanner, is_special};
use super::span::{Position, Span};
use super::tokens::{Keyword, Token};
use super::word::Word;
use crate::error::Result;
use crate::limits::LexerLimits;
use crate::logging_impl::LogConfig;

/// A token with its source location span.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

/// Options fixed when a lexer is constructed.
#[derive(Debug, Clone, Default)]
pub struct LexerOptions {
    /// Log every produced token at DEBUG level (needs the `logging` feature)
    pub debug: bool,
    pub limits: LexerLimits,
    pub log: LogConfig,
}

impl LexerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn limits(mut self, limits: LexerLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn log(mut self, log: LogConfig) -> Self {
        self.log = log;
        self
    }
}

/// Lexer for fish-like shell scripts.
pub struct Lexer<'a> {
    input: &'a str,
    scanner: Scanner<'a>,
    options: LexerOptions,
    /// Set once the iterator has yielded EOF or an error
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, LexerOptions::default())
    }

    pub fn with_options(input: &'a str, options: LexerOptions) -> Self {
        Self {
            input,
            scanner: Scanner::new(input),
            options,
            done: false,
        }
    }

    /// Get the current position in the input.
    pub fn position(&self) -> Position {
        self.scanner.position()
    }

    /// Get the next token from the input (without span info).
    ///
    /// Returns [`Token::Eof`] at end of input, and keeps returning it.
    /// Any error is fatal for the whole parse.
    pub fn next_token(&mut self) -> Result<Token> {
        self.next_spanned_token().map(|t| t.token)
    }

    /// Get the next token with its source span.
    pub fn next_spanned_token(&mut self) -> Result<SpannedToken> {
        let result = self.lex();
        #[cfg(feature = "logging")]
        self.log_result(&result);
        result
    }

    #[cfg(feature = "logging")]
    fn log_result(&self, result: &Result<SpannedToken>) {
        match result {
            Ok(t) if self.options.debug => tracing::debug!(
                token = %crate::logging_impl::format_token_for_log(&t.token, &self.options.log),
                span = %t.span,
                "lexed token"
            ),
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "lexing aborted"),
        }
    }

    fn lex(&mut self) -> Result<SpannedToken> {
        self.options.limits.check_input(self.input.len())?;

        loop {
            self.scanner.skip_blanks();
            let start = self.scanner.position();
            let Some(ch) = self.scanner.peek() else {
                return Ok(self.spanned(Token::Eof, start));
            };

            let token = match ch {
                '#' => {
                    self.scanner.skip_comment();
                    #[cfg(feature = "logging")]
                    tracing::trace!(line = start.line, "skipped comment");
                    continue;
                }
                '>' | '^' => self.scan_redirect(ch)?,
                ';' | '\n' | '|' | '<' => {
                    self.scanner.advance();
                    match ch {
                        ';' => Token::Semicolon,
                        '\n' => Token::Newline,
                        '|' => Token::Pipe,
                        _ => Token::RedirectIn,
                    }
                }
                _ => match self.scan_word()? {
                    Some(Token::Str(word)) => resolve_keyword(word),
                    Some(token) => token,
                    // Only empty quotes were consumed; they contribute nothing
                    None => continue,
                },
            };
            return Ok(self.spanned(token, start));
        }
    }

    fn spanned(&self, token: Token, start: Position) -> SpannedToken {
        SpannedToken {
            token,
            span: Span::from_positions(start, self.scanner.position()),
        }
    }

    /// `>` `>>` `>&N` `>&-` and the `^` stderr equivalents.
    fn scan_redirect(&mut self, op: char) -> Result<Token> {
        self.scanner.advance();
        let stdout = op == '>';
        let token = match self.scanner.peek() {
            Some('&') => {
                let mut target = Word::new();
                target.push(self.scanner.scan_fd()?);
                if stdout {
                    Token::RedirectToFd(target)
                } else {
                    Token::ErrRedirectToFd(target)
                }
            }
            Some(c) if c == op => {
                self.scanner.advance();
                if stdout {
                    Token::RedirectAppend
                } else {
                    Token::ErrRedirectAppend
                }
            }
            _ => {
                if stdout {
                    Token::RedirectOut
                } else {
                    Token::ErrRedirect
                }
            }
        };
        Ok(token)
    }

    /// Assemble one composite word, fusing adjacent parentheses.
    ///
    /// Returns `None` when nothing but empty quotes (`''`, `""`) was consumed.
    /// Such a word yields no token at all, so `cmd ''` has no argument: a
    /// quoted empty string cannot stand for an empty argument.
    fn scan_word(&mut self) -> Result<Option<Token>> {
        let start = self.scanner.position();
        let mut word = Word::new();
        // A `)` was consumed before any fragment
        let mut right_paren = false;

        loop {
            self.options.limits.check_fragments(word.len())?;

            match self.scanner.peek() {
                Some('$') => word.push(self.scanner.scan_var()?),
                Some('"') => word.extend(self.scanner.scan_double_quoted()?),
                Some('\'') => word.extend(self.scanner.scan_single_quoted()?),
                Some(')') => {
                    if !word.is_empty() {
                        // Leave `)` for the next call
                        return Ok(Some(finish_word(word, right_paren)));
                    }
                    if right_paren {
                        // `))`: the second `)` stays unconsumed
                        return Ok(Some(Token::RightParen));
                    }
                    self.scanner.advance();
                    right_paren = true;
                }
                Some('(') => {
                    self.scanner.advance();
                    let token = match (word.is_empty(), right_paren) {
                        (true, false) => Token::LeftParen,
                        (_, true) => Token::RightParenStrLeftParen(word),
                        (false, false) => Token::StrLeftParen(word),
                    };
                    return Ok(Some(token));
                }
                c if is_special(c) => {
                    if !word.is_empty() {
                        return Ok(Some(finish_word(word, right_paren)));
                    }
                    if right_paren {
                        return Ok(Some(Token::RightParen));
                    }
                    if self.scanner.position() != start {
                        return Ok(None);
                    }
                    // A special character with no word around it
                    return Ok(c.map(|c| {
                        self.scanner.advance();
                        Token::Punct(c)
                    }));
                }
                _ => word.push(self.scanner.scan_ident()?),
            }
        }
    }
}

fn finish_word(word: Word, right_paren: bool) -> Token {
    if right_paren {
        Token::RightParenStr(word)
    } else {
        Token::Str(word)
    }
}

/// Re-tag a purely literal word that spells a keyword.
fn resolve_keyword(word: Word) -> Token {
    match word
        .literal_text()
        .and_then(|text| Keyword::from_literal(&text))
    {
        Some(keyword) => Token::Keyword(keyword),
        None => Token::Str(word),
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<SpannedToken>;

    /// Yields tokens up to, not including, EOF. Stops after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_spanned_token() {
            Ok(t) if t.token.is_eof() => {
                self.done = true;
                None
            }
            Ok(t) => Some(Ok(t)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Lex the whole input, stopping before EOF.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).map(|t| t.map(|t| t.token)).collect()
}
