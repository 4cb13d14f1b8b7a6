//! Character source and the low-level scanners built on it
//!
//! `Scanner` is a position-aware cursor over the input. The routines here
//! each consume one syntactic piece (a literal run, a `$name`, an FD literal,
//! a quoted region) and turn it into word fragments. The lexer decides which
//! one to call.

use super::span::Position;
use super::word::{Fd, FdTarget, Fragment, Ident, VarExpr};
use crate::error::{Error, QuoteKind, Result};

/// Characters that end an unquoted literal run. End of input is special too.
const SPECIALS: &[char] = &[
    '\t', '\n', '$', '?', '*', '~', '#', '(', ')', '{', '}', '[', ']', '<', '>', '^', '&', ';',
    '\'', '"', '\\', ' ',
];

/// Characters that end a literal run inside '...'
const SINGLE_QUOTED_SPECIALS: &[char] = &['\\', '\''];

/// Characters that end a literal run inside "..."
const DOUBLE_QUOTED_SPECIALS: &[char] = &['\\', '"', '$'];

/// Whether `ch` ends an unquoted word. `None` is end of input.
pub fn is_special(ch: Option<char>) -> bool {
    ch.is_none_or(|c| SPECIALS.contains(&c))
}

fn is_ident_char(c: char) -> bool {
    !SPECIALS.contains(&c)
}

fn is_single_quoted_char(c: char) -> bool {
    !SINGLE_QUOTED_SPECIALS.contains(&c)
}

fn is_double_quoted_char(c: char) -> bool {
    !DOUBLE_QUOTED_SPECIALS.contains(&c)
}

fn is_var_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Position-aware cursor over the input characters.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    position: Position,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            position: Position::new(),
        }
    }

    /// The next character, or `None` at end of input.
    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Consume one character.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next();
        if let Some(c) = ch {
            self.position.advance(c);
        }
        ch
    }

    /// Position of the next character.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn skip_blanks(&mut self) {
        while self.peek().is_some_and(is_blank) {
            self.advance();
        }
    }

    /// Skip a `#` comment up to, not including, the newline.
    pub fn skip_comment(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    /// Consume the maximal run of characters accepted by `accept`.
    fn scan_run(&mut self, accept: fn(char) -> bool) -> Result<Ident> {
        let pos = self.position;
        let mut name = String::new();
        while let Some(c) = self.peek().filter(|&c| accept(c)) {
            name.push(c);
            self.advance();
        }
        if name.is_empty() {
            return Err(Error::EmptyIdent { pos });
        }
        Ok(Ident { name, pos })
    }

    /// Scan a bare literal run.
    pub fn scan_ident(&mut self) -> Result<Ident> {
        self.scan_run(is_ident_char)
    }

    /// Scan `$name`. The cursor must be on the `$`.
    pub fn scan_var(&mut self) -> Result<VarExpr> {
        let pos = self.position;
        self.advance(); // $
        let mut name = String::new();
        while let Some(c) = self.peek().filter(|&c| is_var_char(c)) {
            name.push(c);
            self.advance();
        }
        if name.is_empty() {
            return Err(Error::InvalidVarName { pos });
        }
        Ok(VarExpr { name, pos })
    }

    /// Scan `&-` or `&N`. The cursor must be on the `&`.
    pub fn scan_fd(&mut self) -> Result<Fd> {
        let pos = self.position;
        self.advance(); // &
        if self.peek() == Some('-') {
            self.advance();
            return Ok(Fd {
                target: FdTarget::Close,
                pos,
            });
        }

        let mut text = String::new();
        while let Some(c) = self.peek().filter(char::is_ascii_digit) {
            text.push(c);
            self.advance();
        }
        match text.parse::<u32>() {
            Ok(n) => Ok(Fd {
                target: FdTarget::Num(n),
                pos,
            }),
            Err(source) => Err(Error::InvalidFd { text, pos, source }),
        }
    }

    /// A backslash inside quotes has no escape meaning; it stands alone as a
    /// one-character literal.
    fn scan_backslash(&mut self) -> Ident {
        let pos = self.position;
        self.advance();
        Ident {
            name: "\\".to_string(),
            pos,
        }
    }

    /// Scan '...'. The cursor must be on the opening quote.
    pub fn scan_single_quoted(&mut self) -> Result<Vec<Fragment>> {
        let start = self.position;
        self.advance(); // '
        let mut fragments = Vec::new();
        loop {
            match self.peek() {
                None => {
                    return Err(Error::UnterminatedQuote {
                        quote: QuoteKind::Single,
                        pos: start,
                    });
                }
                Some('\'') => {
                    self.advance();
                    return Ok(fragments);
                }
                Some('\\') => fragments.push(self.scan_backslash().into()),
                Some(_) => fragments.push(self.scan_run(is_single_quoted_char)?.into()),
            }
        }
    }

    /// Scan "...". The cursor must be on the opening quote.
    pub fn scan_double_quoted(&mut self) -> Result<Vec<Fragment>> {
        let start = self.position;
        self.advance(); // "
        let mut fragments = Vec::new();
        loop {
            match self.peek() {
                None => {
                    return Err(Error::UnterminatedQuote {
                        quote: QuoteKind::Double,
                        pos: start,
                    });
                }
                Some('"') => {
                    self.advance();
                    return Ok(fragments);
                }
                Some('$') => fragments.push(self.scan_var()?.into()),
                Some('\\') => fragments.push(self.scan_backslash().into()),
                Some(_) => fragments.push(self.scan_run(is_double_quoted_char)?.into()),
            }
        }
    }
}
