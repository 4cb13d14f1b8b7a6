//! Token types produced by the lexer
//!
//! Single-character punctuation and multi-character operators share one enum,
//! so a grammar can match every token the lexer produces in a single `match`.

use serde::Serialize;

use super::word::Word;

/// Reserved words. Recognized only for words made purely of literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Keyword {
    If,
    Else,
    Begin,
    End,
    Function,
}

impl Keyword {
    const ALL: [Keyword; 5] = [
        Keyword::If,
        Keyword::Else,
        Keyword::Begin,
        Keyword::End,
        Keyword::Function,
    ];

    /// The keyword spelled `text`, if any.
    pub fn from_literal(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kw| kw.as_str() == text)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::Begin => "begin",
            Keyword::End => "end",
            Keyword::Function => "function",
        }
    }
}

/// Token types produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Token {
    /// End of input. Returned again on every later call.
    Eof,

    /// Semicolon (;)
    Semicolon,

    /// Newline character
    Newline,

    /// Pipe (|)
    Pipe,

    /// Redirect input (<)
    RedirectIn,

    /// Bare left parenthesis (()
    LeftParen,

    /// Bare right parenthesis ())
    RightParen,

    /// Redirect output (>)
    RedirectOut,

    /// Redirect output append (>>)
    RedirectAppend,

    /// Redirect output to a descriptor (>&N, >&-). Payload holds one FD fragment.
    RedirectToFd(Word),

    /// Redirect stderr (^)
    ErrRedirect,

    /// Redirect stderr append (^^)
    ErrRedirectAppend,

    /// Redirect stderr to a descriptor (^&N, ^&-). Payload holds one FD fragment.
    ErrRedirectToFd(Word),

    /// A composite word (command name, argument, etc.). Never empty.
    Str(Word),

    /// A reserved word; carries no payload.
    Keyword(Keyword),

    /// A word glued to a following `(`, e.g. `echo(`
    StrLeftParen(Word),

    /// A `)` glued to a following word, e.g. `)foo`
    RightParenStr(Word),

    /// `)word(`. The word is empty for a bare `)(`.
    RightParenStrLeftParen(Word),

    /// Any other special character met where no word had started (`*`, `{`, `&`, ...)
    Punct(char),
}

impl Token {
    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }

    /// The word carried by this token, if any.
    pub fn payload(&self) -> Option<&Word> {
        match self {
            Token::RedirectToFd(w)
            | Token::ErrRedirectToFd(w)
            | Token::Str(w)
            | Token::StrLeftParen(w)
            | Token::RightParenStr(w)
            | Token::RightParenStrLeftParen(w) => Some(w),
            _ => None,
        }
    }

    /// Short human-readable name, used in logs.
    pub fn describe(&self) -> &'static str {
        match self {
            Token::Eof => "EOF",
            Token::Semicolon => "';'",
            Token::Newline => "newline",
            Token::Pipe => "'|'",
            Token::RedirectIn => "'<'",
            Token::LeftParen => "'('",
            Token::RightParen => "')'",
            Token::RedirectOut => "'>'",
            Token::RedirectAppend => "'>>'",
            Token::RedirectToFd(_) => "'>&'",
            Token::ErrRedirect => "'^'",
            Token::ErrRedirectAppend => "'^^'",
            Token::ErrRedirectToFd(_) => "'^&'",
            Token::Str(_) => "STR",
            Token::Keyword(_) => "keyword",
            Token::StrLeftParen(_) => "STR '('",
            Token::RightParenStr(_) => "')' STR",
            Token::RightParenStrLeftParen(_) => "')' STR '('",
            Token::Punct(_) => "punctuation",
        }
    }
}
