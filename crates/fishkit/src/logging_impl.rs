//! Logging infrastructure for Fishkit
//!
//! Structured logging goes through the `tracing` crate when the `logging`
//! feature is enabled. Source text can hold secrets, so by default log
//! records describe tokens by kind and size instead of by content.
//!
//! # Log Levels
//!
//! - **WARN**: A scan error aborted lexing
//! - **DEBUG**: One record per produced token (when `LexerOptions::debug` is set)
//! - **TRACE**: Comment skips and other scanner-internal steps

use std::borrow::Cow;

use crate::parser::{Fragment, Token, Word};

/// Configuration for what lexer log records may contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Whether word text may appear in logs (default: false)
    /// WARN: Setting this to true may log sensitive data in scripts
    pub log_source_content: bool,

    /// Maximum length of logged values before truncation (default: 200)
    pub max_value_length: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_source_content: false,
            max_value_length: 200,
        }
    }
}

impl LogConfig {
    /// Create a new log configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable logging of word text (UNSAFE)
    ///
    /// # Warning
    ///
    /// Scripts may contain embedded secrets, credentials, or sensitive data.
    pub fn unsafe_log_source(mut self) -> Self {
        self.log_source_content = true;
        self
    }

    /// Set maximum length for logged values
    pub fn max_value_length(mut self, len: usize) -> Self {
        self.max_value_length = len;
        self
    }

    /// Truncate value if it exceeds max length, respecting char boundaries.
    pub fn truncate<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if value.len() <= self.max_value_length {
            Cow::Borrowed(value)
        } else {
            let mut end = self.max_value_length;
            while end > 0 && !value.is_char_boundary(end) {
                end -= 1;
            }
            Cow::Owned(format!(
                "{}...[truncated {} bytes]",
                &value[..end],
                value.len() - end
            ))
        }
    }
}

/// Escape characters that could forge extra log lines.
pub fn sanitize_for_log(input: &str) -> String {
    input
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
        .chars()
        .filter(|c| !c.is_control())
        .collect()
}

/// Describe a word for a log record.
///
/// Without `log_source_content` only the fragment count is shown.
pub fn format_word_for_log(word: &Word, config: &LogConfig) -> String {
    if !config.log_source_content {
        return format!("[word: {} fragments]", word.len());
    }

    let mut text = String::new();
    for fragment in word {
        match fragment {
            Fragment::Ident(i) => text.push_str(&i.name),
            Fragment::Var(v) => {
                text.push('$');
                text.push_str(&v.name);
            }
            Fragment::Fd(fd) => match fd.target {
                crate::parser::FdTarget::Num(n) => text.push_str(&n.to_string()),
                crate::parser::FdTarget::Close => text.push('-'),
            },
        }
    }
    config.truncate(&sanitize_for_log(&text)).into_owned()
}

/// Describe a token for a log record.
pub fn format_token_for_log(token: &Token, config: &LogConfig) -> String {
    match (token, token.payload()) {
        (Token::Keyword(kw), _) => format!("keyword {}", kw.as_str()),
        (Token::Punct(c), _) => format!("punctuation {:?}", c),
        (_, Some(word)) => format!("{} {}", token.describe(), format_word_for_log(word, config)),
        (_, None) => token.describe().to_string(),
    }
}
