//! Resource limits for lexing
//!
//! These limits stop hostile input from making a single token or a single
//! parse unboundedly expensive.

/// Resource limits applied by the lexer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerLimits {
    /// Maximum input size in bytes
    /// Default: 1,000,000
    pub max_input_bytes: usize,

    /// Maximum number of fragments in one composite word
    /// Default: 10,000
    pub max_word_fragments: usize,
}

impl Default for LexerLimits {
    fn default() -> Self {
        Self {
            max_input_bytes: 1_000_000,
            max_word_fragments: 10_000,
        }
    }
}

impl LexerLimits {
    /// Create new limits with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum input size
    pub fn max_input_bytes(mut self, bytes: usize) -> Self {
        self.max_input_bytes = bytes;
        self
    }

    /// Set maximum fragments per word
    pub fn max_word_fragments(mut self, count: usize) -> Self {
        self.max_word_fragments = count;
        self
    }

    /// Reject inputs larger than `max_input_bytes`.
    pub fn check_input(&self, len: usize) -> Result<(), LimitExceeded> {
        if len > self.max_input_bytes {
            return Err(LimitExceeded::MaxInputBytes(self.max_input_bytes));
        }
        Ok(())
    }

    /// Reject words holding more than `max_word_fragments` fragments.
    pub fn check_fragments(&self, count: usize) -> Result<(), LimitExceeded> {
        if count > self.max_word_fragments {
            return Err(LimitExceeded::MaxWordFragments(self.max_word_fragments));
        }
        Ok(())
    }
}

/// Error returned when a resource limit is exceeded
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LimitExceeded {
    #[error("maximum input size exceeded ({0} bytes)")]
    MaxInputBytes(usize),

    #[error("maximum word fragments exceeded ({0})")]
    MaxWordFragments(usize),
}
