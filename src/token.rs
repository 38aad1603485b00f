//! Pattern tokens as delivered by the configuration tokenizer.
//!
//! On the wire a pattern list is a flat sequence of strings. Two reserved
//! strings switch case sensitivity for the patterns that follow:
//!
//! - [`CASE_INSENSITIVE_MARKER`] (`-i`) makes subsequent patterns case-insensitive
//! - [`CASE_SENSITIVE_MARKER`] (`+i`) switches back to case-sensitive matching
//!
//! Every other string is pattern text. Tokens are converted to [`Token`]
//! immediately on ingestion so the compiler never compares marker strings.

use std::fmt;

/// Wire marker switching subsequent patterns to case-insensitive matching.
pub const CASE_INSENSITIVE_MARKER: &str = "-i";

/// Wire marker switching subsequent patterns back to case-sensitive matching.
pub const CASE_SENSITIVE_MARKER: &str = "+i";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// `-i`
    CaseInsensitive,
    /// `+i`
    CaseSensitive,
    /// Pattern text.
    Pattern(String),
}

impl Token {
    /// Classify one raw token from the tokenizer.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            CASE_INSENSITIVE_MARKER => Token::CaseInsensitive,
            CASE_SENSITIVE_MARKER => Token::CaseSensitive,
            text => Token::Pattern(text.to_string()),
        }
    }

    /// Wire representation of this token.
    pub fn as_str(&self) -> &str {
        match self {
            Token::CaseInsensitive => CASE_INSENSITIVE_MARKER,
            Token::CaseSensitive => CASE_SENSITIVE_MARKER,
            Token::Pattern(text) => text,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Token {
    fn from(raw: &str) -> Self {
        Token::from_raw(raw)
    }
}
