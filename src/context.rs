//! Configuration-source location attached to every diagnostic.

use std::fmt;

/// Where the patterns being compiled came from.
///
/// The tokenizer that reads the configuration owns this information; it is
/// passed into parsing so warnings can point the operator at the offending
/// line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticContext {
    file: String,
    line: usize,
    raw_line: String,
}

impl DiagnosticContext {
    pub fn new(file: impl Into<String>, line: usize, raw_line: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            raw_line: raw_line.into(),
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }
}

impl fmt::Display for DiagnosticContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} line {}: {}", self.file, self.line, self.raw_line)
    }
}
