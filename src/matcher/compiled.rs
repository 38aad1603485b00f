//! Compiled pattern entry.

use crate::matcher::types::{CompiledRegex, PatternFlags};
use std::fmt;
use std::sync::Arc;

/// One compiled pattern of a pattern list.
///
/// The matcher is always derived from exactly `(pattern, flags)`. When the
/// optimizer merges several patterns, `pattern` is the whole alternation
/// expression, e.g. `(foo)|(bar)`.
#[derive(Clone)]
pub struct PatternEntry {
    flags: PatternFlags,
    pattern: Arc<str>,
    regex: Arc<dyn CompiledRegex>,
}

impl PatternEntry {
    pub(crate) fn new(pattern: &str, flags: PatternFlags, regex: Arc<dyn CompiledRegex>) -> Self {
        Self {
            flags,
            pattern: Arc::from(pattern),
            regex,
        }
    }

    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// Source text the matcher was compiled from.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn is_match(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }
}

impl fmt::Debug for PatternEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternEntry")
            .field("flags", &self.flags)
            .field("pattern", &self.pattern)
            .finish()
    }
}

impl fmt::Display for PatternEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
