//! Default regex engine backed by the `regex` crate.

use crate::error::AclError;
use crate::matcher::types::{CompiledRegex, PatternFlags, RegexEngine};
use regex::{Regex, RegexBuilder};
use std::sync::Arc;

/// Engine compiling patterns with [`regex::RegexBuilder`].
///
/// `regex` syntax is a superset of POSIX extended syntax for the constructs
/// access lists use, and `is_match` never records capture groups, so the
/// `EXTENDED` and `NO_CAPTURE` flags need no translation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRegexEngine;

impl DefaultRegexEngine {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug)]
struct RegexMatcher(Regex);

impl CompiledRegex for RegexMatcher {
    fn is_match(&self, haystack: &str) -> bool {
        self.0.is_match(haystack)
    }
}

impl RegexEngine for DefaultRegexEngine {
    fn compile(
        &self,
        pattern: &str,
        flags: PatternFlags,
    ) -> Result<Arc<dyn CompiledRegex>, AclError> {
        RegexBuilder::new(pattern)
            .case_insensitive(flags.is_case_insensitive())
            .build()
            .map(|regex| Arc::new(RegexMatcher(regex)) as Arc<dyn CompiledRegex>)
            .map_err(|e| AclError::InvalidRegex {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_sensitive_by_default() {
        let engine = DefaultRegexEngine::new();
        let compiled = engine.compile("Foo", PatternFlags::initial()).unwrap();
        assert!(compiled.is_match("xFoox"));
        assert!(!compiled.is_match("foo"));
    }

    #[test]
    fn test_case_insensitive_flag() {
        let engine = DefaultRegexEngine::new();
        let flags = PatternFlags::initial().with_case_insensitive(true);
        let compiled = engine.compile("Foo", flags).unwrap();
        assert!(compiled.is_match("FOO"));
        assert!(compiled.is_match("foo"));
    }

    #[test]
    fn test_unanchored_search() {
        let engine = DefaultRegexEngine::new();
        let compiled = engine.compile("(ab)|(cd)", PatternFlags::initial()).unwrap();
        assert!(compiled.is_match("xxcdxx"));
        assert!(!compiled.is_match("acbd"));
    }

    #[test]
    fn test_invalid_pattern() {
        let engine = DefaultRegexEngine::new();
        match engine.compile("a(b", PatternFlags::initial()) {
            Err(AclError::InvalidRegex { pattern, message }) => {
                assert_eq!(pattern, "a(b");
                assert!(!message.is_empty());
            }
            other => panic!("Expected InvalidRegex, got {other:?}"),
        }
    }
}
