//! One-expression-per-pattern compilation.
//!
//! Used when the optimised pass fails. Each pattern is compiled on its own,
//! so a bad pattern only costs itself; its siblings stay usable.

use crate::context::DiagnosticContext;
use crate::matcher::{PatternEntry, PatternFlags, RegexEngine};
use crate::token::Token;
use tracing::error;

use super::pattern::compile_pattern;

pub fn compile_unoptimised(
    engine: &dyn RegexEngine,
    tokens: &[Token],
    ctx: &DiagnosticContext,
) -> Vec<PatternEntry> {
    let mut entries = Vec::new();
    let mut flags = PatternFlags::initial();

    for token in tokens {
        match token {
            Token::CaseInsensitive => flags = flags.with_case_insensitive(true),
            Token::CaseSensitive => flags = flags.with_case_insensitive(false),
            Token::Pattern(pattern) => {
                if compile_pattern(engine, &mut entries, pattern, flags, ctx).is_err() {
                    error!(
                        file = ctx.file(),
                        line = ctx.line(),
                        config_line = ctx.raw_line(),
                        "Skipping regular expression. Compile failed: '{pattern}'"
                    );
                }
            }
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::DefaultRegexEngine;

    fn compile(raw: &[&str]) -> Vec<PatternEntry> {
        let tokens: Vec<Token> = raw.iter().copied().map(Token::from_raw).collect();
        compile_unoptimised(&DefaultRegexEngine, &tokens, &DiagnosticContext::default())
    }

    #[test]
    fn test_one_entry_per_pattern() {
        let entries = compile(&["foo", "bar"]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].as_str(), "foo");
        assert_eq!(entries[1].as_str(), "bar");
    }

    #[test]
    fn test_invalid_pattern_skipped() {
        let entries = compile(&["foo", "ba(r", "baz"]);
        let sources: Vec<&str> = entries.iter().map(PatternEntry::as_str).collect();
        assert_eq!(sources, vec!["foo", "baz"]);
    }

    #[test]
    fn test_toggles_apply_to_following_patterns() {
        let entries = compile(&["-i", "foo", "+i", "bar", "+i", "baz"]);
        assert!(entries[0].flags().is_case_insensitive());
        assert!(!entries[1].flags().is_case_insensitive());
        assert!(!entries[2].flags().is_case_insensitive());
        assert!(entries[0].is_match("FOO"));
        assert!(!entries[1].is_match("BAR"));
    }

    #[test]
    fn test_toggles_only_produce_nothing() {
        assert!(compile(&["-i", "+i", "-i"]).is_empty());
    }
}
