//! Pattern-list compiler.
//!
//! Turns the raw token sequence of one access-control rule into compiled
//! [`PatternEntry`] values. The work is split into stages:
//! - [`normalize`] - strips redundant leading wildcards from each pattern
//! - [`pattern`] - compiles a single pattern through the [`RegexEngine`]
//! - [`optimizer`] - merges consecutive patterns into alternation expressions
//! - [`fallback`] - compiles every pattern on its own when merging fails
//!
//! # Examples
//!
//! ```rust
//! use acl_regex::{DiagnosticContext, PatternCompiler};
//!
//! let compiler = PatternCompiler::new();
//! let ctx = DiagnosticContext::new("squid.conf", 12, "acl ads url_regex -i ^.*ads banner");
//! let entries = compiler.compile(["-i", "^.*ads", "banner"], &ctx);
//!
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].as_str(), "(ads)|(banner)");
//! ```

pub mod fallback;
pub mod normalize;
pub mod optimizer;
pub mod pattern;

use crate::config::AclConfig;
use crate::context::DiagnosticContext;
use crate::error::{AclError, Result};
use crate::matcher::{DefaultRegexEngine, PatternEntry, RegexEngine};
use crate::token::Token;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, trace, warn};

pub use fallback::compile_unoptimised;
pub use normalize::{normalize_wildcards, Normalized, WildcardChange, MATCH_ALL};
pub use optimizer::compile_optimised;
pub use pattern::compile_pattern;

/// Compiles token sequences into pattern entries.
///
/// Cheap to clone: the engine is shared.
#[derive(Clone)]
pub struct PatternCompiler {
    engine: Arc<dyn RegexEngine>,
    config: AclConfig,
}

impl PatternCompiler {
    /// Create a compiler using the `regex` crate and default settings.
    pub fn new() -> Self {
        Self {
            engine: Arc::new(DefaultRegexEngine::new()),
            config: AclConfig::default(),
        }
    }

    /// Create a compiler using the `regex` crate.
    ///
    /// Fails with [`AclError::InvalidConfig`] if `config` does not validate.
    pub fn with_config(config: AclConfig) -> Result<Self> {
        Self::with_engine(Arc::new(DefaultRegexEngine::new()), config)
    }

    /// Create a compiler using a custom engine.
    ///
    /// Fails with [`AclError::InvalidConfig`] if `config` does not validate.
    pub fn with_engine(engine: Arc<dyn RegexEngine>, config: AclConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { engine, config })
    }

    pub fn config(&self) -> &AclConfig {
        &self.config
    }

    pub fn engine(&self) -> &dyn RegexEngine {
        self.engine.as_ref()
    }

    /// Classify and normalize raw tokens.
    ///
    /// Patterns that are still too long for the merge buffer after
    /// normalization are logged and dropped.
    pub fn prepare<I, S>(&self, raw_tokens: I, ctx: &DiagnosticContext) -> Vec<Token>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = Vec::new();
        for raw in raw_tokens {
            match Token::from_raw(raw.as_ref()) {
                Token::Pattern(text) => {
                    let clean = normalize_wildcards(&text, ctx).pattern;
                    match self.check_length(&clean) {
                        Ok(()) => {
                            trace!("buffering RE '{clean}'");
                            tokens.push(Token::Pattern(clean));
                        }
                        Err(err) => error!(
                            file = ctx.file(),
                            line = ctx.line(),
                            config_line = ctx.raw_line(),
                            "Skipping regular expression. {err}: '{clean}'"
                        ),
                    }
                }
                toggle => tokens.push(toggle),
            }
        }
        tokens
    }

    fn check_length(&self, pattern: &str) -> Result<()> {
        let limit = self.config.max_pattern_len();
        if pattern.len() > limit {
            return Err(AclError::PatternTooLong {
                length: pattern.len(),
                limit,
            });
        }
        Ok(())
    }

    /// Compile already prepared tokens, falling back to per-pattern
    /// compilation if the optimised pass fails.
    pub fn compile_tokens(&self, tokens: &[Token], ctx: &DiagnosticContext) -> Vec<PatternEntry> {
        match compile_optimised(self.engine(), &self.config, tokens, ctx) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(
                    file = ctx.file(),
                    line = ctx.line(),
                    config_line = ctx.raw_line(),
                    "optimisation of regular expressions failed ({err}); using fallback method without optimisation"
                );
                compile_unoptimised(self.engine(), tokens, ctx)
            }
        }
    }

    /// Prepare and compile a raw token sequence.
    pub fn compile<I, S>(&self, raw_tokens: I, ctx: &DiagnosticContext) -> Vec<PatternEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        debug!("new Regex line or file");
        let tokens = self.prepare(raw_tokens, ctx);
        self.compile_tokens(&tokens, ctx)
    }
}

impl Default for PatternCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PatternCompiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternCompiler")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> DiagnosticContext {
        DiagnosticContext::new("test.conf", 3, "acl t url_regex")
    }

    #[test]
    fn test_prepare_normalizes_and_classifies() {
        let compiler = PatternCompiler::new();
        let tokens = compiler.prepare(["-i", "^.*foo", ".*", "+i", "bar"], &ctx());
        assert_eq!(
            tokens,
            vec![
                Token::CaseInsensitive,
                Token::Pattern("foo".to_string()),
                Token::Pattern(".*".to_string()),
                Token::CaseSensitive,
                Token::Pattern("bar".to_string()),
            ]
        );
    }

    #[test]
    fn test_prepare_drops_too_long_patterns() {
        let compiler = PatternCompiler::with_config(AclConfig::default().with_chunk_threshold(10)).unwrap();
        let tokens = compiler.prepare(["123456789", "1234567890", "ok"], &ctx());
        assert_eq!(
            tokens,
            vec![
                Token::Pattern("123456789".to_string()),
                Token::Pattern("ok".to_string()),
            ]
        );
    }

    #[test]
    fn test_length_checked_after_normalization() {
        let compiler = PatternCompiler::with_config(AclConfig::default().with_chunk_threshold(10)).unwrap();
        let tokens = compiler.prepare(["^.*.*123456789"], &ctx());
        assert_eq!(tokens, vec![Token::Pattern("123456789".to_string())]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        for threshold in [0, 7, usize::MAX] {
            let result = PatternCompiler::with_config(
                AclConfig::default().with_chunk_threshold(threshold),
            );
            assert!(
                matches!(result, Err(AclError::InvalidConfig(_))),
                "threshold {threshold}"
            );
        }
    }

    #[test]
    fn test_compile_merges() {
        let entries = PatternCompiler::new().compile(["foo", "bar"], &ctx());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].as_str(), "(foo)|(bar)");
    }

    #[test]
    fn test_compile_falls_back_on_invalid_pattern() {
        let entries = PatternCompiler::new().compile(["foo", "b(ar", "baz"], &ctx());
        let sources: Vec<&str> = entries.iter().map(PatternEntry::as_str).collect();
        assert_eq!(sources, vec!["foo", "baz"]);
    }

    #[test]
    fn test_compile_accepts_owned_strings() {
        let raw = vec!["-i".to_string(), "Foo".to_string()];
        let entries = PatternCompiler::default().compile(&raw, &ctx());
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_match("FOO"));
    }
}
