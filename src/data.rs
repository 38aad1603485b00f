//! Pattern list owned by one access-control rule.

use crate::compiler::PatternCompiler;
use crate::context::DiagnosticContext;
use crate::matcher::{PatternEntry, PatternFlags};
use crate::token::Token;
use tracing::{debug, trace};

/// Ordered list of compiled patterns queried on every access check.
///
/// The list is built by [`parse`](RegexData::parse) and is read-only
/// afterwards; a new parse replaces it wholesale. Lookups take `&self` and
/// never allocate, so a built list can be shared between threads.
///
/// # Examples
///
/// ```rust
/// use acl_regex::{DiagnosticContext, RegexData};
///
/// let mut data = RegexData::new();
/// data.parse(["-i", "\\.example\\.com$", "+i", "^intranet"], &DiagnosticContext::default());
///
/// assert!(data.matches(Some("www.EXAMPLE.com")));
/// assert!(!data.matches(Some("Intranet")));
/// assert!(!data.matches(None));
/// assert_eq!(data.dump(), vec!["-i", "(\\.example\\.com$)", "+i", "(^intranet)"]);
/// ```
#[derive(Debug, Default)]
pub struct RegexData {
    entries: Vec<PatternEntry>,
    compiler: PatternCompiler,
}

impl RegexData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list that compiles with the given compiler.
    pub fn with_compiler(compiler: PatternCompiler) -> Self {
        Self {
            entries: Vec::new(),
            compiler,
        }
    }

    /// Build from a raw token sequence in one step.
    pub fn from_tokens<I, S>(compiler: PatternCompiler, raw_tokens: I, ctx: &DiagnosticContext) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut data = Self::with_compiler(compiler);
        data.parse(raw_tokens, ctx);
        data
    }

    /// Compile `raw_tokens` and replace the current list with the result.
    ///
    /// Compile problems never fail the parse: they are logged and the list
    /// keeps whatever compiled, possibly nothing.
    pub fn parse<I, S>(&mut self, raw_tokens: I, ctx: &DiagnosticContext)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.entries = self.compiler.compile(raw_tokens, ctx);
    }

    /// True if any pattern matches `word`.
    ///
    /// `None` and the empty string never match.
    pub fn matches(&self, word: Option<&str>) -> bool {
        let Some(word) = word.filter(|w| !w.is_empty()) else {
            return false;
        };

        trace!("checking '{word}'");
        match self.entries.iter().find(|entry| entry.is_match(word)) {
            Some(entry) => {
                debug!("'{}' found in '{word}'", entry.as_str());
                true
            }
            None => false,
        }
    }

    /// Token sequence that rebuilds an equivalent list when parsed again.
    pub fn dump_tokens(&self) -> Vec<Token> {
        let mut tokens = Vec::with_capacity(self.entries.len());
        let mut emitted = PatternFlags::initial();

        for entry in &self.entries {
            let case_insensitive = entry.flags().is_case_insensitive();
            if case_insensitive != emitted.is_case_insensitive() {
                tokens.push(if case_insensitive {
                    Token::CaseInsensitive
                } else {
                    Token::CaseSensitive
                });
                emitted = emitted.with_case_insensitive(case_insensitive);
            }
            tokens.push(Token::Pattern(entry.as_str().to_string()));
        }

        tokens
    }

    /// Wire form of [`dump_tokens`](RegexData::dump_tokens).
    pub fn dump(&self) -> Vec<String> {
        self.dump_tokens()
            .into_iter()
            .map(|token| match token {
                Token::Pattern(text) => text,
                marker => marker.as_str().to_string(),
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of compiled expressions, not configured patterns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    pub fn compiler(&self) -> &PatternCompiler {
        &self.compiler
    }
}

/// Cloning is only supported for an empty list.
///
/// # Panics
///
/// Panics if the list holds any compiled pattern.
impl Clone for RegexData {
    fn clone(&self) -> Self {
        assert!(
            self.entries.is_empty(),
            "cannot clone a non-empty regex pattern list"
        );
        Self::with_compiler(self.compiler.clone())
    }
}
