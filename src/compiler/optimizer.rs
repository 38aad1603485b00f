//! Merging of consecutive patterns into alternation expressions.
//!
//! The goal is one compiled expression per rule, so a lookup runs the regex
//! engine once instead of once per configured pattern. Patterns are wrapped
//! in their own group and joined with `|`:
//!
//! ```text
//! foo  bar  -i  baz   =>   (foo)|(bar)   [case-sensitive]
//!                          (baz)         [case-insensitive]
//! ```
//!
//! A new expression is started whenever the case-sensitivity flag changes or
//! the merge buffer reaches the configured chunk threshold. Any compile
//! failure aborts the whole pass so the caller can fall back to compiling
//! patterns one by one.

use crate::config::{AclConfig, DEFAULT_CHUNK_THRESHOLD};
use crate::context::DiagnosticContext;
use crate::error::Result;
use crate::matcher::{PatternEntry, PatternFlags, RegexEngine};
use crate::token::{Token, CASE_INSENSITIVE_MARKER, CASE_SENSITIVE_MARKER};
use tracing::{debug, warn};

use super::pattern::compile_pattern;

/// In-progress alternation expression.
///
/// Its content is always a complete alternation of groups, so it can be
/// compiled on its own at every flush point.
#[derive(Debug)]
pub(crate) struct MergeBuffer {
    expr: String,
    limit: usize,
}

impl MergeBuffer {
    pub(crate) fn new(chunk_threshold: usize) -> Self {
        Self {
            expr: String::with_capacity(chunk_threshold.min(DEFAULT_CHUNK_THRESHOLD)),
            limit: chunk_threshold.saturating_sub(1),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.expr.is_empty()
    }

    #[cfg(test)]
    fn as_str(&self) -> &str {
        &self.expr
    }

    /// Bytes `pattern` would add: the pattern, its group parentheses, one
    /// more byte, and a separator when the buffer is not empty.
    fn added_len(&self, pattern: &str) -> usize {
        pattern.len() + 3 + usize::from(!self.expr.is_empty())
    }

    pub(crate) fn fits(&self, pattern: &str) -> bool {
        self.expr.len() + self.added_len(pattern) < self.limit
    }

    pub(crate) fn push(&mut self, pattern: &str) {
        if !self.expr.is_empty() {
            self.expr.push('|');
        }
        self.expr.push('(');
        self.expr.push_str(pattern);
        self.expr.push(')');
    }

    pub(crate) fn take(&mut self) -> String {
        std::mem::take(&mut self.expr)
    }
}

struct Merger<'a> {
    engine: &'a dyn RegexEngine,
    ctx: &'a DiagnosticContext,
    merged: Vec<PatternEntry>,
    buffer: MergeBuffer,
    flags: PatternFlags,
    pattern_count: usize,
}

impl<'a> Merger<'a> {
    fn flush(&mut self) -> Result<()> {
        let expr = self.buffer.take();
        compile_pattern(self.engine, &mut self.merged, &expr, self.flags, self.ctx)
    }

    fn set_case_insensitive(&mut self, enabled: bool) -> Result<()> {
        let marker = if enabled {
            CASE_INSENSITIVE_MARKER
        } else {
            CASE_SENSITIVE_MARKER
        };
        if self.flags.is_case_insensitive() == enabled {
            debug!("optimisation of {marker} ... {marker}");
            return Ok(());
        }
        debug!("{marker}");
        self.flush()?;
        self.flags = self.flags.with_case_insensitive(enabled);
        Ok(())
    }

    fn add_pattern(&mut self, pattern: &str) -> Result<()> {
        if !self.buffer.fits(pattern) {
            if !self.buffer.is_empty() {
                debug!("buffer full, generating new optimised RE...");
                self.flush()?;
            }
            if !self.buffer.fits(pattern) {
                // Compiled bare so its dumped source never exceeds the input limit.
                debug!("RE '{pattern}' does not fit the buffer, compiling it alone");
                compile_pattern(self.engine, &mut self.merged, pattern, self.flags, self.ctx)?;
                self.pattern_count += 1;
                return Ok(());
            }
        }
        debug!("adding RE '{pattern}'");
        self.buffer.push(pattern);
        self.pattern_count += 1;
        Ok(())
    }

    fn finish(mut self) -> Result<(Vec<PatternEntry>, usize)> {
        if !self.buffer.is_empty() {
            self.flush()?;
        }
        Ok((self.merged, self.pattern_count))
    }
}

/// Compile `tokens` into as few alternation expressions as possible.
///
/// Returns the new entries, or the first compile error; in that case nothing
/// of the partial result is kept.
pub fn compile_optimised(
    engine: &dyn RegexEngine,
    config: &AclConfig,
    tokens: &[Token],
    ctx: &DiagnosticContext,
) -> Result<Vec<PatternEntry>> {
    let mut merger = Merger {
        engine,
        ctx,
        merged: Vec::new(),
        buffer: MergeBuffer::new(config.chunk_threshold),
        flags: PatternFlags::initial(),
        pattern_count: 0,
    };

    for token in tokens {
        match token {
            Token::CaseInsensitive => merger.set_case_insensitive(true)?,
            Token::CaseSensitive => merger.set_case_insensitive(false)?,
            Token::Pattern(pattern) => merger.add_pattern(pattern)?,
        }
    }

    let (merged, pattern_count) = merger.finish()?;

    debug!(
        "{pattern_count} REs are optimised into {} RE(s).",
        merged.len()
    );
    if pattern_count > config.merge_warning_threshold {
        let threshold = config.merge_warning_threshold;
        if config.parse_only {
            warn!(
                file = ctx.file(),
                line = ctx.line(),
                config_line = ctx.raw_line(),
                "there are more than {threshold} regular expressions. Consider using less REs or use rules without expressions like 'dstdomain'."
            );
        } else {
            debug!(
                file = ctx.file(),
                line = ctx.line(),
                config_line = ctx.raw_line(),
                "there are more than {threshold} regular expressions. Consider using less REs or use rules without expressions like 'dstdomain'."
            );
        }
    }

    Ok(merged)
}
