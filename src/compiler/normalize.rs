//! Removal of redundant leading wildcards.
//!
//! Patterns are searched unanchored, so a leading `^.*` or `.*` adds nothing
//! but backtracking work. A single leading `.` is kept: it requires at least
//! one character before the rest of the pattern.

use crate::context::DiagnosticContext;
use tracing::warn;

/// Pattern substituted when a pattern consists only of wildcards.
pub const MATCH_ALL: &str = ".*";

const ANCHORED_WILDCARD: &str = "^.*";
const WILDCARD: &str = ".*";

/// What normalization did to a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WildcardChange {
    Unchanged,
    /// Leading wildcards were stripped; the rest is kept.
    Reduced,
    /// Nothing but wildcards; replaced by [`MATCH_ALL`].
    MatchesAll,
}

/// A normalized pattern and how it was derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub pattern: String,
    pub change: WildcardChange,
}

/// Strip a leading `^.*`, then every leading `.*` pair that follows.
///
/// # Examples
///
/// ```rust
/// use acl_regex::compiler::normalize::{normalize_wildcards, WildcardChange};
/// use acl_regex::DiagnosticContext;
///
/// let ctx = DiagnosticContext::default();
/// assert_eq!(normalize_wildcards("^.*abc", &ctx).pattern, "abc");
/// assert_eq!(normalize_wildcards("^.*", &ctx).change, WildcardChange::MatchesAll);
/// ```
pub fn normalize_wildcards(raw: &str, ctx: &DiagnosticContext) -> Normalized {
    let mut rest = raw.strip_prefix(ANCHORED_WILDCARD).unwrap_or(raw);
    while let Some(stripped) = rest.strip_prefix(WILDCARD) {
        rest = stripped;
    }

    if rest.is_empty() {
        warn!(
            file = ctx.file(),
            line = ctx.line(),
            config_line = ctx.raw_line(),
            "regular expression '{raw}' has only wildcards and matches all strings. Using '{MATCH_ALL}' instead."
        );
        return Normalized {
            pattern: MATCH_ALL.to_string(),
            change: WildcardChange::MatchesAll,
        };
    }

    if rest.len() != raw.len() {
        warn!(
            file = ctx.file(),
            line = ctx.line(),
            config_line = ctx.raw_line(),
            "regular expression '{raw}' has unnecessary wildcard(s). Using '{rest}' instead."
        );
        return Normalized {
            pattern: rest.to_string(),
            change: WildcardChange::Reduced,
        };
    }

    Normalized {
        pattern: raw.to_string(),
        change: WildcardChange::Unchanged,
    }
}
