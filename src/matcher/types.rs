//! Core type definitions for the regex-engine capability.

use crate::error::AclError;
use std::fmt;
use std::sync::Arc;

/// Compile flags handed to the regex engine.
///
/// Mirrors the POSIX `REG_EXTENDED`, `REG_NOSUB` and `REG_ICASE` bits. Only
/// the case-insensitivity bit ever changes while a list is compiled; the
/// other two are always set.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatternFlags(u8);

impl PatternFlags {
    pub const EXTENDED: Self = Self(0b001);
    pub const NO_CAPTURE: Self = Self(0b010);
    pub const CASE_INSENSITIVE: Self = Self(0b100);

    /// Flags every list starts with: extended syntax, no capture, case-sensitive.
    pub const fn initial() -> Self {
        Self(Self::EXTENDED.0 | Self::NO_CAPTURE.0)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_case_insensitive(self) -> bool {
        self.contains(Self::CASE_INSENSITIVE)
    }

    /// Copy of these flags with the case-insensitivity bit set or cleared.
    pub const fn with_case_insensitive(self, enabled: bool) -> Self {
        if enabled {
            Self(self.0 | Self::CASE_INSENSITIVE.0)
        } else {
            Self(self.0 & !Self::CASE_INSENSITIVE.0)
        }
    }
}

impl Default for PatternFlags {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Debug for PatternFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        if self.contains(Self::EXTENDED) {
            names.push("EXTENDED");
        }
        if self.contains(Self::NO_CAPTURE) {
            names.push("NO_CAPTURE");
        }
        if self.contains(Self::CASE_INSENSITIVE) {
            names.push("CASE_INSENSITIVE");
        }
        write!(f, "PatternFlags({})", names.join(" | "))
    }
}

impl fmt::Display for PatternFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#05b}", self.0)
    }
}

/// A compiled pattern produced by a [`RegexEngine`].
///
/// Implementations must be immutable after construction so a list can be
/// shared across request-handling threads.
pub trait CompiledRegex: Send + Sync + fmt::Debug {
    /// Unanchored search: true if the pattern matches anywhere in `haystack`.
    fn is_match(&self, haystack: &str) -> bool;
}

/// The "compile pattern with flags" capability.
///
/// # Example
/// ```rust
/// use acl_regex::{DefaultRegexEngine, PatternFlags, RegexEngine};
///
/// let engine = DefaultRegexEngine::new();
/// let flags = PatternFlags::initial().with_case_insensitive(true);
/// let compiled = engine.compile("example\\.com", flags).unwrap();
/// assert!(compiled.is_match("WWW.EXAMPLE.COM"));
/// ```
pub trait RegexEngine: Send + Sync {
    fn compile(&self, pattern: &str, flags: PatternFlags)
        -> Result<Arc<dyn CompiledRegex>, AclError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_flags() {
        let flags = PatternFlags::initial();
        assert!(flags.contains(PatternFlags::EXTENDED));
        assert!(flags.contains(PatternFlags::NO_CAPTURE));
        assert!(!flags.is_case_insensitive());
        assert_eq!(flags, PatternFlags::default());
    }

    #[test]
    fn test_toggle_case_insensitive() {
        let on = PatternFlags::initial().with_case_insensitive(true);
        assert!(on.is_case_insensitive());
        assert!(on.contains(PatternFlags::EXTENDED));

        let off = on.with_case_insensitive(false);
        assert_eq!(off, PatternFlags::initial());
    }

    #[test]
    fn test_debug_lists_names() {
        let flags = PatternFlags::initial().with_case_insensitive(true);
        assert_eq!(
            format!("{flags:?}"),
            "PatternFlags(EXTENDED | NO_CAPTURE | CASE_INSENSITIVE)"
        );
        assert_eq!(
            format!("{:?}", PatternFlags::initial()),
            "PatternFlags(EXTENDED | NO_CAPTURE)"
        );
    }

    #[test]
    fn test_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn CompiledRegex>();
        assert_send_sync::<dyn RegexEngine>();
    }
}
