//! Compilation of a single pattern into a list entry.

use crate::context::DiagnosticContext;
use crate::error::{AclError, Result};
use crate::matcher::{PatternEntry, PatternFlags, RegexEngine};
use tracing::{debug, error};

/// Compile `pattern` and append it to `target`.
///
/// An empty pattern is accepted without adding anything, but only while
/// `target` is still empty. This keeps the historic behavior of flushing an
/// empty merge buffer at the start of a list; an empty flush after entries
/// were produced is reported as [`AclError::EmptyPattern`].
pub fn compile_pattern(
    engine: &dyn RegexEngine,
    target: &mut Vec<PatternEntry>,
    pattern: &str,
    flags: PatternFlags,
    ctx: &DiagnosticContext,
) -> Result<()> {
    if pattern.is_empty() {
        return if target.is_empty() {
            Ok(())
        } else {
            debug!("empty regular expression after {} entries", target.len());
            Err(AclError::EmptyPattern)
        };
    }

    match engine.compile(pattern, flags) {
        Ok(regex) => {
            debug!("compiled '{pattern}' with flags {flags:?}");
            target.push(PatternEntry::new(pattern, flags, regex));
            Ok(())
        }
        Err(err) => {
            error!(
                file = ctx.file(),
                line = ctx.line(),
                config_line = ctx.raw_line(),
                "invalid regular expression: '{pattern}': {err}"
            );
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::DefaultRegexEngine;

    fn ctx() -> DiagnosticContext {
        DiagnosticContext::new("test.conf", 7, "acl test url_regex")
    }

    #[test]
    fn test_compile_appends_entry() {
        let mut target = Vec::new();
        let flags = PatternFlags::initial();
        compile_pattern(&DefaultRegexEngine, &mut target, "foo", flags, &ctx()).unwrap();

        assert_eq!(target.len(), 1);
        assert_eq!(target[0].as_str(), "foo");
        assert_eq!(target[0].flags(), flags);
        assert!(target[0].is_match("xfoox"));
    }

    #[test]
    fn test_invalid_pattern_leaves_target_untouched() {
        let mut target = Vec::new();
        let result = compile_pattern(
            &DefaultRegexEngine,
            &mut target,
            "foo(",
            PatternFlags::initial(),
            &ctx(),
        );
        assert!(matches!(result, Err(AclError::InvalidRegex { .. })));
        assert!(target.is_empty());
    }

    // Pins current behavior only: an empty pattern succeeds solely while the
    // target is empty.
    #[test]
    fn test_empty_pattern_depends_on_target() {
        let flags = PatternFlags::initial();
        let mut target = Vec::new();
        assert!(compile_pattern(&DefaultRegexEngine, &mut target, "", flags, &ctx()).is_ok());
        assert!(target.is_empty());

        compile_pattern(&DefaultRegexEngine, &mut target, "foo", flags, &ctx()).unwrap();
        assert_eq!(
            compile_pattern(&DefaultRegexEngine, &mut target, "", flags, &ctx()),
            Err(AclError::EmptyPattern)
        );
        assert_eq!(target.len(), 1);
    }
}
