//! Copy-on-write publication of reparsed pattern lists.
//!
//! A [`RegexData`] is immutable once built. Reconfiguration parses into a
//! fresh list and swaps it in atomically, so lookups running concurrently
//! see either the old list or the new one, never a half-built one.
//!
//! # Usage
//!
//! ```rust
//! use acl_regex::{DiagnosticContext, ReloadableRegexData};
//! use std::thread;
//!
//! let acl = ReloadableRegexData::new();
//! acl.reload(["^internal\\."], &DiagnosticContext::default());
//!
//! let reader = acl.clone();
//! let handle = thread::spawn(move || reader.matches(Some("internal.example")));
//! assert!(handle.join().unwrap());
//! ```

use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::debug;

use crate::compiler::PatternCompiler;
use crate::context::DiagnosticContext;
use crate::data::RegexData;

/// Shared handle to a pattern list that can be replaced while in use.
///
/// Clones share the same list.
#[derive(Debug, Clone)]
pub struct ReloadableRegexData {
    inner: Arc<ArcSwap<RegexData>>,
    compiler: PatternCompiler,
}

impl ReloadableRegexData {
    pub fn new() -> Self {
        Self::with_compiler(PatternCompiler::new())
    }

    pub fn with_compiler(compiler: PatternCompiler) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(RegexData::with_compiler(
                compiler.clone(),
            ))),
            compiler,
        }
    }

    /// Parse `raw_tokens` into a new list and publish it.
    ///
    /// Returns the list that was replaced.
    pub fn reload<I, S>(&self, raw_tokens: I, ctx: &DiagnosticContext) -> Arc<RegexData>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let data = RegexData::from_tokens(self.compiler.clone(), raw_tokens, ctx);
        debug!("publishing pattern list with {} expression(s)", data.len());
        self.inner.swap(Arc::new(data))
    }

    /// The list currently published.
    pub fn snapshot(&self) -> Arc<RegexData> {
        self.inner.load_full()
    }

    pub fn matches(&self, word: Option<&str>) -> bool {
        self.inner.load().matches(word)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.load().is_empty()
    }

    pub fn dump(&self) -> Vec<String> {
        self.inner.load().dump()
    }
}

impl Default for ReloadableRegexData {
    fn default() -> Self {
        Self::new()
    }
}
