//! Pattern matching primitives.
//!
//! The crate never interprets regular expressions itself. It only decides
//! which strings are submitted to a regex engine and in what grouping. This
//! module holds the seam to that engine:
//!
//! - [`RegexEngine`] - the "compile pattern with flags" capability
//! - [`CompiledRegex`] - the compiled matcher it returns
//! - [`DefaultRegexEngine`] - implementation on top of the `regex` crate
//! - [`PatternEntry`] - one compiled pattern with its source text and flags
//!
//! Plugging in another engine only requires implementing [`RegexEngine`]:
//!
//! ```rust
//! use acl_regex::{AclError, CompiledRegex, PatternFlags, RegexEngine};
//! use std::sync::Arc;
//!
//! #[derive(Debug)]
//! struct Literal(String);
//!
//! impl CompiledRegex for Literal {
//!     fn is_match(&self, haystack: &str) -> bool {
//!         haystack.contains(self.0.as_str())
//!     }
//! }
//!
//! struct LiteralEngine;
//!
//! impl RegexEngine for LiteralEngine {
//!     fn compile(&self, pattern: &str, _flags: PatternFlags)
//!         -> Result<Arc<dyn CompiledRegex>, AclError> {
//!         Ok(Arc::new(Literal(pattern.to_string())))
//!     }
//! }
//! ```

pub mod compiled;
pub mod defaults;
pub mod types;

pub use compiled::PatternEntry;
pub use defaults::DefaultRegexEngine;
pub use types::{CompiledRegex, PatternFlags, RegexEngine};
