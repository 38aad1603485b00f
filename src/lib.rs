//! # ACL Regex
//!
//! Regular-expression pattern lists for access-control rules.
//!
//! A rule is configured once from a token sequence (patterns interleaved with
//! the `-i` / `+i` case-sensitivity markers) and then queried on every
//! request. To keep lookups cheap, consecutive patterns with the same flags
//! are merged into a single alternation expression, so a list of a hundred
//! patterns usually costs one regex evaluation per query.
//!
//! ## Quick Start
//!
//! ```rust
//! use acl_regex::{DiagnosticContext, RegexData};
//!
//! let ctx = DiagnosticContext::new("squid.conf", 10, "acl blocked url_regex -i ^.*casino poker");
//! let mut data = RegexData::new();
//! data.parse(["-i", "^.*casino", "poker"], &ctx);
//!
//! assert_eq!(data.len(), 1);
//! assert!(data.matches(Some("http://CASINO.example/")));
//! assert!(!data.matches(Some("http://news.example/")));
//! ```
//!
//! ## Compilation pipeline
//!
//! 1. Each pattern is stripped of redundant leading wildcards (`^.*`, `.*`).
//! 2. Patterns too long for the merge buffer are logged and skipped.
//! 3. The optimizer merges runs of same-flag patterns into `(a)|(b)|...`
//!    expressions, flushing whenever the flags change or the configured
//!    chunk threshold is reached.
//! 4. If any merged expression fails to compile, every pattern is compiled
//!    on its own instead and only the invalid ones are dropped.
//!
//! Problems are reported through `tracing` with the configuration file, line
//! and raw line from the [`DiagnosticContext`].
//!
//! ## Reloading
//!
//! [`ReloadableRegexData`] publishes freshly parsed lists with an atomic
//! pointer swap so request threads never observe a partially built list.

pub mod compiler;
pub mod config;
pub mod context;
pub mod data;
pub mod error;
pub mod matcher;
pub mod reloadable;
pub mod token;

#[cfg(test)]
mod test_log;

// Pattern list and its reloadable wrapper
pub use data::RegexData;
pub use reloadable::ReloadableRegexData;

// Compiler and configuration
pub use compiler::{PatternCompiler, WildcardChange};
pub use config::AclConfig;
pub use context::DiagnosticContext;

// Core types and errors
pub use error::{AclError, Result};
pub use token::{Token, CASE_INSENSITIVE_MARKER, CASE_SENSITIVE_MARKER};

// Regex engine seam
pub use matcher::{CompiledRegex, DefaultRegexEngine, PatternEntry, PatternFlags, RegexEngine};
