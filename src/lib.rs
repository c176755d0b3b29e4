//! Label Matcher - hostname-to-value lookup with label-aware wildcards
//!
//! This library maps dotted-label names (hostnames and similar) to values,
//! with support for:
//! - Exact keys
//! - Leading wildcards (`*.example.com`)
//! - Trailing wildcards (`example.*`)
//! - Regular expression keys (anything starting with `^`)
//! - A default value (`_`)
//!
//! # Example
//!
//! ```rust
//! use label_matcher::LabelMatcher;
//!
//! let mut matcher = LabelMatcher::new();
//! matcher.add("www.example.com", "A").unwrap();
//! matcher.add("*.example.com", "B").unwrap();
//! matcher.add("example.*", "C").unwrap();
//! matcher.add("_", "D").unwrap();
//!
//! assert_eq!(matcher.get("www.example.com"), Some(&"A"));
//! assert_eq!(matcher.get("foo.example.com"), Some(&"B"));
//! assert_eq!(matcher.get("example.org"), Some(&"C"));
//! assert_eq!(matcher.get("unrelated.test"), Some(&"D"));
//! ```
//!
//! # Key Syntax
//!
//! | Type | Example | Matches |
//! |------|---------|---------|
//! | Exact | `example.com` | `example.com` only |
//! | Prefix wildcard | `*.example.com` | `www.example.com`, `a.b.example.com` |
//! | Suffix wildcard | `example.*` | `example.org`, `example.co.uk` |
//! | Pattern | `^[w]{3}\.example\.com$` | anything the regex matches |
//! | Default | `_` | anything not matched above |
//!
//! Lookups try exact, prefix, suffix, patterns (in insertion order), then
//! the default. Among wildcard rules the most specific remainder wins.
//!
//! # Rule Lists
//!
//! Matchers can also be loaded from text, one `key value` pair per line:
//!
//! ```rust
//! use label_matcher::LabelMatcher;
//!
//! let matcher = LabelMatcher::from_rules_text("
//! *.example.com  edge   # all subdomains
//! _              origin
//! ").unwrap();
//!
//! assert_eq!(matcher.get("cdn.example.com").map(String::as_str), Some("edge"));
//! assert_eq!(matcher.get("example.net").map(String::as_str), Some("origin"));
//! ```

pub mod compile;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod types;

// Re-export commonly used items
pub use compile::compile;
pub use error::{ErrorKind, MatcherError, Result};
pub use matcher::{KeyKind, LabelMatcher};
pub use parser::{parse_rules, parse_rules_from_file};
pub use types::TextRule;
