mod key;

pub use key::KeyKind;

use std::collections::HashMap;
use std::sync::Arc;

use regex::Regex;
use tracing::trace;

use crate::error::{MatcherError, Result};

/// A compiled pattern rule and its value
#[derive(Debug, Clone)]
struct PatternEntry<V> {
    regex: Regex,
    value: V,
}

/// Maps dotted-label hostnames to values.
///
/// Keys are routed into one of five places when added:
/// - `example.com`: exact table
/// - `*.example.com`: prefix table, keyed by `example.com`
/// - `example.*`: suffix table, keyed by `example`
/// - `^...`: ordered pattern list, compiled once on insert
/// - `_`: the default value
///
/// [`get`](Self::get) consults them in that order and returns the first hit.
/// Prefix and suffix rules match at label boundaries only, and the most
/// specific remainder wins.
///
/// The matcher has no internal locking. Populate it first, then share it
/// read-only, e.g. through [`freeze`](Self::freeze).
#[derive(Debug, Clone)]
pub struct LabelMatcher<V> {
    exact: HashMap<String, V>,
    prefix: HashMap<String, V>,
    suffix: HashMap<String, V>,
    patterns: Vec<PatternEntry<V>>,
    default: Option<V>,
}

impl<V> Default for LabelMatcher<V> {
    fn default() -> Self {
        Self {
            exact: HashMap::new(),
            prefix: HashMap::new(),
            suffix: HashMap::new(),
            patterns: Vec::new(),
            default: None,
        }
    }
}

impl<V> LabelMatcher<V> {
    /// Create an empty matcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a matcher by adding entries in order, stopping at the first error.
    pub fn from_entries<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
    {
        let mut matcher = Self::new();
        for (key, value) in entries {
            matcher.add(key.as_ref(), value)?;
        }
        Ok(matcher)
    }

    /// Classify `key` and store `value` in the matching table.
    ///
    /// A failed add leaves the matcher unchanged.
    pub fn add(&mut self, key: &str, value: V) -> Result<()> {
        match KeyKind::classify(key)? {
            KeyKind::Default => {
                if self.default.is_some() {
                    return Err(MatcherError::Duplicate(key.to_string()));
                }
                trace!(key, "added default rule");
                self.default = Some(value);
            }
            KeyKind::Pattern => {
                let regex = Regex::new(key)?;
                trace!(key, index = self.patterns.len(), "added pattern rule");
                self.patterns.push(PatternEntry { regex, value });
            }
            KeyKind::Prefix(rest) => {
                Self::insert_unique(&mut self.prefix, key, rest, value)?;
                trace!(key, remainder = rest, "added prefix rule");
            }
            KeyKind::Suffix(rest) => {
                Self::insert_unique(&mut self.suffix, key, rest, value)?;
                trace!(key, remainder = rest, "added suffix rule");
            }
            KeyKind::Exact => {
                Self::insert_unique(&mut self.exact, key, key, value)?;
                trace!(key, "added exact rule");
            }
        }
        Ok(())
    }

    fn insert_unique(
        table: &mut HashMap<String, V>,
        key: &str,
        slot: &str,
        value: V,
    ) -> Result<()> {
        if table.contains_key(slot) {
            return Err(MatcherError::Duplicate(key.to_string()));
        }
        table.insert(slot.to_string(), value);
        Ok(())
    }

    /// Look up the value for `key`.
    ///
    /// Precedence: exact, prefix wildcard, suffix wildcard, patterns in
    /// insertion order, default.
    pub fn get(&self, key: &str) -> Option<&V> {
        if !self.exact.is_empty() {
            if let Some(value) = self.exact.get(key) {
                return Some(value);
            }
        }

        if !self.prefix.is_empty() {
            if let Some(value) = self.get_prefix(key) {
                return Some(value);
            }
        }

        if !self.suffix.is_empty() {
            if let Some(value) = self.get_suffix(key) {
                return Some(value);
            }
        }

        if !self.patterns.is_empty() {
            if let Some(value) = self.get_pattern(key) {
                return Some(value);
            }
        }

        self.default.as_ref()
    }

    /// Whether any rule, including the default, applies to `key`
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of rules added, counting the default
    pub fn len(&self) -> usize {
        self.exact.len()
            + self.prefix.len()
            + self.suffix.len()
            + self.patterns.len()
            + usize::from(self.default.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finish construction and hand out a shareable read-only handle.
    pub fn freeze(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Match `*.example.com`.
    ///
    /// Walks label boundaries left to right, so for `a.b.c.d` the remainders
    /// `b.c.d`, `c.d`, `d` are tried in that order and the most specific
    /// rule wins. A dot at position 0 is not a boundary.
    fn get_prefix(&self, key: &str) -> Option<&V> {
        let bytes = key.as_bytes();
        let mut start = 1;
        while start < bytes.len() {
            let Some(offset) = bytes[start..].iter().position(|&b| b == b'.') else {
                break;
            };
            let dot = start + offset;
            if let Some(value) = self.prefix.get(&key[dot + 1..]) {
                return Some(value);
            }
            start = dot + 1;
        }
        None
    }

    /// Match `example.*`.
    ///
    /// Walks label boundaries right to left, so for `a.b.c.d` the remainders
    /// `a.b.c`, `a.b`, `a` are tried in that order.
    fn get_suffix(&self, key: &str) -> Option<&V> {
        let bytes = key.as_bytes();
        let mut end = bytes.len();
        while let Some(dot) = bytes[..end].iter().rposition(|&b| b == b'.') {
            if let Some(value) = self.suffix.get(&key[..dot]) {
                return Some(value);
            }
            end = dot;
        }
        None
    }

    /// Linear scan, O(number of patterns) per lookup
    fn get_pattern(&self, key: &str) -> Option<&V> {
        self.patterns
            .iter()
            .find(|entry| entry.regex.is_match(key))
            .map(|entry| &entry.value)
    }
}
