use std::path::Path;

use tracing::debug;

use crate::error::{MatcherError, Result};
use crate::matcher::LabelMatcher;
use crate::parser::{parse_rules, parse_rules_from_file};
use crate::types::TextRule;

/// Add parsed rules to a new matcher, in order.
///
/// The first failing rule aborts the build; its error is wrapped in
/// [`MatcherError::Rule`] carrying the source line.
pub fn compile(rules: &[TextRule]) -> Result<LabelMatcher<String>> {
    let mut matcher = LabelMatcher::new();
    for rule in rules {
        matcher
            .add(&rule.key, rule.value.clone())
            .map_err(|e| MatcherError::Rule {
                line: rule.line_num,
                source: Box::new(e),
            })?;
    }
    debug!(rules = matcher.len(), "compiled label matcher");
    Ok(matcher)
}

impl LabelMatcher<String> {
    /// See [`compile`].
    pub fn from_rules(rules: &[TextRule]) -> Result<Self> {
        compile(rules)
    }

    /// Parse and compile a rule list.
    pub fn from_rules_text(text: &str) -> Result<Self> {
        compile(&parse_rules(text)?)
    }

    /// Parse and compile a rule file, following `file:` includes.
    pub fn from_rules_file(path: impl AsRef<Path>) -> Result<Self> {
        compile(&parse_rules_from_file(path)?)
    }
}
