use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{MatcherError, Result};
use crate::types::TextRule;

/// Regex pattern for parsing rule lines
/// Format: key value
static RULE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\S+)\s+(\S.*)$").expect("RULE_PATTERN: hardcoded regex is invalid")
});

/// Maximum nesting depth for `file:` include directives.
const MAX_INCLUDE_DEPTH: usize = 10;

/// Parse matcher rules from text.
///
/// One rule per line, `key value`. Blank lines and `#` comments are skipped.
/// Supports `file: /path/to/rules.txt` directive to include rules from an external file.
pub fn parse_rules(text: &str) -> Result<Vec<TextRule>> {
    let rules = parse_rules_inner(text, 0)?;
    debug!(count = rules.len(), "parsed rules from text");
    Ok(rules)
}

fn parse_rules_inner(text: &str, depth: usize) -> Result<Vec<TextRule>> {
    if depth > MAX_INCLUDE_DEPTH {
        return Err(MatcherError::ParseError(format!(
            "file include depth exceeds maximum ({MAX_INCLUDE_DEPTH}), possible circular include"
        )));
    }

    let mut rules = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers

        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(path) = line.strip_prefix("file:") {
            let path = path.trim();
            let file_rules = parse_rules_from_file_inner(path, depth + 1)?;
            rules.extend(file_rules);
            continue;
        }

        rules.push(parse_single_rule(line, line_num)?);
    }

    Ok(rules)
}

/// Parse matcher rules from a file.
pub fn parse_rules_from_file(path: impl AsRef<Path>) -> Result<Vec<TextRule>> {
    parse_rules_from_file_inner(path, 0)
}

fn parse_rules_from_file_inner(path: impl AsRef<Path>, depth: usize) -> Result<Vec<TextRule>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        MatcherError::ParseError(format!(
            "Failed to read rules file '{}': {}",
            path.display(),
            e
        ))
    })?;
    let rules = parse_rules_inner(&text, depth)?;
    debug!(path = %path.display(), count = rules.len(), "parsed rules from file");
    Ok(rules)
}

/// Cut a comment: a line starting with `#`, or `#` after whitespace.
/// Pattern keys may contain `#` as long as it is not preceded by whitespace.
fn strip_comment(line: &str) -> &str {
    if line.trim_start().starts_with('#') {
        return "";
    }
    match line
        .as_bytes()
        .windows(2)
        .position(|w| w[0].is_ascii_whitespace() && w[1] == b'#')
    {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_single_rule(line: &str, line_num: usize) -> Result<TextRule> {
    let captures = RULE_PATTERN
        .captures(line)
        .ok_or_else(|| MatcherError::ParseErrorAtLine {
            line: line_num,
            message: format!("Missing value for key: {}", line),
        })?;

    Ok(TextRule::new(
        &captures[1],
        captures[2].trim_end(),
        line_num,
    ))
}
