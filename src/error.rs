use thiserror::Error;

/// Classifies matcher errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Key has zero length
    TooShort,
    /// Key shape is not accepted (bare `.` or `*`, `..`, interior `*`)
    InvalidKey,
    /// Key, or the table slot it classifies into, is already registered
    Duplicate,
    /// Pattern key failed to compile
    Regex,
    /// Rule list could not be read or parsed
    Parse,
}

/// Label matcher error types
#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("key must be more than 0 characters")]
    TooShort,

    #[error("invalid key name: {0}")]
    InvalidKey(String),

    #[error("duplicate key: {0}")]
    Duplicate(String),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Parse error at line {line}: {message}")]
    ParseErrorAtLine { line: usize, message: String },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Rule at line {line}: {source}")]
    Rule {
        line: usize,
        #[source]
        source: Box<MatcherError>,
    },
}

impl MatcherError {
    /// Returns the error category. A `Rule` error reports the kind of the
    /// error it wraps.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatcherError::TooShort => ErrorKind::TooShort,
            MatcherError::InvalidKey(_) => ErrorKind::InvalidKey,
            MatcherError::Duplicate(_) => ErrorKind::Duplicate,
            MatcherError::Regex(_) => ErrorKind::Regex,
            MatcherError::ParseErrorAtLine { .. } | MatcherError::ParseError(_) => {
                ErrorKind::Parse
            }
            MatcherError::Rule { source, .. } => source.kind(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatcherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_is_matchable() {
        assert_eq!(MatcherError::TooShort.kind(), ErrorKind::TooShort);
        assert_eq!(
            MatcherError::InvalidKey("a..b".into()).kind(),
            ErrorKind::InvalidKey
        );
        assert_eq!(
            MatcherError::Duplicate("example.com".into()).kind(),
            ErrorKind::Duplicate
        );
        assert_eq!(
            MatcherError::ParseError("boom".into()).kind(),
            ErrorKind::Parse
        );
    }

    #[test]
    fn test_rule_error_reports_inner_kind() {
        let err = MatcherError::Rule {
            line: 3,
            source: Box::new(MatcherError::Duplicate("_".into())),
        };
        assert_eq!(err.kind(), ErrorKind::Duplicate);
        let display = format!("{}", err);
        assert!(display.contains("line 3"), "got: {}", display);
        assert!(display.contains("duplicate key: _"), "got: {}", display);
    }

    #[test]
    fn test_regex_error_converts() {
        let re_err = regex::Regex::new("^(unclosed").unwrap_err();
        let err: MatcherError = re_err.into();
        assert_eq!(err.kind(), ErrorKind::Regex);
        assert!(format!("{}", err).starts_with("Regex error"));
    }
}
