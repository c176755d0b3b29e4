use crate::error::{MatcherError, Result};

/// Table a key is routed to by [`KeyKind::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind<'a> {
    /// `_`: the fallback value
    Default,
    /// Leading `^`: the whole key is a regular expression
    Pattern,
    /// `*.example.com`, holding the remainder `example.com`
    Prefix(&'a str),
    /// `example.*`, holding the remainder `example`
    Suffix(&'a str),
    /// Any other key, compared for full equality
    Exact,
}

impl<'a> KeyKind<'a> {
    /// Validate `key` and decide which table it belongs to.
    ///
    /// Lengths are byte lengths. Two-byte keys skip the interior `*` check
    /// and never classify as prefix or suffix, so `**`, `*.` and `.*` land
    /// in the exact table.
    pub fn classify(key: &'a str) -> Result<Self> {
        let bytes = key.as_bytes();
        let len = bytes.len();

        if len == 0 {
            return Err(MatcherError::TooShort);
        }

        if len == 1 {
            return match bytes[0] {
                b'.' | b'*' => Err(MatcherError::InvalidKey(key.to_string())),
                b'_' => Ok(KeyKind::Default),
                _ => Ok(KeyKind::Exact),
            };
        }

        if bytes[0] == b'^' {
            return Ok(KeyKind::Pattern);
        }

        if key.contains("..") {
            return Err(MatcherError::InvalidKey(key.to_string()));
        }

        if len > 2 {
            if bytes[1..len - 1].contains(&b'*') {
                return Err(MatcherError::InvalidKey(key.to_string()));
            }
            if let Some(rest) = key.strip_prefix("*.") {
                return Ok(KeyKind::Prefix(rest));
            }
            if let Some(rest) = key.strip_suffix(".*") {
                return Ok(KeyKind::Suffix(rest));
            }
        }

        Ok(KeyKind::Exact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn kind_of_err(key: &str) -> ErrorKind {
        KeyKind::classify(key).unwrap_err().kind()
    }

    #[test]
    fn test_classify_tables() {
        assert_eq!(KeyKind::classify("_").unwrap(), KeyKind::Default);
        assert_eq!(KeyKind::classify("a").unwrap(), KeyKind::Exact);
        assert_eq!(
            KeyKind::classify("www.example.com").unwrap(),
            KeyKind::Exact
        );
        assert_eq!(
            KeyKind::classify("*.example.com").unwrap(),
            KeyKind::Prefix("example.com")
        );
        assert_eq!(
            KeyKind::classify("www.example.*").unwrap(),
            KeyKind::Suffix("www.example")
        );
        assert_eq!(
            KeyKind::classify(r"^[w]{3}\.example\.com$").unwrap(),
            KeyKind::Pattern
        );
    }

    #[test]
    fn test_classify_rejects() {
        assert_eq!(kind_of_err(""), ErrorKind::TooShort);
        assert_eq!(kind_of_err("."), ErrorKind::InvalidKey);
        assert_eq!(kind_of_err("*"), ErrorKind::InvalidKey);
        assert_eq!(kind_of_err("a..b"), ErrorKind::InvalidKey);
        assert_eq!(kind_of_err(".."), ErrorKind::InvalidKey);
        assert_eq!(kind_of_err("a*b"), ErrorKind::InvalidKey);
        assert_eq!(kind_of_err("*.*.example.com"), ErrorKind::InvalidKey);
    }

    #[test]
    fn test_star_dot_star_is_prefix() {
        // Both leading "*." and trailing ".*" apply; prefix is checked first.
        assert_eq!(KeyKind::classify("*.*").unwrap(), KeyKind::Prefix("*"));
    }

    #[test]
    fn test_pattern_skips_label_checks() {
        assert_eq!(KeyKind::classify("^a..b").unwrap(), KeyKind::Pattern);
        assert_eq!(KeyKind::classify("^a*b").unwrap(), KeyKind::Pattern);
        // A lone caret is too short to be a pattern.
        assert_eq!(KeyKind::classify("^").unwrap(), KeyKind::Exact);
    }

    #[test]
    fn test_two_byte_keys_are_exact() {
        assert_eq!(KeyKind::classify("**").unwrap(), KeyKind::Exact);
        assert_eq!(KeyKind::classify("*.").unwrap(), KeyKind::Exact);
        assert_eq!(KeyKind::classify(".*").unwrap(), KeyKind::Exact);
        assert_eq!(KeyKind::classify("a*").unwrap(), KeyKind::Exact);
    }

    #[test]
    fn test_edge_stars_allowed() {
        // Only the interior is checked for '*'.
        assert_eq!(KeyKind::classify("*ab").unwrap(), KeyKind::Exact);
        assert_eq!(KeyKind::classify("ab*").unwrap(), KeyKind::Exact);
    }

    #[test]
    fn test_multibyte_keys() {
        assert_eq!(KeyKind::classify("é").unwrap(), KeyKind::Exact);
        assert_eq!(
            KeyKind::classify("*.bücher.de").unwrap(),
            KeyKind::Prefix("bücher.de")
        );
        assert_eq!(kind_of_err("ü*ü"), ErrorKind::InvalidKey);
    }
}
