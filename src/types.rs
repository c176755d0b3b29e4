/// Parsed text rule before it is added to a matcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRule {
    /// Matcher key (`example.com`, `*.example.com`, `example.*`, `^regex`, `_`)
    pub key: String,
    /// Everything after the key, trimmed
    pub value: String,
    /// Line number in the source text (for error reporting)
    pub line_num: usize,
}

impl TextRule {
    pub fn new(key: impl Into<String>, value: impl Into<String>, line_num: usize) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            line_num,
        }
    }
}
