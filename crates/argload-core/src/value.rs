//! Argument values as the host CLI holds them, and the content that replaces them.

/// Current value of a CLI argument.
///
/// Only `String` values are candidates for URI resolution; every other
/// variant passes through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    List(Vec<ArgValue>),
}

impl ArgValue {
    /// Returns the string payload, or `None` for non-string values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        ArgValue::String(s.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(s: String) -> Self {
        ArgValue::String(s)
    }
}

impl From<i64> for ArgValue {
    fn from(n: i64) -> Self {
        ArgValue::Integer(n)
    }
}

/// Content loaded from a `file://`, `fileb://`, `http://` or `https://` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedContent {
    /// Decoded text (`file://`, `http://`, `https://`).
    Text(String),
    /// Raw bytes, never decoded (`fileb://`).
    Binary(Vec<u8>),
}

impl LoadedContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            LoadedContent::Text(s) => Some(s),
            LoadedContent::Binary(_) => None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            LoadedContent::Text(s) => s.as_bytes(),
            LoadedContent::Binary(b) => b,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
