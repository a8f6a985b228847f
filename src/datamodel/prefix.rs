use std::fmt;

/// Optional literal prepended to every generated identifier.
///
/// The raw input is trimmed on construction; an empty prefix adds no segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Prefix(String);

impl Prefix {
    pub fn new(raw: &str) -> Self {
        Prefix(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Prefix {
    fn from(raw: &str) -> Self {
        Prefix::new(raw)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
