//! Segment name validation.

use regex::Regex;

/// Pattern applied to segment names when none is configured.
pub const DEFAULT_VALID_PATTERN: &str = r"^[a-zA-Z0-9_-]*$";

/// Rule a segment name must satisfy before it is committed.
#[derive(Debug, Clone)]
pub struct NameRule {
    pattern: Regex,
}

impl NameRule {
    /// Compile a rule from a regular expression.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// The rule built from [`DEFAULT_VALID_PATTERN`].
    pub fn default_rule() -> Result<Self, regex::Error> {
        Self::new(DEFAULT_VALID_PATTERN)
    }

    /// Check a candidate name. Empty names and names containing whitespace
    /// never pass, whatever the pattern says.
    pub fn accepts(&self, name: &str) -> bool {
        !name.is_empty() && !name.chars().any(char::is_whitespace) && self.pattern.is_match(name)
    }

    /// Source of the compiled pattern.
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}
