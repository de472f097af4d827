//! Todo input types
//!
//! `TodoText` is the only way text reaches the store, so every persisted
//! row satisfies the trimmed, non-empty rule.

use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Trimmed, non-empty todo text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoText(String);

impl TodoText {
    /// Create todo text, trimming surrounding whitespace.
    ///
    /// # Example
    /// ```
    /// use todoctl_server::models::TodoText;
    ///
    /// assert_eq!(TodoText::new("  buy milk  ").unwrap().as_str(), "buy milk");
    /// assert!(TodoText::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        // U+FEFF is not Unicode White_Space but browsers strip it too
        let trimmed = s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "text" });
        }

        // PostgreSQL TEXT cannot hold NUL
        if trimmed.contains('\0') {
            return Err(ValidationError::InvalidFormat {
                field: "text",
                reason: "must not contain NUL characters",
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Validate an optional body field; a missing field counts as empty.
    pub fn from_field(field: Option<&str>) -> Result<Self, ValidationError> {
        Self::new(field.unwrap_or_default())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for TodoText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Database-assigned todo identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TodoId(pub i64);

impl TodoId {
    pub fn get(self) -> i64 {
        self.0
    }

    pub(crate) fn format_error() -> ValidationError {
        ValidationError::InvalidFormat {
            field: "id",
            reason: "must be an integer",
        }
    }
}

impl FromStr for TodoId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(TodoId).map_err(|_| Self::format_error())
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
