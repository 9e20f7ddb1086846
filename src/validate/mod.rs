//! Commit message validation
//!
//! Validators never fail: they collect [`ValidationError`]s, and an empty
//! list means the input is valid.

pub mod authors;
pub mod body;
pub mod issues;
pub mod message;
pub mod scope;
pub mod subject;

pub use authors::AuthorsValidator;
pub use body::BodyValidator;
pub use issues::IssuesValidator;
pub use message::{validate_message, ValidationReport};
pub use scope::ScopeValidator;
pub use subject::SubjectValidator;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker printed in front of every rendered validation error
pub const ERROR_MARKER: &str = "\u{2757}\u{FE0F}";

/// Severity of a validation error. Every current rule is `Fatal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Fatal,
    Warning,
    Info,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Fatal => write!(f, "fatal"),
            Level::Warning => write!(f, "warning"),
            Level::Info => write!(f, "info"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub level: Level,
    pub message: String,
}

impl ValidationError {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        ValidationError {
            level,
            message: message.into(),
        }
    }

    pub fn fatal(message: impl Into<String>) -> Self {
        Self::new(Level::Fatal, message)
    }

    /// `"<marker> <level> - <message>"`
    pub fn display_string(&self) -> String {
        format!("{} {} - {}", ERROR_MARKER, self.level, self.message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_string())
    }
}

/// A rule set for one field of a commit message
pub trait Validator {
    /// Typed value extracted from the field
    type Output;

    /// Canonical form of the raw input. Applying it twice changes nothing.
    fn normalized(&self) -> String;

    /// Rule violations, in rule order
    fn errors(&self) -> Vec<ValidationError>;

    fn parsed(&self) -> Self::Output;

    fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// `Ok` when valid, otherwise the comma-joined display strings
    fn verdict(&self) -> Result<(), String> {
        let errors = self.errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors
                .iter()
                .map(ValidationError::display_string)
                .collect::<Vec<_>>()
                .join(", "))
        }
    }
}

/// Trim and collapse runs of whitespace to single spaces
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split comma-separated input into normalized, non-empty entries
pub(crate) fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(collapse_whitespace)
        .filter(|entry| !entry.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_string() {
        let error = ValidationError::fatal("subject must be lowercase");
        assert_eq!(
            error.display_string(),
            "\u{2757}\u{FE0F} fatal - subject must be lowercase"
        );
        assert_eq!(error.to_string(), error.display_string());
    }

    #[test]
    fn test_levels_display() {
        assert_eq!(Level::Warning.to_string(), "warning");
        assert_eq!(Level::Info.to_string(), "info");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \t b\n c "), "a b c");
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(" 1, 2 ,, 3 "), vec!["1", "2", "3"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_verdict_joins_errors() {
        let validator = SubjectValidator::new("Short.");
        let verdict = validator.verdict().unwrap_err();
        assert!(verdict.contains("subject must be lowercase"));
        assert!(verdict.contains(", "));
        assert!(SubjectValidator::new("add readme to the project").verdict().is_ok());
    }
}
