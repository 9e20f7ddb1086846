use std::sync::OnceLock;

use regex::Regex;

use super::{split_list, ValidationError, Validator};

const AUTHOR_PATTERN: &str =
    r"^[^<>,@]+ <[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}>$";

fn author_regex() -> Option<&'static Regex> {
    static AUTHOR: OnceLock<Option<Regex>> = OnceLock::new();
    AUTHOR.get_or_init(|| Regex::new(AUTHOR_PATTERN).ok()).as_ref()
}

/// Returns true for `Name <email>` entries with a well-formed address.
pub fn is_author(entry: &str) -> bool {
    author_regex()
        .map(|re| re.is_match(entry))
        .unwrap_or(false)
}

/// Rules for a comma-separated co-author list
#[derive(Debug, Clone)]
pub struct AuthorsValidator {
    raw: String,
}

impl AuthorsValidator {
    pub fn new(raw: impl Into<String>) -> Self {
        AuthorsValidator { raw: raw.into() }
    }
}

impl Validator for AuthorsValidator {
    type Output = Vec<String>;

    fn normalized(&self) -> String {
        split_list(&self.raw).join(", ")
    }

    fn errors(&self) -> Vec<ValidationError> {
        split_list(&self.raw)
            .into_iter()
            .filter(|entry| !is_author(entry))
            .map(|entry| {
                ValidationError::fatal(format!(
                    "invalid co-author '{}', expected 'Name <email>'",
                    entry
                ))
            })
            .collect()
    }

    fn parsed(&self) -> Vec<String> {
        split_list(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_valid() {
        let validator = AuthorsValidator::new("  ");
        assert!(validator.is_valid());
        assert!(validator.parsed().is_empty());
    }

    #[test]
    fn test_single_author() {
        let validator = AuthorsValidator::new("Jane Doe <jane@example.com>");
        assert!(validator.is_valid());
        assert_eq!(validator.parsed(), vec!["Jane Doe <jane@example.com>"]);
    }

    #[test]
    fn test_multiple_authors() {
        let validator =
            AuthorsValidator::new(" Jane  Doe <jane@example.com>,John <john.roe@mail.co.uk> ");
        assert!(validator.is_valid());
        assert_eq!(
            validator.normalized(),
            "Jane Doe <jane@example.com>, John <john.roe@mail.co.uk>"
        );
    }

    #[test]
    fn test_invalid_entries() {
        let validator =
            AuthorsValidator::new("Jane Doe, John <john@localhost>, <anon@example.com>");
        let errors = validator.errors();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].message.contains("'Jane Doe'"));
    }

    #[test]
    fn test_is_author() {
        assert!(is_author("Jane Doe <jane@example.com>"));
        assert!(!is_author("Jane Doe <jane@@example.com>"));
        assert!(!is_author("Jane Doe jane@example.com"));
    }

    #[test]
    fn test_normalized_is_idempotent() {
        let once = AuthorsValidator::new(" a  b <a@b.co> ,, c <c@d.co>").normalized();
        assert_eq!(AuthorsValidator::new(once.clone()).normalized(), once);
    }
}
