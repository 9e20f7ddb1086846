use super::{collapse_whitespace, ValidationError, Validator};

pub const MIN_LENGTH: usize = 10;
pub const MAX_LENGTH: usize = 48;

/// Rules for the subject that follows the header
#[derive(Debug, Clone)]
pub struct SubjectValidator {
    raw: String,
}

impl SubjectValidator {
    pub fn new(raw: impl Into<String>) -> Self {
        SubjectValidator { raw: raw.into() }
    }
}

impl Validator for SubjectValidator {
    type Output = String;

    fn normalized(&self) -> String {
        collapse_whitespace(&self.raw)
    }

    fn errors(&self) -> Vec<ValidationError> {
        let subject = self.normalized();
        let mut errors = Vec::new();

        let length = subject.chars().count();
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            errors.push(ValidationError::fatal(format!(
                "subject must be between {} and {} characters long",
                MIN_LENGTH, MAX_LENGTH
            )));
        }
        if subject != subject.to_lowercase() {
            errors.push(ValidationError::fatal("subject must be lowercase"));
        }
        if subject.contains(['(', ')', ':']) {
            errors.push(ValidationError::fatal(
                "subject must not contain parentheses or colons",
            ));
        }
        if subject.ends_with('.') {
            errors.push(ValidationError::fatal("subject must not end with a period"));
        }

        errors
    }

    fn parsed(&self) -> String {
        self.normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(raw: &str) -> Vec<String> {
        SubjectValidator::new(raw)
            .errors()
            .into_iter()
            .map(|e| e.message)
            .collect()
    }

    #[test]
    fn test_valid_subject() {
        assert!(SubjectValidator::new("add readme to the project").is_valid());
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(
            messages("too short"),
            vec!["subject must be between 10 and 48 characters long"]
        );
        assert!(SubjectValidator::new("a".repeat(10)).is_valid());
        assert!(SubjectValidator::new("a".repeat(48)).is_valid());
        assert!(!SubjectValidator::new("a".repeat(49)).is_valid());
    }

    #[test]
    fn test_uppercase() {
        assert_eq!(
            messages("Add readme to the project"),
            vec!["subject must be lowercase"]
        );
    }

    #[test]
    fn test_forbidden_characters() {
        assert_eq!(
            messages("add readme (again)"),
            vec!["subject must not contain parentheses or colons"]
        );
        assert_eq!(
            messages("add readme: again"),
            vec!["subject must not contain parentheses or colons"]
        );
    }

    #[test]
    fn test_trailing_period() {
        assert_eq!(
            messages("add readme to the project."),
            vec!["subject must not end with a period"]
        );
    }

    #[test]
    fn test_whitespace_is_collapsed_before_checks() {
        let validator = SubjectValidator::new("  add   readme\tto the project ");
        assert_eq!(validator.normalized(), "add readme to the project");
        assert!(validator.is_valid());
    }

    #[test]
    fn test_normalized_is_idempotent() {
        for raw in ["  add   readme ", "Add README.", ""] {
            let once = SubjectValidator::new(raw).normalized();
            assert_eq!(SubjectValidator::new(once.clone()).normalized(), once);
        }
    }
}
