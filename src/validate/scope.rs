use super::{collapse_whitespace, ValidationError, Validator};

pub const MIN_LENGTH: usize = 3;
pub const MAX_LENGTH: usize = 20;

/// Rules for the scope between the header parentheses
#[derive(Debug, Clone)]
pub struct ScopeValidator {
    raw: String,
}

impl ScopeValidator {
    pub fn new(raw: impl Into<String>) -> Self {
        ScopeValidator { raw: raw.into() }
    }
}

impl Validator for ScopeValidator {
    type Output = String;

    fn normalized(&self) -> String {
        collapse_whitespace(&self.raw)
    }

    fn errors(&self) -> Vec<ValidationError> {
        let scope = self.normalized();
        let mut errors = Vec::new();

        let length = scope.chars().count();
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            errors.push(ValidationError::fatal(format!(
                "scope must be between {} and {} characters long",
                MIN_LENGTH, MAX_LENGTH
            )));
        }
        if scope != scope.to_lowercase() {
            errors.push(ValidationError::fatal("scope must be lowercase"));
        }
        if scope.chars().any(char::is_whitespace) {
            errors.push(ValidationError::fatal("scope must not contain whitespace"));
        }
        if scope.chars().any(|c| c.is_ascii_digit()) {
            errors.push(ValidationError::fatal("scope must not contain numbers"));
        }
        // Digits pass this check but were already rejected above.
        if !scope
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '/' || c == '-')
        {
            errors.push(ValidationError::fatal(
                "scope may only contain lowercase letters, numbers, slashes and dashes",
            ));
        }

        errors
    }

    fn parsed(&self) -> String {
        self.normalized()
    }
}
