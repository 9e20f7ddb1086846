use super::{collapse_whitespace, ValidationError, Validator};

/// Rules for the free-text body between header and footer
#[derive(Debug, Clone)]
pub struct BodyValidator {
    raw: String,
}

impl BodyValidator {
    pub fn new(raw: impl Into<String>) -> Self {
        BodyValidator { raw: raw.into() }
    }
}

impl Validator for BodyValidator {
    type Output = String;

    /// Lines are trimmed and whitespace-collapsed, `#` comment lines are
    /// dropped and blank runs shrink to a single blank line.
    fn normalized(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        for line in self.raw.lines().map(collapse_whitespace) {
            if line.starts_with('#') {
                continue;
            }
            let previous_blank = lines.last().map(|l| l.is_empty()).unwrap_or(false);
            if line.is_empty() && previous_blank {
                continue;
            }
            lines.push(line);
        }
        lines.join("\n").trim().to_string()
    }

    fn errors(&self) -> Vec<ValidationError> {
        let body = self.normalized();
        let mut errors = Vec::new();
        if body.is_empty() {
            return errors;
        }

        if !body.chars().next().is_some_and(char::is_uppercase) {
            errors.push(ValidationError::fatal(
                "body must start with an uppercase letter",
            ));
        }
        if !body.ends_with(['.', '?', '!']) {
            errors.push(ValidationError::fatal(
                "body must end with a period, question mark or exclamation mark",
            ));
        }

        errors
    }

    fn parsed(&self) -> String {
        self.normalized()
    }
}
